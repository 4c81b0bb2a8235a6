//! Application state shared across handlers

use sqlx::PgPool;
use std::sync::Arc;

use crate::{
    detection::StaticFoodDetector,
    matching::MockShelterMatcher,
    password::PasswordService,
    repositories::{
        InMemoryDonationRepository, InMemoryUserRepository, PgDonationRepository,
        PgUserRepository,
    },
    services::{DonationService, FoodUploadService, UserService},
    uploads::UploadStorage,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub donations: DonationService,
    pub food: FoodUploadService,
    pub users: UserService,
}

impl AppState {
    pub fn new(donations: DonationService, food: FoodUploadService, users: UserService) -> Self {
        Self {
            donations,
            food,
            users,
        }
    }

    /// Donations and users in PostgreSQL
    pub fn postgres(pool: PgPool, storage: UploadStorage) -> Self {
        Self::new(
            DonationService::new(
                Arc::new(PgDonationRepository::new(pool.clone())),
                Arc::new(MockShelterMatcher),
            ),
            FoodUploadService::new(storage, Arc::new(StaticFoodDetector::default())),
            UserService::new(Arc::new(PgUserRepository::new(pool)), PasswordService::new()),
        )
    }

    /// Everything but uploads kept in process memory
    pub fn in_memory(storage: UploadStorage, passwords: PasswordService) -> Self {
        Self::new(
            DonationService::new(
                Arc::new(InMemoryDonationRepository::new()),
                Arc::new(MockShelterMatcher),
            ),
            FoodUploadService::new(storage, Arc::new(StaticFoodDetector::default())),
            UserService::new(Arc::new(InMemoryUserRepository::new()), passwords),
        )
    }
}
