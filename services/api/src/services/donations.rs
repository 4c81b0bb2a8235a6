//! Donation service

use std::sync::Arc;
use tracing::info;

use crate::{
    error::ApiResult,
    matching::ShelterMatcher,
    models::{
        donation::{Donation, NewDonation},
        food::{MatchQuery, ShelterMatch},
    },
    repositories::DonationStore,
};

/// Creates and lists donations, and suggests shelters for them
#[derive(Clone)]
pub struct DonationService {
    store: Arc<dyn DonationStore>,
    matcher: Arc<dyn ShelterMatcher>,
}

impl DonationService {
    pub fn new(store: Arc<dyn DonationStore>, matcher: Arc<dyn ShelterMatcher>) -> Self {
        Self { store, matcher }
    }

    pub async fn list_donations(&self) -> ApiResult<Vec<Donation>> {
        Ok(self.store.list().await?)
    }

    pub async fn create_donation(&self, new_donation: &NewDonation) -> ApiResult<Donation> {
        let donation = self.store.create(new_donation).await?;
        info!(
            "Donation {} created (food: {:?}, donor: {:?})",
            donation.id, donation.food_name, donation.donor
        );
        Ok(donation)
    }

    pub fn find_matches(&self, query: &MatchQuery) -> Vec<ShelterMatch> {
        self.matcher.find_matches(query)
    }

    pub async fn store_healthy(&self) -> ApiResult<bool> {
        Ok(self.store.health_check().await?)
    }
}
