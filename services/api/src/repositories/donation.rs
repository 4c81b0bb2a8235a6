//! Donation repository for database operations

use async_trait::async_trait;
use chrono::Utc;
use common::error::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use tokio::sync::Mutex;

use crate::models::donation::{Donation, NewDonation};

/// Persistence boundary for donations
#[async_trait]
pub trait DonationStore: Send + Sync {
    /// All donations in insertion order
    async fn list(&self) -> DatabaseResult<Vec<Donation>>;

    /// Append a donation; id and timestamp are assigned by the store
    async fn create(&self, new_donation: &NewDonation) -> DatabaseResult<Donation>;

    /// Whether the backing store is reachable
    async fn health_check(&self) -> DatabaseResult<bool> {
        Ok(true)
    }
}

/// PostgreSQL donation repository
#[derive(Clone)]
pub struct PgDonationRepository {
    pool: PgPool,
}

impl PgDonationRepository {
    /// Create a new donation repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DonationStore for PgDonationRepository {
    async fn list(&self) -> DatabaseResult<Vec<Donation>> {
        sqlx::query_as::<_, Donation>(
            r#"
            SELECT id, food_name, quantity, donor, receiver, created_at
            FROM donations
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::Query)
    }

    async fn create(&self, new_donation: &NewDonation) -> DatabaseResult<Donation> {
        sqlx::query_as::<_, Donation>(
            r#"
            INSERT INTO donations (food_name, quantity, donor, receiver)
            VALUES ($1, $2, $3, $4)
            RETURNING id, food_name, quantity, donor, receiver, created_at
            "#,
        )
        .bind(&new_donation.food_name)
        .bind(&new_donation.quantity)
        .bind(&new_donation.donor)
        .bind(&new_donation.receiver)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::Query)
    }

    async fn health_check(&self) -> DatabaseResult<bool> {
        common::database::health_check(&self.pool).await
    }
}

/// Process-local donation store
#[derive(Default)]
pub struct InMemoryDonationRepository {
    rows: Mutex<Vec<Donation>>,
}

impl InMemoryDonationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DonationStore for InMemoryDonationRepository {
    async fn list(&self) -> DatabaseResult<Vec<Donation>> {
        Ok(self.rows.lock().await.clone())
    }

    async fn create(&self, new_donation: &NewDonation) -> DatabaseResult<Donation> {
        let mut rows = self.rows.lock().await;
        let id = rows.last().map_or(1, |last| last.id + 1);
        let donation = Donation {
            id,
            food_name: new_donation.food_name.clone(),
            quantity: new_donation.quantity.clone(),
            donor: new_donation.donor.clone(),
            receiver: new_donation.receiver.clone(),
            created_at: Utc::now(),
        };
        rows.push(donation.clone());
        Ok(donation)
    }
}
