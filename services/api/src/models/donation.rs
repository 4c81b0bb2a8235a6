//! Donation models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Donation row as stored and as returned by the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Donation {
    pub id: i32,
    pub food_name: Option<String>,
    pub quantity: Option<String>,
    pub donor: Option<String>,
    pub receiver: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Donation creation payload; every field is optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewDonation {
    pub food_name: Option<String>,
    pub quantity: Option<String>,
    pub donor: Option<String>,
    pub receiver: Option<String>,
}
