//! User model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Stored user; the password only ever exists as an Argon2 PHC string
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
