//! User repository for database operations

use async_trait::async_trait;
use chrono::Utc;
use common::error::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::info;

use crate::models::user::User;

/// Persistence boundary for users
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user unless the username is taken; returns whether it was inserted
    ///
    /// The check and the insert are a single atomic step.
    async fn insert(&self, username: &str, password_hash: &str) -> DatabaseResult<bool>;

    /// Find a user by exact username
    async fn find_by_username(&self, username: &str) -> DatabaseResult<Option<User>>;
}

/// PostgreSQL user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserRepository {
    async fn insert(&self, username: &str, password_hash: &str) -> DatabaseResult<bool> {
        info!("Creating new user: {}", username);

        let result = sqlx::query(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES ($1, $2)
            ON CONFLICT (username) DO NOTHING
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(result.rows_affected() == 1)
    }

    async fn find_by_username(&self, username: &str) -> DatabaseResult<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::Query)
    }
}

/// Process-local user store
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn insert(&self, username: &str, password_hash: &str) -> DatabaseResult<bool> {
        let mut users = self.users.lock().await;
        if users.contains_key(username) {
            return Ok(false);
        }

        let id = i32::try_from(users.len() + 1).unwrap_or(i32::MAX);
        users.insert(
            username.to_string(),
            User {
                id,
                username: username.to_string(),
                password_hash: password_hash.to_string(),
                created_at: Utc::now(),
            },
        );
        Ok(true)
    }

    async fn find_by_username(&self, username: &str) -> DatabaseResult<Option<User>> {
        Ok(self.users.lock().await.get(username).cloned())
    }
}
