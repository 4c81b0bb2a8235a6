//! User service

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::{
    error::{ApiError, ApiResult},
    password::PasswordService,
    repositories::UserStore,
};

/// Registration and credential checks
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    passwords: PasswordService,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, passwords: PasswordService) -> Self {
        Self { store, passwords }
    }

    /// Register a new user; the username must not be taken
    pub async fn register(&self, username: &str, password: &str) -> ApiResult<()> {
        let password = password.to_string();
        let password_hash = self
            .with_passwords(move |passwords| passwords.hash(&password))
            .await?;

        if !self.store.insert(username, &password_hash).await? {
            info!("Registration rejected, username taken: {}", username);
            return Err(ApiError::AlreadyExists);
        }

        info!("User registered: {}", username);
        Ok(())
    }

    /// Check a username/password pair; no session is created
    ///
    /// Unknown usernames still pay for one hash verification.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<()> {
        let stored_hash = self
            .store
            .find_by_username(username)
            .await?
            .map(|user| user.password_hash);
        let known_user = stored_hash.is_some();

        let password = password.to_string();
        let verified = self
            .with_passwords(move |passwords| {
                passwords.verify_optional(&password, stored_hash.as_deref())
            })
            .await?;

        if !verified {
            if known_user {
                warn!("Login failed for user: {}", username);
            } else {
                warn!("Login failed for unknown user: {}", username);
            }
            return Err(ApiError::InvalidCredentials);
        }

        info!("Login successful for user: {}", username);
        Ok(())
    }

    /// Run Argon2 work on the blocking pool
    async fn with_passwords<T, F>(&self, job: F) -> ApiResult<T>
    where
        F: FnOnce(PasswordService) -> anyhow::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let passwords = self.passwords.clone();
        tokio::task::spawn_blocking(move || job(passwords))
            .await
            .map_err(|e| {
                error!("Password task panicked or was cancelled: {}", e);
                ApiError::InternalServerError
            })?
            .map_err(|e| {
                error!("Password hashing failed: {}", e);
                ApiError::InternalServerError
            })
    }
}
