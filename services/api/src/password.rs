//! Password hashing with Argon2

use anyhow::Result;
use std::sync::{Arc, OnceLock};

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};

/// Salted one-way hashing of user passwords
#[derive(Clone, Default)]
pub struct PasswordService {
    argon2: Argon2<'static>,
    // Verified against when a login names no stored user; shared across clones.
    placeholder_hash: Arc<OnceLock<String>>,
}

impl PasswordService {
    /// Argon2id with the recommended default cost
    pub fn new() -> Self {
        Self::default()
    }

    /// Argon2id with explicit cost parameters (memory in KiB, iterations, lanes)
    pub fn with_params(m_cost: u32, t_cost: u32, p_cost: u32) -> Result<Self> {
        let params = Params::new(m_cost, t_cost, p_cost, None)
            .map_err(|e| anyhow::anyhow!("Invalid Argon2 parameters: {}", e))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
            placeholder_hash: Arc::default(),
        })
    }

    /// Hash a password with a fresh random salt
    pub fn hash(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut rand::thread_rng());
        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?
            .to_string();

        Ok(password_hash)
    }

    /// Verify a password against a stored PHC string
    pub fn verify(&self, password: &str, password_hash: &str) -> Result<bool> {
        let parsed_hash = PasswordHash::new(password_hash)
            .map_err(|e| anyhow::anyhow!("Failed to parse password hash: {}", e))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Verify against `password_hash`, or against a placeholder hash when
    /// there is none so both paths cost the same; the latter is always `false`
    pub fn verify_optional(&self, password: &str, password_hash: Option<&str>) -> Result<bool> {
        match password_hash {
            Some(password_hash) => self.verify(password, password_hash),
            None => {
                let placeholder = self.placeholder_hash()?;
                self.verify(password, placeholder)?;
                Ok(false)
            }
        }
    }

    pub fn has_placeholder_hash(&self) -> bool {
        self.placeholder_hash.get().is_some()
    }

    fn placeholder_hash(&self) -> Result<&str> {
        if let Some(hash) = self.placeholder_hash.get() {
            return Ok(hash);
        }

        let hash = self.hash(&uuid::Uuid::new_v4().to_string())?;
        Ok(self.placeholder_hash.get_or_init(|| hash))
    }
}
