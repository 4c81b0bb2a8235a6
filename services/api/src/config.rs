//! Service configuration read from the environment

use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::path::PathBuf;

/// HTTP service settings
///
/// # Environment Variables
/// - `WASTE_NOT_BIND_ADDRESS`: listen address (default: "0.0.0.0:5000")
/// - `WASTE_NOT_UPLOAD_DIR`: directory for uploaded images (default: "uploads")
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub bind_address: String,
    pub upload_dir: PathBuf,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("bind_address", "0.0.0.0:5000")?
            .set_default("upload_dir", "uploads")?
            .add_source(Environment::with_prefix("WASTE_NOT"))
            .build()?
            .try_deserialize()
    }
}
