//! Food upload and shelter matching models

use serde::{Deserialize, Serialize};

/// Result of a stored food image, returned once and never persisted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadResponse {
    pub message: String,
    pub detected_food: String,
    pub file_path: String,
}

/// A candidate shelter for a donation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelterMatch {
    pub shelter: String,
    pub distance: String,
}

/// Query parameters accepted by the match endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchQuery {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub category: Option<String>,
}
