//! Food upload service

use std::sync::Arc;

use crate::{
    detection::FoodDetector, error::ApiResult, models::food::UploadResponse,
    uploads::UploadStorage,
};

/// Stores food images and labels them
#[derive(Clone)]
pub struct FoodUploadService {
    storage: UploadStorage,
    detector: Arc<dyn FoodDetector>,
}

impl FoodUploadService {
    pub fn new(storage: UploadStorage, detector: Arc<dyn FoodDetector>) -> Self {
        Self { storage, detector }
    }

    /// Persist the image and report what the detector saw
    pub async fn upload_food(&self, filename: &str, image: &[u8]) -> ApiResult<UploadResponse> {
        let path = self.storage.save(filename, image).await?;
        let detected_food = self.detector.detect(image);

        Ok(UploadResponse {
            message: "Image received".to_string(),
            detected_food,
            file_path: path.display().to_string(),
        })
    }
}
