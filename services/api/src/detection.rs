//! Food recognition for uploaded images

/// Turns image bytes into a food label
pub trait FoodDetector: Send + Sync {
    fn detect(&self, image: &[u8]) -> String;
}

/// Detector that answers with the same label for every image
#[derive(Debug, Clone)]
pub struct StaticFoodDetector {
    label: String,
}

impl StaticFoodDetector {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Default for StaticFoodDetector {
    fn default() -> Self {
        Self::new("Pasta")
    }
}

impl FoodDetector for StaticFoodDetector {
    fn detect(&self, _image: &[u8]) -> String {
        self.label.clone()
    }
}
