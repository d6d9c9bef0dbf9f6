use crate::{error::AppResult, models::UploadedImage, services::detectors::MoodDetector};

/// Demo detector that ignores the image and reports one configured label
#[derive(Debug, Clone)]
pub struct FixedDetector {
    mood: String,
}

impl FixedDetector {
    pub fn new(mood: String) -> Self {
        Self { mood }
    }
}

#[async_trait::async_trait]
impl MoodDetector for FixedDetector {
    async fn detect(&self, image: &UploadedImage) -> AppResult<String> {
        tracing::debug!(file_name = %image.file_name, mood = %self.mood, "Fixed mood reported");
        Ok(self.mood.clone())
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}
