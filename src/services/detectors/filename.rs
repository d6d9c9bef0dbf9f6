use crate::{error::AppResult, models::UploadedImage, services::detectors::MoodDetector};

/// Keywords looked for in the file name, checked in order
const FILENAME_HINTS: &[(&str, &str)] = &[
    ("happy", "happy"),
    ("smile", "happy"),
    ("sad", "sad"),
    ("angry", "angry"),
];

/// Demo detector that guesses the mood from the uploaded file's name
///
/// Lets a tester steer the result by naming the photo, e.g. `me_smile.jpg`.
/// Names without a known keyword report the fallback label.
#[derive(Debug, Clone)]
pub struct FilenameDetector {
    fallback: String,
}

impl FilenameDetector {
    pub fn new(fallback: String) -> Self {
        Self { fallback }
    }

    fn guess(&self, file_name: &str) -> String {
        let lower = file_name.to_lowercase();
        FILENAME_HINTS
            .iter()
            .find(|(keyword, _)| lower.contains(keyword))
            .map(|(_, mood)| mood.to_string())
            .unwrap_or_else(|| self.fallback.clone())
    }
}

#[async_trait::async_trait]
impl MoodDetector for FilenameDetector {
    async fn detect(&self, image: &UploadedImage) -> AppResult<String> {
        let mood = self.guess(&image.file_name);
        tracing::debug!(file_name = %image.file_name, mood = %mood, "Mood guessed from file name");
        Ok(mood)
    }

    fn name(&self) -> &'static str {
        "filename"
    }
}
