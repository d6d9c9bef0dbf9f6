/// Mood detection abstraction
///
/// The recommendation core only ever sees an opaque mood label. Where that
/// label comes from (a fixed stub, a file-name heuristic, or a remote
/// classification model) is decided at startup by wiring one of these
/// detectors into the application state.
use std::sync::Arc;
use std::time::Duration;

use crate::{
    config::{Config, DetectorKind},
    error::AppResult,
    models::UploadedImage,
};

pub mod filename;
pub mod fixed;
pub mod model;

pub use filename::FilenameDetector;
pub use fixed::FixedDetector;
pub use model::ModelDetector;

/// Trait for mood detectors
///
/// Implementations return the raw label they detected. Labels are normalized
/// by the caller, so a detector may return any spelling its backend uses.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MoodDetector: Send + Sync {
    /// Detect the mood shown in an uploaded image
    async fn detect(&self, image: &UploadedImage) -> AppResult<String>;

    /// Detector name for logging and health output
    fn name(&self) -> &'static str;
}

/// Builds the detector selected by configuration
pub fn build_detector(config: &Config) -> anyhow::Result<Arc<dyn MoodDetector>> {
    let detector: Arc<dyn MoodDetector> = match config.mood_detector {
        DetectorKind::Fixed => Arc::new(FixedDetector::new(config.default_mood.clone())),
        DetectorKind::Filename => Arc::new(FilenameDetector::new(config.default_mood.clone())),
        DetectorKind::Model => {
            let api_url = config
                .model_api_url
                .clone()
                .ok_or_else(|| anyhow::anyhow!("MODEL_API_URL is not set"))?;
            Arc::new(ModelDetector::new(
                api_url,
                config.model_api_key.clone(),
                Duration::from_secs(config.model_timeout_secs),
            )?)
        }
    };

    tracing::info!(detector = detector.name(), "Mood detector configured");

    Ok(detector)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(vars: &[(&str, &str)]) -> Config {
        let vars = vars.iter().map(|(k, v)| (k.to_string(), v.to_string()));
        envy::from_iter::<_, Config>(vars).unwrap()
    }

    #[test]
    fn test_build_each_detector() {
        let fixed = build_detector(&config_with(&[("MOOD_DETECTOR", "fixed")])).unwrap();
        assert_eq!(fixed.name(), "fixed");

        let filename = build_detector(&config_with(&[])).unwrap();
        assert_eq!(filename.name(), "filename");

        let model = build_detector(&config_with(&[
            ("MOOD_DETECTOR", "model"),
            ("MODEL_API_URL", "http://127.0.0.1:9/classify"),
        ]))
        .unwrap();
        assert_eq!(model.name(), "model");
    }

    #[test]
    fn test_model_detector_without_url_fails() {
        let result = build_detector(&config_with(&[("MOOD_DETECTOR", "model")]));
        assert!(result.is_err());
    }
}
