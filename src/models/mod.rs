use axum::body::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod mood;
pub mod recommendation;

pub use mood::MoodCategory;
pub use recommendation::Recommendation;

/// An image received from the client, handed to a mood detector as-is
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

// ============================================================================
// API Types
// ============================================================================

/// Request for recommendations from a raw mood label
#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub mood: String,
}

/// Recommendations for a mood, echoing the label the client sent
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub mood: String,
    pub category: MoodCategory,
    pub recommendations: &'static [Recommendation],
}

/// Result of running the configured detector on an upload
#[derive(Debug, Serialize)]
pub struct DetectionResponse {
    /// Label exactly as the detector produced it
    pub mood: String,
    pub category: MoodCategory,
    pub file_name: String,
    pub detector: &'static str,
    pub detected_at: DateTime<Utc>,
}

// ============================================================================
// Image Classification API Types
// ============================================================================

/// One entry of a remote classifier's response
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ClassifierLabel {
    pub label: String,
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_response_shape() {
        let response = RecommendationResponse {
            mood: "Joy".to_string(),
            category: MoodCategory::Happy,
            recommendations: &[],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["mood"], "Joy");
        assert_eq!(json["category"], "happy");
        assert!(json["recommendations"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_classifier_labels_deserialize() {
        let body = r#"[{"label":"happy","score":0.91},{"label":"sad","score":0.04}]"#;
        let labels: Vec<ClassifierLabel> = serde_json::from_str(body).unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].label, "happy");
    }
}
