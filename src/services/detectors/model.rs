/// Remote image-classification detector
///
/// Sends the raw upload to a hosted facial-expression model and takes the
/// highest scoring label. The endpoint is expected to answer with the common
/// classification shape: a JSON array of `{"label": ..., "score": ...}`.
use reqwest::{header, Client as HttpClient};
use std::time::Duration;

use crate::{
    error::{AppError, AppResult},
    models::{ClassifierLabel, UploadedImage},
    services::detectors::MoodDetector,
};

#[derive(Clone)]
pub struct ModelDetector {
    http_client: HttpClient,
    api_url: String,
    api_key: Option<String>,
}

impl ModelDetector {
    pub fn new(api_url: String, api_key: Option<String>, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_url,
            api_key,
        })
    }
}

/// Picks the label the classifier is most confident about
pub fn top_label(labels: Vec<ClassifierLabel>) -> AppResult<String> {
    labels
        .into_iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .map(|best| best.label)
        .ok_or_else(|| AppError::ExternalApi("Classifier returned no labels".to_string()))
}

#[async_trait::async_trait]
impl MoodDetector for ModelDetector {
    async fn detect(&self, image: &UploadedImage) -> AppResult<String> {
        let mut request = self
            .http_client
            .post(&self.api_url)
            .header(header::CONTENT_TYPE, image.content_type.as_str())
            .body(image.bytes.clone());

        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Classifier returned status {}: {}",
                status, body
            )));
        }

        let labels: Vec<ClassifierLabel> = response.json().await.map_err(|e| {
            AppError::ExternalApi(format!("Classifier response was not understood: {}", e))
        })?;

        tracing::debug!(label_count = labels.len(), "Classifier responded");

        top_label(labels)
    }

    fn name(&self) -> &'static str {
        "model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Bytes,
        http::{HeaderMap, StatusCode},
        routing::post,
        Json, Router,
    };
    use serde_json::json;

    fn label(label: &str, score: f64) -> ClassifierLabel {
        ClassifierLabel {
            label: label.to_string(),
            score,
        }
    }

    fn image() -> UploadedImage {
        UploadedImage {
            file_name: "face.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: Bytes::from_static(b"\xff\xd8\xff"),
        }
    }

    /// Serves `router` on an ephemeral port and returns its classify URL
    async fn spawn_classifier(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/classify", addr)
    }

    fn detector(url: String, api_key: Option<&str>) -> ModelDetector {
        ModelDetector::new(url, api_key.map(String::from), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_top_label_picks_highest_score() {
        let labels = vec![label("sad", 0.1), label("surprise", 0.7), label("happy", 0.2)];
        assert_eq!(top_label(labels).unwrap(), "surprise");
    }

    #[test]
    fn test_top_label_empty_is_error() {
        assert!(matches!(top_label(vec![]), Err(AppError::ExternalApi(_))));
    }

    #[tokio::test]
    async fn test_detect_sends_image_and_auth() {
        let router = Router::new().route(
            "/classify",
            post(|headers: HeaderMap, body: Bytes| async move {
                assert_eq!(headers[header::CONTENT_TYPE], "image/jpeg");
                assert_eq!(headers[header::AUTHORIZATION], "Bearer secret");
                assert_eq!(&body[..], b"\xff\xd8\xff");
                Json(json!([
                    {"label": "neutral", "score": 0.3},
                    {"label": "fear", "score": 0.6}
                ]))
            }),
        );
        let url = spawn_classifier(router).await;

        let mood = detector(url, Some("secret")).detect(&image()).await.unwrap();
        assert_eq!(mood, "fear");
    }

    #[tokio::test]
    async fn test_detect_error_status() {
        let router = Router::new().route(
            "/classify",
            post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "model loading") }),
        );
        let url = spawn_classifier(router).await;

        let err = detector(url, None).detect(&image()).await.unwrap_err();
        match err {
            AppError::ExternalApi(msg) => assert!(msg.contains("503")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_detect_malformed_body() {
        let router = Router::new().route(
            "/classify",
            post(|| async { Json(json!({"error": "unexpected"})) }),
        );
        let url = spawn_classifier(router).await;

        let err = detector(url, None).detect(&image()).await.unwrap_err();
        assert!(matches!(err, AppError::ExternalApi(_)));
    }
}
