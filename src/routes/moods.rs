use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::Utc;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{DetectionResponse, MoodCategory, UploadedImage},
    routes::AppState,
    services::mood,
};

/// Multipart field the photo must be sent in
pub const IMAGE_FIELD: &str = "image";

/// Lists the canonical mood categories
pub async fn list() -> Json<Vec<MoodCategory>> {
    Json(MoodCategory::ALL.to_vec())
}

/// Handler for mood detection endpoint
///
/// Runs the configured detector over the uploaded photo. The client shows
/// the detected label for confirmation before asking for recommendations.
pub async fn detect(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    mut multipart: Multipart,
) -> AppResult<Json<DetectionResponse>> {
    let image = read_image(&mut multipart, state.max_upload_bytes).await?;
    let detector = state.detector.name();

    tracing::info!(
        request_id = %request_id,
        detector,
        file_name = %image.file_name,
        size = image.bytes.len(),
        "Processing mood detection request"
    );

    let raw_mood = state.detector.detect(&image).await?;
    let category = mood::normalize(&raw_mood);

    tracing::info!(
        request_id = %request_id,
        mood = %raw_mood,
        category = %category,
        "Mood detected"
    );

    Ok(Json(DetectionResponse {
        mood: raw_mood,
        category,
        file_name: image.file_name,
        detector,
        detected_at: Utc::now(),
    }))
}

/// Pulls the photo out of the multipart body, skipping unrelated fields
async fn read_image(multipart: &mut Multipart, limit: usize) -> AppResult<UploadedImage> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limit))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();

        if !content_type.starts_with("image/") {
            return Err(AppError::UnsupportedMedia(format!(
                "expected an image, got '{}'",
                content_type
            )));
        }

        let bytes = field.bytes().await.map_err(|e| multipart_error(e, limit))?;

        if bytes.is_empty() {
            return Err(AppError::InvalidInput("Uploaded image is empty".to_string()));
        }
        if bytes.len() > limit {
            return Err(AppError::PayloadTooLarge { limit });
        }

        return Ok(UploadedImage {
            file_name,
            content_type,
            bytes,
        });
    }

    Err(AppError::InvalidInput(format!(
        "Missing '{}' file field",
        IMAGE_FIELD
    )))
}

fn multipart_error(error: MultipartError, limit: usize) -> AppError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge { limit }
    } else {
        AppError::InvalidInput(error.body_text())
    }
}
