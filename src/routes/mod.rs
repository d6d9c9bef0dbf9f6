use axum::{
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    middleware::{make_span_with_request_id, request_id_middleware},
    services::detectors::MoodDetector,
};

pub mod moods;
pub mod recommendations;

/// Room for multipart boundaries and part headers on top of the image itself
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Shared application state
pub struct AppState {
    pub detector: Arc<dyn MoodDetector>,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(detector: Arc<dyn MoodDetector>, max_upload_bytes: usize) -> Self {
        Self {
            detector,
            max_upload_bytes,
        }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    let body_limit = state.max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/moods", get(moods::list))
        .route("/moods/detect", post(moods::detect))
        .route("/recommendations", post(recommendations::recommend))
        .route("/recommendations/:mood", get(recommendations::recommend_by_path))
}

/// Health check endpoint
async fn health_check(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "healthy", "detector": state.detector.name() })),
    )
}
