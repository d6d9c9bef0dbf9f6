use axum::{extract::Path, Extension, Json};

use crate::{
    middleware::RequestId,
    models::{RecommendationRequest, RecommendationResponse},
    services::{mood, recommendations},
};

fn respond(request_id: RequestId, raw_mood: String) -> Json<RecommendationResponse> {
    let category = mood::normalize(&raw_mood);

    tracing::info!(
        request_id = %request_id,
        mood = %raw_mood,
        category = %category,
        "Serving recommendations"
    );

    Json(RecommendationResponse {
        mood: raw_mood,
        category,
        recommendations: recommendations::recommendations_for(category),
    })
}

/// Handler for recommendations endpoint
pub async fn recommend(
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> Json<RecommendationResponse> {
    respond(request_id, request.mood)
}

/// Same as [`recommend`] with the mood label taken from the path
pub async fn recommend_by_path(
    Extension(request_id): Extension<RequestId>,
    Path(raw_mood): Path<String>,
) -> Json<RecommendationResponse> {
    respond(request_id, raw_mood)
}
