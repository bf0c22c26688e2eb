use axum::Json;
use contracts::domain::a002_user_sector::{Submission, SubmissionDto};
use serde_json::Value;

use crate::domain::a002_user_sector;

type ApiError = (axum::http::StatusCode, Json<Value>);

/// GET /sectors
pub async fn list_all() -> Json<Vec<Submission>> {
    Json(a002_user_sector::service::list_all().await)
}

/// POST /sectors
pub async fn create(Json(dto): Json<SubmissionDto>) -> Result<Json<Submission>, ApiError> {
    tracing::debug!("Received submission create: name={}", dto.name);

    a002_user_sector::service::create(dto)
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!("Failed to create submission: {}", e);
            e.into_response_parts()
        })
}

/// PUT /sectors/edit
pub async fn update(Json(dto): Json<SubmissionDto>) -> Result<Json<Submission>, ApiError> {
    tracing::debug!(
        "Received submission update: id={:?}, name={}",
        dto.id,
        dto.name
    );

    a002_user_sector::service::update(dto)
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!("Failed to update submission: {}", e);
            e.into_response_parts()
        })
}
