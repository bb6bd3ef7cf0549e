//! Database reset endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::ResetSeed,
    repository::CollectionCounts,
};

/// Reset response with per-collection counts
#[derive(Serialize, ToSchema)]
pub struct ResetResponse {
    pub message: String,
    pub status: CollectionCounts,
}

/// Reset all collections, optionally loading seed data
#[utoipa::path(
    post,
    path = "/reset",
    tag = "reset",
    request_body(content = ResetSeed, description = "Optional seed data"),
    responses(
        (status = 200, description = "Collections reset", body = ResetResponse)
    )
)]
pub async fn reset_database(
    State(state): State<crate::AppState>,
    payload: Option<Json<ResetSeed>>,
) -> AppResult<Json<ResetResponse>> {
    // A missing or non-JSON body means clear-only.
    let seed = payload.map(|Json(seed)| seed).unwrap_or_default();

    let status = state.services.reset.reset(seed).await;

    Ok(Json(ResetResponse {
        message: "Database reset".to_string(),
        status,
    }))
}
