//! Hold management endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::{error::AppResult, models::Hold};

use super::{MessageResponse, SearchQuery};

/// Response returned when a hold is created
#[derive(Serialize, ToSchema)]
pub struct HoldCreatedResponse {
    pub message: String,
    pub hold: Hold,
}

/// Create a new hold
#[utoipa::path(
    post,
    path = "/holds",
    tag = "holds",
    request_body = Value,
    responses(
        (status = 201, description = "Hold created", body = HoldCreatedResponse)
    )
)]
pub async fn add_hold(
    State(state): State<crate::AppState>,
    Json(payload): Json<Value>,
) -> AppResult<(StatusCode, Json<HoldCreatedResponse>)> {
    let hold = state.services.holds.create_hold(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(HoldCreatedResponse {
            message: "Hold added".to_string(),
            hold,
        }),
    ))
}

/// Delete holds by ID
#[utoipa::path(
    delete,
    path = "/holds/{id}",
    tag = "holds",
    params(
        ("id" = i64, Path, description = "Hold ID")
    ),
    responses(
        (status = 200, description = "Hold deleted (also when nothing matched)", body = MessageResponse)
    )
)]
pub async fn delete_hold(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> Json<MessageResponse> {
    state.services.holds.delete_hold(id).await;

    Json(MessageResponse {
        message: "Hold deleted".to_string(),
    })
}

/// Search holds
#[utoipa::path(
    get,
    path = "/holds",
    tag = "holds",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching holds", body = Vec<Hold>)
    )
)]
pub async fn search_holds(
    State(state): State<crate::AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Hold>> {
    let holds = state.services.holds.search_holds(query.q.as_deref()).await;
    Json(holds)
}
