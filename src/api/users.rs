//! User management endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::{error::AppResult, models::User};

use super::{MessageResponse, SearchQuery};

/// Response returned when a user is created
#[derive(Serialize, ToSchema)]
pub struct UserCreatedResponse {
    pub message: String,
    pub user: User,
}

/// Add a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = Value,
    responses(
        (status = 201, description = "User created", body = UserCreatedResponse),
        (status = 400, description = "Missing id or duplicate user", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_user(
    State(state): State<crate::AppState>,
    Json(payload): Json<Map<String, Value>>,
) -> AppResult<(StatusCode, Json<UserCreatedResponse>)> {
    let user = state.services.users.create_user(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserCreatedResponse {
            message: "User Added".to_string(),
            user,
        }),
    ))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "User has active loans", body = crate::error::ErrorResponse),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    state.services.users.delete_user(id).await?;

    Ok(Json(MessageResponse {
        message: "User deleted".to_string(),
    }))
}

/// Search users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching users", body = Vec<User>)
    )
)]
pub async fn search_users(
    State(state): State<crate::AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<User>> {
    let users = state.services.users.search_users(query.q.as_deref()).await;
    Json(users)
}
