//! Loan management endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::{IntoParams, ToSchema};

use crate::{error::AppResult, models::Loan};

use super::MessageResponse;

/// Query filters for listing loans
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LoanQuery {
    /// Case-insensitive substring matched against the serialized loan
    pub q: Option<String>,
    /// Exact user id filter
    #[serde(rename = "userId")]
    pub user_id: Option<i64>,
    /// Exact book id filter
    #[serde(rename = "bookId")]
    pub book_id: Option<i64>,
}

/// Response returned when a loan is created
#[derive(Serialize, ToSchema)]
pub struct LoanCreatedResponse {
    pub message: String,
    pub loan: Loan,
}

/// Create a new loan
#[utoipa::path(
    post,
    path = "/loans",
    tag = "loans",
    request_body = Value,
    responses(
        (status = 201, description = "Loan created", body = LoanCreatedResponse),
        (status = 400, description = "Missing field, unknown user or book, or duplicate loan", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_loan(
    State(state): State<crate::AppState>,
    Json(payload): Json<Map<String, Value>>,
) -> AppResult<(StatusCode, Json<LoanCreatedResponse>)> {
    let loan = state.services.loans.create_loan(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(LoanCreatedResponse {
            message: "Loan added".to_string(),
            loan,
        }),
    ))
}

/// Delete a loan by user ID and book ID
#[utoipa::path(
    delete,
    path = "/loans/{userId}/{bookId}",
    tag = "loans",
    params(
        ("userId" = i64, Path, description = "ID of the borrowing user"),
        ("bookId" = i64, Path, description = "ID of the borrowed book")
    ),
    responses(
        (status = 200, description = "Loan deleted", body = MessageResponse),
        (status = 404, description = "Loan not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_loan(
    State(state): State<crate::AppState>,
    Path((user_id, book_id)): Path<(i64, i64)>,
) -> AppResult<Json<MessageResponse>> {
    state.services.loans.delete_loan(user_id, book_id).await?;

    Ok(Json(MessageResponse {
        message: "Loan deleted".to_string(),
    }))
}

/// Search loans
#[utoipa::path(
    get,
    path = "/loans",
    tag = "loans",
    params(LoanQuery),
    responses(
        (status = 200, description = "Matching loans", body = Vec<Loan>)
    )
)]
pub async fn search_loans(
    State(state): State<crate::AppState>,
    Query(query): Query<LoanQuery>,
) -> Json<Vec<Loan>> {
    let loans = state
        .services
        .loans
        .search_loans(query.q.as_deref(), query.user_id, query.book_id)
        .await;
    Json(loans)
}
