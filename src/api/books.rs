//! Book management endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::{error::AppResult, models::Book};

use super::SearchQuery;

/// Response returned when a book is created
#[derive(Serialize, ToSchema)]
pub struct BookCreatedResponse {
    pub message: String,
    pub book: Book,
}

/// Response returned when a book is deleted
#[derive(Serialize, ToSchema)]
pub struct BookDeletedResponse {
    pub message: String,
    #[serde(rename = "booksRemaining")]
    pub books_remaining: usize,
}

/// Add a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Value,
    responses(
        (status = 201, description = "Book created", body = BookCreatedResponse),
        (status = 400, description = "Missing id or duplicate book", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_book(
    State(state): State<crate::AppState>,
    Json(payload): Json<Map<String, Value>>,
) -> AppResult<(StatusCode, Json<BookCreatedResponse>)> {
    let book = state.services.books.create_book(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookCreatedResponse {
            message: "Book Added".to_string(),
            book,
        }),
    ))
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get_book(id).await?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = BookDeletedResponse),
        (status = 400, description = "Book has active loans", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<BookDeletedResponse>> {
    let books_remaining = state.services.books.delete_book(id).await?;

    Ok(Json(BookDeletedResponse {
        message: "Book deleted".to_string(),
        books_remaining,
    }))
}

/// Search books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching books", body = Vec<Book>)
    )
)]
pub async fn search_books(
    State(state): State<crate::AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Book>> {
    let books = state.services.books.search_books(query.q.as_deref()).await;
    Json(books)
}
