//! API handlers for the REST endpoints

pub mod books;
pub mod health;
pub mod holds;
pub mod loans;
pub mod openapi;
pub mod reset;
pub mod users;

use axum::{
    routing::{delete, get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{IntoParams, ToSchema};

use crate::AppState;

/// Response body carrying only a status message
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Free-text search parameters shared by the list endpoints
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive substring matched against the serialized
    /// entity; absent or empty returns the full collection
    pub q: Option<String>,
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Database reset
        .route("/reset", post(reset::reset_database))
        // Users
        .route("/users", get(users::search_users))
        .route("/users", post(users::add_user))
        .route("/users/:id", delete(users::delete_user))
        // Books
        .route("/books", get(books::search_books))
        .route("/books", post(books::add_book))
        .route("/books/:id", get(books::get_book))
        .route("/books/:id", delete(books::delete_book))
        // Loans
        .route("/loans", get(loans::search_loans))
        .route("/loans", post(loans::add_loan))
        .route("/loans/:user_id/:book_id", delete(loans::delete_loan))
        // Holds
        .route("/holds", get(holds::search_holds))
        .route("/holds", post(holds::add_hold))
        .route("/holds/:id", delete(holds::delete_hold))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .merge(api)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
