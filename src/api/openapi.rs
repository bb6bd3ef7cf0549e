//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, holds, loans, reset, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Librarium API",
        version = "1.0.0",
        description = "In-memory library management REST API used as a test target"
    ),
    paths(
        // Health
        health::health_check,
        // Reset
        reset::reset_database,
        // Users
        users::search_users,
        users::add_user,
        users::delete_user,
        // Books
        books::search_books,
        books::add_book,
        books::get_book,
        books::delete_book,
        // Loans
        loans::search_loans,
        loans::add_loan,
        loans::delete_loan,
        // Holds
        holds::search_holds,
        holds::add_hold,
        holds::delete_hold,
    ),
    components(
        schemas(
            // Models
            crate::models::User,
            crate::models::Book,
            crate::models::Loan,
            crate::models::Hold,
            crate::models::ResetSeed,
            crate::repository::CollectionCounts,
            // Responses
            crate::api::MessageResponse,
            users::UserCreatedResponse,
            books::BookCreatedResponse,
            books::BookDeletedResponse,
            loans::LoanCreatedResponse,
            holds::HoldCreatedResponse,
            reset::ResetResponse,
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "reset", description = "Bulk state replacement"),
        (name = "users", description = "User management"),
        (name = "books", description = "Book management"),
        (name = "loans", description = "Loan management"),
        (name = "holds", description = "Hold management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
