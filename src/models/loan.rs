//! Loan model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A loan asserting that a user currently holds a book.
///
/// Identified by the `(userId, bookId)` pair; the same pair never
/// appears twice in the collection. Both sides must exist when the
/// loan is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub user_id: i64,
    pub book_id: i64,
}
