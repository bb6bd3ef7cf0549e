//! Book model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// A catalog book.
///
/// Same shape as a user: a required unique `id` plus caller-supplied
/// fields kept verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Unique book identifier
    pub id: i64,
    /// Caller-supplied fields, stored as-is
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}
