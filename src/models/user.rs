//! User model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// A registered library user.
///
/// Only `id` is interpreted by the service; any other fields supplied
/// at creation time are preserved and returned verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique user identifier
    pub id: i64,
    /// Caller-supplied fields, stored as-is
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}
