//! Hold model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// A reservation-like record with no enforced relation to users or
/// books. Holds are stored exactly as received; the `id` field is
/// only consulted when deleting.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct Hold(#[schema(value_type = Object)] pub Map<String, Value>);

impl Hold {
    /// The hold's integer `id`, when one is present.
    pub fn id(&self) -> Option<i64> {
        self.0.get("id").and_then(Value::as_i64)
    }
}
