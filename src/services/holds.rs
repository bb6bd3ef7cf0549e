//! Hold management service

use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::Hold,
    repository::Repository,
};

#[derive(Clone)]
pub struct HoldsService {
    repository: Repository,
}

impl HoldsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Store a hold verbatim. The only requirement is that the body
    /// is a JSON object.
    pub async fn create_hold(&self, payload: Value) -> AppResult<Hold> {
        let object = match payload {
            Value::Object(map) => map,
            _ => {
                return Err(AppError::Validation(
                    "hold must be a JSON object".to_string(),
                ))
            }
        };
        let hold = self.repository.holds.create(Hold(object)).await;
        tracing::info!("hold added");
        Ok(hold)
    }

    /// Delete holds matching the id. Matching nothing still succeeds.
    pub async fn delete_hold(&self, id: i64) {
        let removed = self.repository.holds.delete(id).await;
        tracing::info!(id, removed, "hold delete");
    }

    /// Search holds by free-text query.
    pub async fn search_holds(&self, query: Option<&str>) -> Vec<Hold> {
        self.repository.holds.search(query).await
    }
}
