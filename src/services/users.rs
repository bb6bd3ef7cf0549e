//! User management service

use serde_json::{Map, Value};

use crate::{error::AppResult, models::User, repository::Repository};

use super::required_integer;

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Validate and add a new user. Every field besides `id` is kept
    /// verbatim.
    pub async fn create_user(&self, mut payload: Map<String, Value>) -> AppResult<User> {
        let id = required_integer(&payload, "id", "user id is required")?;
        payload.remove("id");

        let user = self.repository.users.create(User { id, extra: payload }).await?;
        tracing::info!(id = user.id, "user added");
        Ok(user)
    }

    /// Delete a user by id, unless a loan still references it.
    pub async fn delete_user(&self, id: i64) -> AppResult<()> {
        self.repository.users.delete(id).await?;
        tracing::info!(id, "user deleted");
        Ok(())
    }

    /// Search users by free-text query.
    pub async fn search_users(&self, query: Option<&str>) -> Vec<User> {
        self.repository.users.search(query).await
    }
}
