//! Users collection

use crate::{
    error::{AppError, AppResult},
    models::User,
    repository::{matches_query, SharedCollections},
};

#[derive(Clone)]
pub struct UsersRepository {
    collections: SharedCollections,
}

impl UsersRepository {
    pub fn new(collections: SharedCollections) -> Self {
        Self { collections }
    }

    /// Append a new user, rejecting duplicate ids.
    pub async fn create(&self, user: User) -> AppResult<User> {
        let mut collections = self.collections.write().await;
        if collections.users.iter().any(|u| u.id == user.id) {
            return Err(AppError::Conflict("User already exists".to_string()));
        }
        collections.users.push(user.clone());
        Ok(user)
    }

    /// Remove a user by id.
    ///
    /// The loan check runs before the existence check, so a dangling
    /// loan reference blocks deletion even for an unknown id.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut collections = self.collections.write().await;
        if collections.loans.iter().any(|loan| loan.user_id == id) {
            return Err(AppError::Conflict(
                "Cannot delete user with active loans".to_string(),
            ));
        }
        let position = collections
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        collections.users.remove(position);
        Ok(())
    }

    /// Users whose serialized form contains `query`, in insertion
    /// order. An absent or empty query returns the full collection.
    pub async fn search(&self, query: Option<&str>) -> Vec<User> {
        let collections = self.collections.read().await;
        match query {
            Some(q) if !q.is_empty() => {
                let q = q.to_lowercase();
                collections
                    .users
                    .iter()
                    .filter(|user| matches_query(user, &q))
                    .cloned()
                    .collect()
            }
            _ => collections.users.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResetSeed;
    use crate::repository::Repository;
    use serde_json::{json, Map};

    fn user(id: i64) -> User {
        User {
            id,
            extra: Map::new(),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_id() {
        let repository = Repository::new();
        repository.users.create(user(1)).await.unwrap();

        let err = repository.users.create(user(1)).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_user_is_not_found() {
        let repository = Repository::new();
        let err = repository.users.delete(7).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_dangling_loan_blocks_delete_before_existence() {
        let repository = Repository::new();
        let seed: ResetSeed = serde_json::from_value(json!({
            "loans": [{"userId": 9, "bookId": 1}],
        }))
        .unwrap();
        repository.reset(seed).await;

        // User 9 does not exist, but the seeded loan still wins.
        let err = repository.users.delete(9).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_search_matches_serialized_text() {
        let repository = Repository::new();
        let seeded: User = serde_json::from_value(json!({"id": 1, "name": "Test User"})).unwrap();
        repository.users.create(seeded).await.unwrap();
        repository.users.create(user(2)).await.unwrap();

        let hits = repository.users.search(Some("test")).await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);

        let all = repository.users.search(Some("")).await;
        assert_eq!(all.len(), 2);
    }
}
