//! Loans collection

use crate::{
    error::{AppError, AppResult},
    models::Loan,
    repository::{matches_query, SharedCollections},
};

#[derive(Clone)]
pub struct LoansRepository {
    collections: SharedCollections,
}

impl LoansRepository {
    pub fn new(collections: SharedCollections) -> Self {
        Self { collections }
    }

    /// Validate and append a new loan.
    ///
    /// The whole sequence runs under one write-lock acquisition so
    /// that a concurrent user/book delete serializes against it. The
    /// check order is part of the contract: userId presence, user
    /// existence, bookId presence, book existence, duplicate pair.
    pub async fn create(&self, user_id: Option<i64>, book_id: Option<i64>) -> AppResult<Loan> {
        let mut collections = self.collections.write().await;

        let user_id =
            user_id.ok_or_else(|| AppError::Validation("userId is required".to_string()))?;
        if !collections.users.iter().any(|u| u.id == user_id) {
            return Err(AppError::Reference(format!(
                "User {user_id} does not exist"
            )));
        }

        let book_id =
            book_id.ok_or_else(|| AppError::Validation("bookId is required".to_string()))?;
        if !collections.books.iter().any(|b| b.id == book_id) {
            return Err(AppError::Reference(format!(
                "Book {book_id} does not exist"
            )));
        }

        if collections
            .loans
            .iter()
            .any(|l| l.user_id == user_id && l.book_id == book_id)
        {
            return Err(AppError::Conflict("Loan already exists".to_string()));
        }

        let loan = Loan { user_id, book_id };
        collections.loans.push(loan);
        Ok(loan)
    }

    /// Remove the loan matching both ids exactly.
    pub async fn delete(&self, user_id: i64, book_id: i64) -> AppResult<()> {
        let mut collections = self.collections.write().await;
        let before = collections.loans.len();
        collections
            .loans
            .retain(|l| !(l.user_id == user_id && l.book_id == book_id));
        if collections.loans.len() == before {
            return Err(AppError::NotFound("Loan not found".to_string()));
        }
        Ok(())
    }

    /// Loans matching the free-text query and the exact id filters.
    ///
    /// The substring mechanism applies first, then `userId` and
    /// `bookId` narrow the result with AND semantics.
    pub async fn search(
        &self,
        query: Option<&str>,
        user_id: Option<i64>,
        book_id: Option<i64>,
    ) -> Vec<Loan> {
        let collections = self.collections.read().await;
        let mut results: Vec<Loan> = match query {
            Some(q) if !q.is_empty() => {
                let q = q.to_lowercase();
                collections
                    .loans
                    .iter()
                    .filter(|loan| matches_query(loan, &q))
                    .copied()
                    .collect()
            }
            _ => collections.loans.clone(),
        };
        if let Some(uid) = user_id {
            results.retain(|l| l.user_id == uid);
        }
        if let Some(bid) = book_id {
            results.retain(|l| l.book_id == bid);
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Book, User};
    use crate::repository::Repository;
    use serde_json::Map;

    async fn seeded_repository() -> Repository {
        let repository = Repository::new();
        repository
            .users
            .create(User {
                id: 1,
                extra: Map::new(),
            })
            .await
            .unwrap();
        repository
            .books
            .create(Book {
                id: 10,
                extra: Map::new(),
            })
            .await
            .unwrap();
        repository
    }

    #[tokio::test]
    async fn test_create_checks_in_contract_order() {
        let repository = seeded_repository().await;

        let err = repository.loans.create(None, None).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "userId is required"));

        // An unknown user is reported before a missing bookId.
        let err = repository.loans.create(Some(9), None).await.unwrap_err();
        assert!(matches!(err, AppError::Reference(msg) if msg == "User 9 does not exist"));

        let err = repository.loans.create(Some(1), None).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "bookId is required"));

        let err = repository.loans.create(Some(1), Some(99)).await.unwrap_err();
        assert!(matches!(err, AppError::Reference(msg) if msg == "Book 99 does not exist"));
    }

    #[tokio::test]
    async fn test_duplicate_pair_is_a_conflict() {
        let repository = seeded_repository().await;
        repository.loans.create(Some(1), Some(10)).await.unwrap();

        let err = repository.loans.create(Some(1), Some(10)).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_delete_requires_exact_pair() {
        let repository = seeded_repository().await;
        repository.loans.create(Some(1), Some(10)).await.unwrap();

        let err = repository.loans.delete(1, 11).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        repository.loans.delete(1, 10).await.unwrap();
        assert!(repository.loans.search(None, None, None).await.is_empty());
    }

    #[tokio::test]
    async fn test_search_filters_combine_with_and() {
        let repository = seeded_repository().await;
        repository
            .users
            .create(User {
                id: 2,
                extra: Map::new(),
            })
            .await
            .unwrap();
        repository
            .books
            .create(Book {
                id: 11,
                extra: Map::new(),
            })
            .await
            .unwrap();
        repository.loans.create(Some(1), Some(10)).await.unwrap();
        repository.loans.create(Some(1), Some(11)).await.unwrap();
        repository.loans.create(Some(2), Some(10)).await.unwrap();

        assert_eq!(repository.loans.search(None, Some(1), None).await.len(), 2);
        assert_eq!(repository.loans.search(None, None, Some(10)).await.len(), 2);
        assert_eq!(
            repository.loans.search(None, Some(1), Some(10)).await.len(),
            1
        );
    }
}
