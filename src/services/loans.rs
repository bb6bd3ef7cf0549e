//! Loan management service

use serde_json::{Map, Value};

use crate::{error::AppResult, models::Loan, repository::Repository};

use super::optional_integer;

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Validate and create a loan from a raw payload.
    ///
    /// Presence and existence checks happen in the repository, under
    /// the same lock as the insert, to keep the reported error stable
    /// under concurrent deletes. Extra payload fields are dropped;
    /// only the `(userId, bookId)` pair is stored.
    pub async fn create_loan(&self, payload: Map<String, Value>) -> AppResult<Loan> {
        let user_id = optional_integer(&payload, "userId")?;
        let book_id = optional_integer(&payload, "bookId")?;

        let loan = self.repository.loans.create(user_id, book_id).await?;
        tracing::info!(user_id = loan.user_id, book_id = loan.book_id, "loan added");
        Ok(loan)
    }

    /// Delete the loan matching both ids exactly.
    pub async fn delete_loan(&self, user_id: i64, book_id: i64) -> AppResult<()> {
        self.repository.loans.delete(user_id, book_id).await?;
        tracing::info!(user_id, book_id, "loan deleted");
        Ok(())
    }

    /// Search loans by free-text query and exact id filters.
    pub async fn search_loans(
        &self,
        query: Option<&str>,
        user_id: Option<i64>,
        book_id: Option<i64>,
    ) -> Vec<Loan> {
        self.repository.loans.search(query, user_id, book_id).await
    }
}
