//! Book management service

use serde_json::{Map, Value};

use crate::{error::AppResult, models::Book, repository::Repository};

use super::required_integer;

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Validate and add a new book. Every field besides `id` is kept
    /// verbatim.
    pub async fn create_book(&self, mut payload: Map<String, Value>) -> AppResult<Book> {
        let id = required_integer(&payload, "id", "book id is required")?;
        payload.remove("id");

        let book = self.repository.books.create(Book { id, extra: payload }).await?;
        tracing::info!(id = book.id, "book added");
        Ok(book)
    }

    /// Get a single book by id.
    pub async fn get_book(&self, id: i64) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Delete a book by id and report how many remain.
    pub async fn delete_book(&self, id: i64) -> AppResult<usize> {
        let remaining = self.repository.books.delete(id).await?;
        tracing::info!(id, remaining, "book deleted");
        Ok(remaining)
    }

    /// Search books by free-text query.
    pub async fn search_books(&self, query: Option<&str>) -> Vec<Book> {
        self.repository.books.search(query).await
    }
}
