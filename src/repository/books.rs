//! Books collection

use crate::{
    error::{AppError, AppResult},
    models::Book,
    repository::{matches_query, SharedCollections},
};

#[derive(Clone)]
pub struct BooksRepository {
    collections: SharedCollections,
}

impl BooksRepository {
    pub fn new(collections: SharedCollections) -> Self {
        Self { collections }
    }

    /// Get a book by id
    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        let collections = self.collections.read().await;
        collections
            .books
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Append a new book, rejecting duplicate ids.
    pub async fn create(&self, book: Book) -> AppResult<Book> {
        let mut collections = self.collections.write().await;
        if collections.books.iter().any(|b| b.id == book.id) {
            return Err(AppError::Conflict("Book already exists".to_string()));
        }
        collections.books.push(book.clone());
        Ok(book)
    }

    /// Remove a book by id and report how many books remain.
    ///
    /// Unlike users, the existence check runs first: a dangling loan
    /// on an unknown book id still yields 404.
    pub async fn delete(&self, id: i64) -> AppResult<usize> {
        let mut collections = self.collections.write().await;
        if !collections.books.iter().any(|b| b.id == id) {
            return Err(AppError::NotFound("Book not found".to_string()));
        }
        if collections.loans.iter().any(|loan| loan.book_id == id) {
            return Err(AppError::Conflict(
                "Cannot delete book with active loans".to_string(),
            ));
        }
        collections.books.retain(|b| b.id != id);
        Ok(collections.books.len())
    }

    /// Books whose serialized form contains `query`, in insertion
    /// order. An absent or empty query returns the full collection.
    pub async fn search(&self, query: Option<&str>) -> Vec<Book> {
        let collections = self.collections.read().await;
        match query {
            Some(q) if !q.is_empty() => {
                let q = q.to_lowercase();
                collections
                    .books
                    .iter()
                    .filter(|book| matches_query(book, &q))
                    .cloned()
                    .collect()
            }
            _ => collections.books.clone(),
        }
    }
}
