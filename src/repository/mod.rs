//! In-memory storage for the four collections

pub mod books;
pub mod holds;
pub mod loans;
pub mod users;

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use utoipa::ToSchema;

use crate::models::{Book, Hold, Loan, ResetSeed, User};

/// The four collections, kept together behind one lock.
///
/// A single lock rather than one per collection: loan creation and
/// user/book deletion read across collections, and reset replaces all
/// of them in one step.
#[derive(Debug, Default)]
pub struct Collections {
    pub users: Vec<User>,
    pub books: Vec<Book>,
    pub loans: Vec<Loan>,
    pub holds: Vec<Hold>,
}

pub type SharedCollections = Arc<RwLock<Collections>>;

/// Number of entries per collection, as reported by reset
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct CollectionCounts {
    pub users: usize,
    pub loans: usize,
    pub holds: usize,
    pub books: usize,
}

/// Main repository struct holding the shared collections
#[derive(Clone)]
pub struct Repository {
    pub users: users::UsersRepository,
    pub books: books::BooksRepository,
    pub loans: loans::LoansRepository,
    pub holds: holds::HoldsRepository,
    collections: SharedCollections,
}

impl Repository {
    /// Create a new repository with empty collections
    pub fn new() -> Self {
        let collections = SharedCollections::default();
        Self {
            users: users::UsersRepository::new(collections.clone()),
            books: books::BooksRepository::new(collections.clone()),
            loans: loans::LoansRepository::new(collections.clone()),
            holds: holds::HoldsRepository::new(collections.clone()),
            collections,
        }
    }

    /// Replace the contents of every collection in a single step and
    /// report the resulting counts.
    pub async fn reset(&self, seed: ResetSeed) -> CollectionCounts {
        let mut collections = self.collections.write().await;
        *collections = Collections {
            users: seed.users,
            books: seed.books,
            loans: seed.loans,
            holds: seed.holds,
        };
        CollectionCounts {
            users: collections.users.len(),
            loans: collections.loans.len(),
            holds: collections.holds.len(),
            books: collections.books.len(),
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive substring match of `query` (already lowercased)
/// against the entity's serialized JSON text.
pub(crate) fn matches_query<T: Serialize>(entity: &T, query: &str) -> bool {
    serde_json::to_string(entity)
        .map(|text| text.to_lowercase().contains(query))
        .unwrap_or(false)
}
