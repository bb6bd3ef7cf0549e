//! Holds collection

use crate::{
    models::Hold,
    repository::{matches_query, SharedCollections},
};

#[derive(Clone)]
pub struct HoldsRepository {
    collections: SharedCollections,
}

impl HoldsRepository {
    pub fn new(collections: SharedCollections) -> Self {
        Self { collections }
    }

    /// Append a hold verbatim. No validation against other
    /// collections.
    pub async fn create(&self, hold: Hold) -> Hold {
        let mut collections = self.collections.write().await;
        collections.holds.push(hold.clone());
        hold
    }

    /// Remove every hold whose `id` matches. Removing nothing is not
    /// an error for holds.
    pub async fn delete(&self, id: i64) -> usize {
        let mut collections = self.collections.write().await;
        let before = collections.holds.len();
        collections.holds.retain(|hold| hold.id() != Some(id));
        before - collections.holds.len()
    }

    /// Holds whose serialized form contains `query`, in insertion
    /// order. An absent or empty query returns the full collection.
    pub async fn search(&self, query: Option<&str>) -> Vec<Hold> {
        let collections = self.collections.read().await;
        match query {
            Some(q) if !q.is_empty() => {
                let q = q.to_lowercase();
                collections
                    .holds
                    .iter()
                    .filter(|hold| matches_query(hold, &q))
                    .cloned()
                    .collect()
            }
            _ => collections.holds.clone(),
        }
    }
}
