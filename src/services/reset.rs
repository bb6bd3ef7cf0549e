//! Database reset service

use crate::{
    models::ResetSeed,
    repository::{CollectionCounts, Repository},
};

#[derive(Clone)]
pub struct ResetService {
    repository: Repository,
}

impl ResetService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Empty every collection, then load the optional seed data.
    pub async fn reset(&self, seed: ResetSeed) -> CollectionCounts {
        let counts = self.repository.reset(seed).await;
        tracing::info!(
            users = counts.users,
            books = counts.books,
            loans = counts.loans,
            holds = counts.holds,
            "database reset"
        );
        counts
    }
}
