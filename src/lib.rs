//! Librarium - in-memory library management REST API
//!
//! A deliberately small system-under-test for API-testing exercises:
//! four flat collections (users, books, loans, holds) behind a plain
//! HTTP/JSON interface, plus a reset operation that reseeds them.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
