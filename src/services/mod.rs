//! Business logic services

pub mod books;
pub mod holds;
pub mod loans;
pub mod reset;
pub mod users;

use serde_json::{Map, Value};

use crate::{
    error::{AppError, AppResult},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub users: users::UsersService,
    pub books: books::BooksService,
    pub loans: loans::LoansService,
    pub holds: holds::HoldsService,
    pub reset: reset::ResetService,
}

impl Services {
    /// Create all services backed by the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            users: users::UsersService::new(repository.clone()),
            books: books::BooksService::new(repository.clone()),
            loans: loans::LoansService::new(repository.clone()),
            holds: holds::HoldsService::new(repository.clone()),
            reset: reset::ResetService::new(repository),
        }
    }
}

/// Pull a required integer field out of a create payload.
///
/// Absent and null are "missing"; any other non-integer value is a
/// type error. `message` is the wire message for the missing case.
fn required_integer(payload: &Map<String, Value>, key: &str, message: &str) -> AppResult<i64> {
    match payload.get(key) {
        None | Some(Value::Null) => Err(AppError::Validation(message.to_string())),
        Some(value) => value
            .as_i64()
            .ok_or_else(|| AppError::Validation(format!("{key} must be an integer"))),
    }
}

/// As `required_integer`, but leaves the missing case to the caller.
fn optional_integer(payload: &Map<String, Value>, key: &str) -> AppResult<Option<i64>> {
    match payload.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_i64()
            .map(Some)
            .ok_or_else(|| AppError::Validation(format!("{key} must be an integer"))),
    }
}
