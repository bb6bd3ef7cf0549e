//! Data models for the four collections

pub mod book;
pub mod hold;
pub mod loan;
pub mod user;

pub use book::Book;
pub use hold::Hold;
pub use loan::Loan;
pub use user::User;

use serde::Deserialize;
use utoipa::ToSchema;

/// Seed data accepted by the reset operation.
///
/// Every key is optional; missing keys leave the corresponding
/// collection empty. Entries are appended without duplicate or
/// referential checks.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ResetSeed {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub books: Vec<Book>,
    #[serde(default)]
    pub loans: Vec<Loan>,
    #[serde(default)]
    pub holds: Vec<Hold>,
}
