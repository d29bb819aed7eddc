//! Error types for flagquiz-core.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Recoverable conditions surfaced to the presentation layer; none are
/// fatal to the process.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("no item with id {id} in the deck")]
    UnknownItem { id: Uuid },

    #[error("catalog contains no records")]
    EmptyCatalog,

    #[error("record {index} has no name entries")]
    NoNames { index: usize },

    #[error("duplicate record id {id}")]
    DuplicateId { id: Uuid },
}
