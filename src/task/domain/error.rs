//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task text is empty after trimming.
    #[error("task text must not be empty")]
    EmptyTaskText,

    /// The priority value is outside the accepted range.
    #[error("invalid priority {0}, expected a value between 1 and 9")]
    InvalidPriority(u8),

    /// The sort strategy name is not recognised.
    #[error("unknown sort strategy: {0}")]
    UnknownSortStrategy(String),
}
