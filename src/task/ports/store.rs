//! Storage port persisting the full task list in a single key-value slot.

use crate::task::domain::Task;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Durable storage for the task list.
///
/// The whole collection is written as one JSON array on every save; there are
/// no partial writes and no schema versioning.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Loads the stored task list.
    ///
    /// A missing slot yields an empty list. Implementations also return an
    /// empty list, after logging a warning, when the stored value is not a
    /// valid task array.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Io`] when the slot exists but cannot be read.
    async fn load(&self) -> TaskStoreResult<Vec<Task>>;

    /// Overwrites the stored task list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Serialization`] when encoding fails or
    /// [`TaskStoreError::Io`] when the slot cannot be written.
    async fn save(&self, tasks: &[Task]) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// Reading or writing the underlying medium failed.
    #[error("storage i/o error: {0}")]
    Io(Arc<std::io::Error>),

    /// The task list could not be encoded.
    #[error("task serialization failed: {0}")]
    Serialization(Arc<serde_json::Error>),

    /// Any other storage failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a storage error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

impl From<std::io::Error> for TaskStoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}

impl From<serde_json::Error> for TaskStoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(Arc::new(err))
    }
}
