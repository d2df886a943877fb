//! Port for third-party task services.

use crate::task::domain::Task;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for remote task service operations.
pub type RemoteTaskResult<T> = Result<T, RemoteTaskError>;

/// Task-shaped view of an external task service.
#[async_trait]
pub trait RemoteTaskService: Send + Sync {
    /// Fetches every task the remote service exposes.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteTaskError`] when the service call fails.
    async fn fetch_tasks(&self) -> RemoteTaskResult<Vec<Task>>;

    /// Pushes a task to the remote service.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteTaskError`] when the service rejects the task or the
    /// call fails.
    async fn push_task(&self, task: &Task) -> RemoteTaskResult<()>;
}

/// Errors returned by remote task service adapters.
#[derive(Debug, Clone, Error)]
pub enum RemoteTaskError {
    /// The remote service rejected the request.
    #[error("remote service rejected request: {0}")]
    Rejected(String),

    /// The remote service could not be reached or returned garbage.
    #[error("remote service unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl RemoteTaskError {
    /// Wraps a transport error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
