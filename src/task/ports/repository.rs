//! Repository port for the shared in-memory task collection.

use crate::task::domain::{Task, TaskId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Ordered task collection contract.
///
/// Reads return snapshots: callers never hold a live reference into the
/// collection, so later mutations are only visible after another read.
pub trait TaskRepository: Send + Sync {
    /// Appends a task to the end of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when a task with the
    /// same identifier is already present.
    fn add(&self, task: Task) -> TaskRepositoryResult<()>;

    /// Inserts a task at `index`, clamped to the collection length.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when a task with the
    /// same identifier is already present.
    fn insert_at(&self, index: usize, task: Task) -> TaskRepositoryResult<()>;

    /// Returns a snapshot of all tasks in collection order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the collection cannot
    /// be read.
    fn tasks(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the collection cannot
    /// be read.
    fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns the position of a task within the collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the collection cannot
    /// be read.
    fn position(&self, id: TaskId) -> TaskRepositoryResult<Option<usize>>;

    /// Replaces the stored task carrying the same identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    fn update(&self, task: Task) -> TaskRepositoryResult<()>;

    /// Removes a task, returning its former position and value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    fn remove(&self, id: TaskId) -> TaskRepositoryResult<(usize, Task)>;

    /// Replaces the whole collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when `tasks` contains
    /// the same identifier twice; the collection is left unchanged.
    fn replace_all(&self, tasks: Vec<Task>) -> TaskRepositoryResult<()>;

    /// Returns the number of tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the collection cannot
    /// be read.
    fn len(&self) -> TaskRepositoryResult<usize>;

    /// Returns `true` when the collection holds no tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the collection cannot
    /// be read.
    fn is_empty(&self) -> TaskRepositoryResult<bool> {
        Ok(self.len()? == 0)
    }
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a storage error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
