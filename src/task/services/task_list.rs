//! Service layer tying the repository, history, observer, and store together.

use super::{
    command::TaskCommand,
    config::TaskListConfig,
    history::CommandHistory,
    observer::TaskObserver,
};
use crate::task::{
    domain::{Priority, SortStrategy, Task, TaskDomainError, TaskFactory, TaskId, TaskKind, TaskText},
    ports::{TaskRepository, TaskRepositoryError, TaskStore, TaskStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task list operations.
#[derive(Debug, Error)]
pub enum TaskListError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// Loading or saving the task list failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for task list service operations.
pub type TaskListResult<T> = Result<T, TaskListError>;

/// Entry point for the presentation layer.
///
/// Every mutation runs as a [`TaskCommand`] through the undo history and is
/// followed by a save. The in-memory collection is updated before the save
/// completes; when the save fails the mutation stays applied and the store
/// error is returned.
pub struct TaskListService<R, S, C>
where
    R: TaskRepository + 'static,
    S: TaskStore,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    store: Arc<S>,
    factory: TaskFactory<C>,
    history: CommandHistory<TaskCommand>,
    observer: TaskObserver,
    config: TaskListConfig,
}

impl<R, S, C> TaskListService<R, S, C>
where
    R: TaskRepository + 'static,
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a service with the default configuration.
    #[must_use]
    pub fn new(repository: Arc<R>, store: Arc<S>, clock: Arc<C>) -> Self {
        Self::with_config(repository, store, clock, TaskListConfig::default())
    }

    /// Creates a service with an explicit configuration.
    #[must_use]
    pub fn with_config(
        repository: Arc<R>,
        store: Arc<S>,
        clock: Arc<C>,
        config: TaskListConfig,
    ) -> Self {
        let factory = TaskFactory::new(clock).with_default_kind(config.default_task_kind());
        Self {
            repository,
            store,
            factory,
            history: CommandHistory::new(),
            observer: TaskObserver::new(),
            config,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &TaskListConfig {
        &self.config
    }

    /// Returns the command history.
    #[must_use]
    pub const fn history(&self) -> &CommandHistory<TaskCommand> {
        &self.history
    }

    /// Returns the observer for subscription management.
    pub const fn observer_mut(&mut self) -> &mut TaskObserver {
        &mut self.observer
    }

    /// Returns a snapshot of the task list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Repository`] when the collection cannot be
    /// read.
    pub fn tasks(&self) -> TaskListResult<Vec<Task>> {
        Ok(self.repository.tasks()?)
    }

    /// Replaces the collection with the stored task list.
    ///
    /// Clears the undo history and returns the number of tasks loaded.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Store`] when the store cannot be read or
    /// [`TaskListError::Repository`] when the stored list repeats an
    /// identifier.
    pub async fn load(&mut self) -> TaskListResult<usize> {
        let stored = self.store.load().await?;
        let count = stored.len();
        self.repository.replace_all(stored)?;
        self.history.clear();
        tracing::info!(count, "loaded task list");
        Ok(count)
    }

    /// Creates and appends a task, then notifies subscribers.
    ///
    /// A blank `kind` counts as absent, so the configured default applies.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskText`] (wrapped) when `text` is
    /// blank, or a repository/store error.
    pub async fn add_task(&mut self, text: &str, kind: Option<&str>) -> TaskListResult<Task> {
        let validated = TaskText::new(text)?;
        let task = self
            .factory
            .create_task(validated, kind.and_then(TaskKind::non_blank));
        self.execute(TaskCommand::add(task.clone()))?;
        self.observer.notify(&task);
        self.persist().await?;
        Ok(task)
    }

    /// Flips a task's completion flag and returns the updated task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the task does
    /// not exist, or a store error.
    pub async fn toggle_completed(&mut self, id: TaskId) -> TaskListResult<Task> {
        self.execute(TaskCommand::toggle_completed(id))?;
        self.persist().await?;
        self.require(id)
    }

    /// Removes a task and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the task does
    /// not exist, or a store error.
    pub async fn remove_task(&mut self, id: TaskId) -> TaskListResult<Task> {
        let removed = self.require(id)?;
        self.execute(TaskCommand::remove(id))?;
        self.persist().await?;
        Ok(removed)
    }

    /// Replaces a task's description; blank input clears it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the task does
    /// not exist, or a store error.
    pub async fn edit_description(
        &mut self,
        id: TaskId,
        description: Option<&str>,
    ) -> TaskListResult<Task> {
        self.execute(TaskCommand::edit_description(
            id,
            description.map(str::to_owned),
        ))?;
        self.persist().await?;
        self.require(id)
    }

    /// Replaces a task's priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the task does
    /// not exist, or a store error.
    pub async fn set_priority(&mut self, id: TaskId, priority: Priority) -> TaskListResult<Task> {
        self.execute(TaskCommand::set_priority(id, priority))?;
        self.persist().await?;
        self.require(id)
    }

    /// Reorders the collection with `strategy` and returns the new order.
    ///
    /// # Errors
    ///
    /// Returns a repository or store error.
    pub async fn sort(&mut self, strategy: &dyn SortStrategy) -> TaskListResult<Vec<Task>> {
        let sorted = strategy.sort(&self.repository.tasks()?);
        let order = sorted.iter().map(Task::id).collect();
        self.execute(TaskCommand::reorder(order))?;
        tracing::debug!(strategy = strategy.name(), "sorted task list");
        self.persist().await?;
        Ok(sorted)
    }

    /// Reverts the most recent mutation. Returns `false` when there was none.
    ///
    /// # Errors
    ///
    /// Returns a repository error when the inverse cannot be applied, or a
    /// store error.
    pub async fn undo(&mut self) -> TaskListResult<bool> {
        let undone = self.history.undo(&*self.repository)?;
        if undone {
            self.persist().await?;
        }
        Ok(undone)
    }

    /// Re-applies the most recently undone mutation. Returns `false` when
    /// there was none.
    ///
    /// # Errors
    ///
    /// Returns a repository error when the mutation cannot be re-applied, or
    /// a store error.
    pub async fn redo(&mut self) -> TaskListResult<bool> {
        let redone = self.history.redo(&*self.repository)?;
        if redone {
            self.persist().await?;
        }
        Ok(redone)
    }

    fn execute(&mut self, command: TaskCommand) -> TaskListResult<()> {
        self.history.execute(command, &*self.repository)?;
        Ok(())
    }

    fn require(&self, id: TaskId) -> TaskListResult<Task> {
        self.repository
            .find_by_id(id)?
            .ok_or_else(|| TaskRepositoryError::NotFound(id).into())
    }

    async fn persist(&self) -> TaskListResult<()> {
        if !self.config.save_after_mutation {
            return Ok(());
        }
        let tasks = self.repository.tasks()?;
        self.store.save(&tasks).await?;
        Ok(())
    }
}
