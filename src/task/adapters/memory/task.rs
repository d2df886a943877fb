//! Shared in-memory task repository.

use std::collections::HashSet;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe ordered task collection.
///
/// Cloning the repository yields another handle onto the same collection, so
/// one instance can be shared by every component of a session.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when both handles point at the same collection.
    #[must_use]
    pub fn same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, Vec<Task>>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, Vec<Task>>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

fn index_of(tasks: &[Task], id: TaskId) -> Option<usize> {
    tasks.iter().position(|task| task.id() == id)
}

fn first_duplicate(tasks: &[Task]) -> Option<TaskId> {
    let mut seen = HashSet::with_capacity(tasks.len());
    tasks
        .iter()
        .map(Task::id)
        .find(|id| !seen.insert(*id))
}

impl TaskRepository for InMemoryTaskRepository {
    fn add(&self, task: Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.write()?;
        if index_of(&tasks, task.id()).is_some() {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        tasks.push(task);
        Ok(())
    }

    fn insert_at(&self, index: usize, task: Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.write()?;
        if index_of(&tasks, task.id()).is_some() {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        let clamped = index.min(tasks.len());
        tasks.insert(clamped, task);
        Ok(())
    }

    fn tasks(&self) -> TaskRepositoryResult<Vec<Task>> {
        Ok(self.read()?.clone())
    }

    fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let tasks = self.read()?;
        Ok(tasks.iter().find(|task| task.id() == id).cloned())
    }

    fn position(&self, id: TaskId) -> TaskRepositoryResult<Option<usize>> {
        Ok(index_of(&self.read()?, id))
    }

    fn update(&self, task: Task) -> TaskRepositoryResult<()> {
        let mut tasks = self.write()?;
        let slot = tasks
            .iter_mut()
            .find(|existing| existing.id() == task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        *slot = task;
        Ok(())
    }

    fn remove(&self, id: TaskId) -> TaskRepositoryResult<(usize, Task)> {
        let mut tasks = self.write()?;
        let index = index_of(&tasks, id).ok_or(TaskRepositoryError::NotFound(id))?;
        Ok((index, tasks.remove(index)))
    }

    fn replace_all(&self, replacement: Vec<Task>) -> TaskRepositoryResult<()> {
        if let Some(duplicate) = first_duplicate(&replacement) {
            return Err(TaskRepositoryError::DuplicateTask(duplicate));
        }
        *self.write()? = replacement;
        Ok(())
    }

    fn len(&self) -> TaskRepositoryResult<usize> {
        Ok(self.read()?.len())
    }
}
