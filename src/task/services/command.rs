//! Reversible task list mutations.

use super::history::Command;
use crate::task::{
    domain::{Priority, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// A mutation of the shared task collection together with its inverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskCommand {
    /// Appends a task.
    Add {
        /// Task to append.
        task: Task,
    },
    /// Flips a task's completion flag.
    ToggleCompleted {
        /// Target task.
        id: TaskId,
    },
    /// Removes a task, remembering where it was.
    Remove {
        /// Target task.
        id: TaskId,
        /// Former position and value, captured on execute.
        removed: Option<(usize, Task)>,
    },
    /// Replaces a task's description.
    EditDescription {
        /// Target task.
        id: TaskId,
        /// Description to apply.
        description: Option<String>,
        /// Description replaced on execute.
        previous: Option<String>,
    },
    /// Replaces a task's priority.
    SetPriority {
        /// Target task.
        id: TaskId,
        /// Priority to apply.
        priority: Priority,
        /// Priority replaced on execute.
        previous: Option<Priority>,
    },
    /// Rearranges the collection into a new order.
    Reorder {
        /// Target order by task identifier.
        order: Vec<TaskId>,
        /// Order replaced on execute.
        previous: Vec<TaskId>,
    },
}

impl TaskCommand {
    /// Creates a command appending `task`.
    #[must_use]
    pub const fn add(task: Task) -> Self {
        Self::Add { task }
    }

    /// Creates a command flipping the completion flag of `id`.
    #[must_use]
    pub const fn toggle_completed(id: TaskId) -> Self {
        Self::ToggleCompleted { id }
    }

    /// Creates a command removing `id`.
    #[must_use]
    pub const fn remove(id: TaskId) -> Self {
        Self::Remove { id, removed: None }
    }

    /// Creates a command replacing the description of `id`.
    #[must_use]
    pub const fn edit_description(id: TaskId, description: Option<String>) -> Self {
        Self::EditDescription {
            id,
            description,
            previous: None,
        }
    }

    /// Creates a command replacing the priority of `id`.
    #[must_use]
    pub const fn set_priority(id: TaskId, priority: Priority) -> Self {
        Self::SetPriority {
            id,
            priority,
            previous: None,
        }
    }

    /// Creates a command rearranging the collection to follow `order`.
    ///
    /// Tasks missing from `order` keep their relative order after the listed
    /// ones.
    #[must_use]
    pub const fn reorder(order: Vec<TaskId>) -> Self {
        Self::Reorder {
            order,
            previous: Vec::new(),
        }
    }
}

fn require(repository: &dyn TaskRepository, id: TaskId) -> TaskRepositoryResult<Task> {
    repository
        .find_by_id(id)?
        .ok_or(TaskRepositoryError::NotFound(id))
}

fn toggle(repository: &dyn TaskRepository, id: TaskId) -> TaskRepositoryResult<()> {
    let mut task = require(repository, id)?;
    task.toggle_completed();
    repository.update(task)
}

fn swap_description(
    repository: &dyn TaskRepository,
    id: TaskId,
    description: Option<String>,
) -> TaskRepositoryResult<Option<String>> {
    let mut task = require(repository, id)?;
    let previous = task.replace_description(description);
    repository.update(task)?;
    Ok(previous)
}

fn swap_priority(
    repository: &dyn TaskRepository,
    id: TaskId,
    priority: Priority,
) -> TaskRepositoryResult<Priority> {
    let mut task = require(repository, id)?;
    let previous = task.replace_priority(priority);
    repository.update(task)?;
    Ok(previous)
}

/// Rearranges the collection to follow `order`, returning the order it had.
fn apply_order(
    repository: &dyn TaskRepository,
    order: &[TaskId],
) -> TaskRepositoryResult<Vec<TaskId>> {
    let current = repository.tasks()?;
    let previous = current.iter().map(Task::id).collect();
    let rank = |task: &Task| {
        order
            .iter()
            .position(|id| *id == task.id())
            .unwrap_or(order.len())
    };
    let mut reordered = current;
    reordered.sort_by_key(rank);
    repository.replace_all(reordered)?;
    Ok(previous)
}

impl Command for TaskCommand {
    type Target = dyn TaskRepository;
    type Error = TaskRepositoryError;

    fn label(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::ToggleCompleted { .. } => "toggle_completed",
            Self::Remove { .. } => "remove",
            Self::EditDescription { .. } => "edit_description",
            Self::SetPriority { .. } => "set_priority",
            Self::Reorder { .. } => "reorder",
        }
    }

    fn execute(&mut self, target: &Self::Target) -> Result<(), Self::Error> {
        match self {
            Self::Add { task } => target.add(task.clone()),
            Self::ToggleCompleted { id } => toggle(target, *id),
            Self::Remove { id, removed } => {
                *removed = Some(target.remove(*id)?);
                Ok(())
            }
            Self::EditDescription {
                id,
                description,
                previous,
            } => {
                *previous = swap_description(target, *id, description.clone())?;
                Ok(())
            }
            Self::SetPriority {
                id,
                priority,
                previous,
            } => {
                *previous = Some(swap_priority(target, *id, *priority)?);
                Ok(())
            }
            Self::Reorder { order, previous } => {
                *previous = apply_order(target, order)?;
                Ok(())
            }
        }
    }

    fn undo(&mut self, target: &Self::Target) -> Result<(), Self::Error> {
        match self {
            Self::Add { task } => target.remove(task.id()).map(|_| ()),
            Self::ToggleCompleted { id } => toggle(target, *id),
            Self::Remove { id, removed } => {
                let (index, task) = removed.clone().ok_or(TaskRepositoryError::NotFound(*id))?;
                target.insert_at(index, task)?;
                *removed = None;
                Ok(())
            }
            Self::EditDescription { id, previous, .. } => {
                swap_description(target, *id, previous.clone())?;
                Ok(())
            }
            Self::SetPriority { id, previous, .. } => {
                let restored = (*previous).ok_or(TaskRepositoryError::NotFound(*id))?;
                swap_priority(target, *id, restored)?;
                Ok(())
            }
            Self::Reorder { previous, .. } => {
                apply_order(target, previous)?;
                Ok(())
            }
        }
    }
}
