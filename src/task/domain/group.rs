//! Composite task grouping ordered subtasks under a heading.

use super::{Task, TaskId, TaskText};
use serde::{Deserialize, Serialize};

/// A heading with an ordered list of subtasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskGroup {
    text: TaskText,
    subtasks: Vec<Task>,
}

impl TaskGroup {
    /// Creates an empty group.
    #[must_use]
    pub const fn new(text: TaskText) -> Self {
        Self {
            text,
            subtasks: Vec::new(),
        }
    }

    /// Returns the group heading.
    #[must_use]
    pub const fn text(&self) -> &TaskText {
        &self.text
    }

    /// Appends a subtask.
    pub fn add_subtask(&mut self, task: Task) {
        self.subtasks.push(task);
    }

    /// Removes a subtask by identifier.
    pub fn remove_subtask(&mut self, id: TaskId) -> Option<Task> {
        let index = self.subtasks.iter().position(|task| task.id() == id)?;
        Some(self.subtasks.remove(index))
    }

    /// Returns the subtasks in insertion order.
    #[must_use]
    pub fn subtasks(&self) -> &[Task] {
        &self.subtasks
    }

    /// Returns how many subtasks are complete.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.subtasks
            .iter()
            .filter(|task| task.is_completed())
            .count()
    }

    /// Returns `true` when the group has subtasks and all are complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.subtasks.is_empty() && self.completed_count() == self.subtasks.len()
    }
}
