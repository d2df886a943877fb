//! Interchangeable ordering strategies for task collections.

use super::{Task, TaskDomainError};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Ordering policy applied to a task collection.
pub trait SortStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Compares two tasks.
    fn compare(&self, left: &Task, right: &Task) -> Ordering;

    /// Returns a reordered copy of `tasks`, leaving the input untouched.
    ///
    /// The sort is stable, so tasks that compare equal keep their relative
    /// order and a second application is a no-op.
    fn sort(&self, tasks: &[Task]) -> Vec<Task> {
        let mut sorted = tasks.to_vec();
        sorted.sort_by(|left, right| self.compare(left, right));
        sorted
    }
}

/// Oldest task first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByDate;

impl SortStrategy for ByDate {
    fn name(&self) -> &'static str {
        "date"
    }

    fn compare(&self, left: &Task, right: &Task) -> Ordering {
        left.created_at().cmp(&right.created_at())
    }
}

/// Most urgent task first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByPriority;

impl SortStrategy for ByPriority {
    fn name(&self) -> &'static str {
        "priority"
    }

    fn compare(&self, left: &Task, right: &Task) -> Ordering {
        left.priority().cmp(&right.priority())
    }
}

/// Value-level selector over the built-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskSort {
    /// See [`ByDate`].
    Date,
    /// See [`ByPriority`].
    Priority,
}

impl TaskSort {
    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Priority => "priority",
        }
    }
}

impl SortStrategy for TaskSort {
    fn name(&self) -> &'static str {
        self.as_str()
    }

    fn compare(&self, left: &Task, right: &Task) -> Ordering {
        match self {
            Self::Date => ByDate.compare(left, right),
            Self::Priority => ByPriority.compare(left, right),
        }
    }
}

impl FromStr for TaskSort {
    type Err = TaskDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "priority" => Ok(Self::Priority),
            _ => Err(TaskDomainError::UnknownSortStrategy(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
