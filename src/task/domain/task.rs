//! Task entity and its mutation helpers.

use super::{Priority, TaskId, TaskKind, TaskText};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A single to-do item.
///
/// The serialized layout matches the stored JSON array entries: the category
/// is written as `type` and the creation timestamp as `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    text: TaskText,
    #[serde(rename = "type", default)]
    kind: TaskKind,
    #[serde(default)]
    completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default)]
    priority: Priority,
    #[serde(rename = "date")]
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates an incomplete task stamped with the current clock time.
    #[must_use]
    pub fn new(text: TaskText, kind: TaskKind, clock: &impl Clock) -> Self {
        Self {
            id: TaskId::new(),
            text,
            kind,
            completed: false,
            description: None,
            priority: Priority::default(),
            created_at: clock.utc(),
        }
    }

    /// Sets the description, treating blank input as absent.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = normalize_description(Some(description.into()));
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task text.
    #[must_use]
    pub const fn text(&self) -> &TaskText {
        &self.text
    }

    /// Returns the category label.
    #[must_use]
    pub const fn kind(&self) -> &TaskKind {
        &self.kind
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Flips the completion flag and returns the new value.
    pub const fn toggle_completed(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }

    /// Replaces the description and returns the previous one.
    pub fn replace_description(&mut self, description: Option<String>) -> Option<String> {
        std::mem::replace(&mut self.description, normalize_description(description))
    }

    /// Replaces the priority and returns the previous one.
    pub const fn replace_priority(&mut self, priority: Priority) -> Priority {
        let previous = self.priority;
        self.priority = priority;
        previous
    }
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description.filter(|value| !value.trim().is_empty())
}
