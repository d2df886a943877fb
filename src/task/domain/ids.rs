//! Identifier and validated scalar types for the task domain.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a task record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new random task identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a task identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for TaskId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-blank task text, stored exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskText(String);

impl TaskText {
    /// Creates validated task text.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskText`] when the value is empty or
    /// contains only whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TaskDomainError::EmptyTaskText);
        }
        Ok(Self(raw))
    }

    /// Returns the text as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskText {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskText> for String {
    fn from(value: TaskText) -> Self {
        value.0
    }
}

impl AsRef<str> for TaskText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free-form task category label such as `personal` or `work`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskKind(String);

impl TaskKind {
    /// Label applied when no category is supplied.
    pub const DEFAULT: &'static str = "personal";

    /// Creates a category label, falling back to [`Self::DEFAULT`] when the
    /// value is blank. Non-blank labels are kept verbatim.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        let raw = value.into();
        if is_blank(&raw) {
            return Self::default();
        }
        Self(raw)
    }

    /// Creates a label only when `value` is non-blank.
    ///
    /// Callers with their own fallback (such as a configured default) use
    /// this so blank input defers to that fallback.
    #[must_use]
    pub fn non_blank(value: impl Into<String>) -> Option<Self> {
        let raw = value.into();
        (!is_blank(&raw)).then_some(Self(raw))
    }

    /// Returns the label as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl Default for TaskKind {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl AsRef<str> for TaskKind {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task priority where lower values sort first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Priority(u8);

impl Priority {
    /// Most urgent priority.
    pub const HIGH: Self = Self(1);
    /// Priority assigned by the factory.
    pub const NORMAL: Self = Self(2);
    /// Least urgent of the named priorities.
    pub const LOW: Self = Self(3);

    const MIN_VALUE: u8 = 1;
    const MAX_VALUE: u8 = 9;

    /// Creates a validated priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidPriority`] when the value is outside
    /// `1..=9`.
    pub const fn new(value: u8) -> Result<Self, TaskDomainError> {
        if value < Self::MIN_VALUE || value > Self::MAX_VALUE {
            return Err(TaskDomainError::InvalidPriority(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl TryFrom<u8> for Priority {
    type Error = TaskDomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Priority> for u8 {
    fn from(value: Priority) -> Self {
        value.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
