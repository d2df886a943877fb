//! Configuration for the task list service.

use crate::task::domain::TaskKind;

/// Settings for a task list session.
///
/// # Examples
///
/// ```
/// use todo_core::task::services::TaskListConfig;
///
/// let config = TaskListConfig::default();
/// assert_eq!(config.storage_key, "tasks");
/// assert!(config.save_after_mutation);
///
/// let scratch = TaskListConfig::ephemeral();
/// assert!(!scratch.save_after_mutation);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListConfig {
    /// Key of the storage slot holding the task list.
    pub storage_key: String,
    /// Category applied to tasks created without one.
    pub default_kind: String,
    /// Whether every effective mutation is followed by a save.
    pub save_after_mutation: bool,
    /// Whether file-backed stores write indented JSON.
    pub pretty_json: bool,
}

impl Default for TaskListConfig {
    fn default() -> Self {
        Self {
            storage_key: "tasks".to_owned(),
            default_kind: TaskKind::DEFAULT.to_owned(),
            save_after_mutation: true,
            pretty_json: false,
        }
    }
}

impl TaskListConfig {
    /// Creates a configuration that never saves on its own.
    ///
    /// Useful for tests and previews where the store should stay untouched.
    #[must_use]
    pub fn ephemeral() -> Self {
        Self {
            save_after_mutation: false,
            ..Default::default()
        }
    }

    /// Sets the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Sets the default category.
    #[must_use]
    pub fn with_default_kind(mut self, kind: impl Into<String>) -> Self {
        self.default_kind = kind.into();
        self
    }

    /// Sets whether file-backed stores write indented JSON.
    #[must_use]
    pub const fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }

    /// Returns the default category as a domain value.
    #[must_use]
    pub fn default_task_kind(&self) -> TaskKind {
        TaskKind::new(self.default_kind.as_str())
    }
}
