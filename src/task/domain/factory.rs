//! Factory producing fresh task records.

use super::{Task, TaskKind, TaskText};
use mockable::Clock;
use std::sync::Arc;

/// Creates tasks with fresh identifiers and clock-supplied timestamps.
#[derive(Debug, Clone)]
pub struct TaskFactory<C>
where
    C: Clock,
{
    clock: Arc<C>,
    default_kind: TaskKind,
}

impl<C> TaskFactory<C>
where
    C: Clock,
{
    /// Creates a factory that labels uncategorised tasks as
    /// [`TaskKind::DEFAULT`].
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            clock,
            default_kind: TaskKind::default(),
        }
    }

    /// Overrides the category applied when none is supplied.
    #[must_use]
    pub fn with_default_kind(mut self, kind: TaskKind) -> Self {
        self.default_kind = kind;
        self
    }

    /// Returns the category applied when none is supplied.
    #[must_use]
    pub const fn default_kind(&self) -> &TaskKind {
        &self.default_kind
    }

    /// Creates a new incomplete task.
    #[must_use]
    pub fn create_task(&self, text: TaskText, kind: Option<TaskKind>) -> Task {
        let resolved_kind = kind.unwrap_or_else(|| self.default_kind.clone());
        Task::new(text, resolved_kind, &*self.clock)
    }
}
