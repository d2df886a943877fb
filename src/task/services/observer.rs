//! Synchronous fan-out of task-added notifications.

use crate::task::domain::Task;
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use thiserror::Error;

/// Error a subscriber reports back to the observer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("subscriber failed: {0}")]
pub struct SubscriberError(pub String);

impl SubscriberError {
    /// Creates a subscriber error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Result type returned by subscriber callbacks.
pub type SubscriberResult = Result<(), SubscriberError>;

type Callback = Arc<dyn Fn(&Task) -> SubscriberResult + Send + Sync>;

/// Handle returned by [`TaskObserver::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Outcome of a single [`TaskObserver::notify`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotifyReport {
    /// Callbacks that returned successfully.
    pub delivered: usize,
    /// Callbacks that returned an error or panicked.
    pub failed: usize,
}

/// Registry of callbacks invoked when a task is added.
///
/// Callbacks run synchronously in subscription order. A callback that returns
/// an error or panics is logged and skipped; the remaining callbacks still
/// run.
#[derive(Default)]
pub struct TaskObserver {
    subscribers: Vec<(SubscriptionId, Callback)>,
    next_id: u64,
}

impl TaskObserver {
    /// Creates an observer with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&Task) -> SubscriberResult + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.subscribers.push((id, Arc::new(callback)));
        id
    }

    /// Removes a callback. Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    /// Number of registered callbacks.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Invokes every callback with `task`.
    pub fn notify(&self, task: &Task) -> NotifyReport {
        let mut report = NotifyReport::default();
        for (id, callback) in &self.subscribers {
            match panic::catch_unwind(AssertUnwindSafe(|| callback(task))) {
                Ok(Ok(())) => report.delivered += 1,
                Ok(Err(err)) => {
                    tracing::warn!(
                        subscription = id.0,
                        task_id = %task.id(),
                        error = %err,
                        "task subscriber failed"
                    );
                    report.failed += 1;
                }
                Err(payload) => {
                    tracing::warn!(
                        subscription = id.0,
                        task_id = %task.id(),
                        panic = panic_message(payload.as_ref()),
                        "task subscriber panicked"
                    );
                    report.failed += 1;
                }
            }
        }
        report
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}

impl fmt::Debug for TaskObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskObserver")
            .field("subscribers", &self.subscribers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
