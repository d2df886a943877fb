//! Shared world state for task list BDD scenarios.

use std::sync::{Arc, Mutex};

use crate::test_helpers::SteppingClock;
use rstest::fixture;
use todo_core::task::{
    adapters::memory::{InMemoryTaskRepository, InMemoryTaskStore},
    domain::Task,
    services::{TaskListError, TaskListService},
};

/// Service type used by the BDD world.
pub type TestTaskListService =
    TaskListService<InMemoryTaskRepository, InMemoryTaskStore, SteppingClock>;

/// Scenario world for task list behaviour tests.
pub struct TaskListWorld {
    /// The service under test.
    pub service: TestTaskListService,
    /// Store handle shared with the service.
    pub store: InMemoryTaskStore,
    /// Result of the last add attempt.
    pub last_add_result: Option<Result<Task, TaskListError>>,
    /// Task texts delivered to the scenario subscriber.
    pub notified: Arc<Mutex<Vec<String>>>,
}

impl TaskListWorld {
    /// Creates a world around an empty list.
    #[must_use]
    pub fn new() -> Self {
        let store = InMemoryTaskStore::new("tasks");
        let service = TaskListService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(store.clone()),
            Arc::new(SteppingClock::default()),
        );
        Self {
            service,
            store,
            last_add_result: None,
            notified: Arc::default(),
        }
    }

    /// Finds a listed task by its text.
    ///
    /// # Errors
    ///
    /// Returns an error when the list cannot be read or holds no such task.
    pub fn task_named(&self, text: &str) -> Result<Task, eyre::Report> {
        self.service
            .tasks()?
            .into_iter()
            .find(|task| task.text().as_str() == text)
            .ok_or_else(|| eyre::eyre!("no task named '{text}'"))
    }
}

impl Default for TaskListWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskListWorld {
    TaskListWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
