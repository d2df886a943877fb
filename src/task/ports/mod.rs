//! Port contracts for the task list.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod remote;
pub mod repository;
pub mod store;

pub use remote::{RemoteTaskError, RemoteTaskResult, RemoteTaskService};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
pub use store::{TaskStore, TaskStoreError, TaskStoreResult};

#[cfg(test)]
pub use store::MockTaskStore;
