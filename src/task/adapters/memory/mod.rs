//! In-memory adapters for the task ports.

mod store;
mod task;

pub use store::InMemoryTaskStore;
pub use task::InMemoryTaskRepository;
