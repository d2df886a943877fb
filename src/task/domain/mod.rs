//! Domain model for the task list.
//!
//! The domain covers the task entity, its factory and grouping, and the
//! ordering strategies. Persistence and notification live outside this
//! boundary.

mod error;
mod factory;
mod group;
mod ids;
pub mod sorting;
mod task;

pub use error::TaskDomainError;
pub use factory::TaskFactory;
pub use group::TaskGroup;
pub use ids::{Priority, TaskId, TaskKind, TaskText};
pub use sorting::{ByDate, ByPriority, SortStrategy, TaskSort};
pub use task::Task;
