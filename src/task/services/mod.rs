//! Application services for the task list.
//!
//! [`TaskListService`] is the entry point for a presentation layer. The
//! building blocks it composes are public so they can be used on their own:
//! [`CommandHistory`] and [`TaskCommand`] for undoable mutations, and
//! [`TaskObserver`] for task-added notifications.

mod command;
mod config;
mod history;
mod observer;
mod task_list;

pub use command::TaskCommand;
pub use config::TaskListConfig;
pub use history::{Command, CommandHistory};
pub use observer::{NotifyReport, SubscriberError, SubscriberResult, SubscriptionId, TaskObserver};
pub use task_list::{TaskListError, TaskListResult, TaskListService};
