//! Adapters implementing the task ports.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryTaskRepository`]: the shared in-memory task collection
//! - [`memory::InMemoryTaskStore`]: key-value slot storage held in memory
//! - [`file::JsonFileTaskStore`]: JSON file storage inside one directory
//! - [`board::BoardTaskAdapter`]: task view over a third-party card board

pub mod board;
pub mod file;
pub mod memory;

use std::collections::HashSet;

use crate::task::domain::Task;
use serde_json::Value;

/// Decodes a stored task array.
///
/// Content that is not a JSON array loads as empty. Inside an array, entries
/// that are not valid tasks and entries repeating an earlier identifier are
/// skipped, so one bad record never costs the rest of the list.
pub(crate) fn decode_task_list(source: &str, json: &str) -> Vec<Task> {
    let entries = match serde_json::from_str::<Vec<Value>>(json) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(source, error = %err, "discarding malformed task list");
            return Vec::new();
        }
    };
    let mut seen = HashSet::with_capacity(entries.len());
    let mut tasks = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<Task>(entry) {
            Ok(task) if seen.insert(task.id()) => tasks.push(task),
            Ok(task) => {
                tracing::warn!(
                    source,
                    index,
                    task_id = %task.id(),
                    "skipping repeated task entry"
                );
            }
            Err(err) => {
                tracing::warn!(source, index, error = %err, "skipping malformed task entry");
            }
        }
    }
    tasks
}
