//! In-memory key-value task store for tests and ephemeral sessions.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    adapters::decode_task_list,
    domain::Task,
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Task store keeping serialized JSON in a shared map.
///
/// The map mimics a device key-value store: values are strings, and the task
/// list lives under a single key.
#[derive(Debug, Clone)]
pub struct InMemoryTaskStore {
    key: String,
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryTaskStore {
    /// Creates an empty store that reads and writes `key`.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            slots: Arc::default(),
        }
    }

    /// Returns the slot key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the raw stored value for any key.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the slot map is poisoned.
    pub fn raw(&self, key: &str) -> TaskStoreResult<Option<String>> {
        let slots = self.slots.read().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(slots.get(key).cloned())
    }

    /// Writes a raw value for any key, bypassing serialization.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the slot map is poisoned.
    pub fn put_raw(&self, key: impl Into<String>, value: impl Into<String>) -> TaskStoreResult<()> {
        let mut slots = self.slots.write().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        slots.insert(key.into(), value.into());
        Ok(())
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn load(&self) -> TaskStoreResult<Vec<Task>> {
        let stored = self.raw(&self.key)?;
        Ok(stored
            .map(|json| decode_task_list(&self.key, &json))
            .unwrap_or_default())
    }

    async fn save(&self, tasks: &[Task]) -> TaskStoreResult<()> {
        let json = serde_json::to_string(tasks)?;
        self.put_raw(self.key.clone(), json)
    }
}
