//! JSON file task store scoped to a single directory capability.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use std::sync::Arc;
use uuid::Uuid;

use crate::task::{
    adapters::decode_task_list,
    domain::Task,
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
    services::TaskListConfig,
};

/// Task store writing the task list to `<key>.json` inside one directory.
///
/// Saves go to a uniquely named temporary sibling first and are renamed into
/// place, so a reader never observes a half-written file and concurrent saves
/// through clones never share a temporary file.
#[derive(Debug, Clone)]
pub struct JsonFileTaskStore {
    dir: Arc<Dir>,
    file_name: Utf8PathBuf,
    pretty: bool,
}

impl JsonFileTaskStore {
    /// Opens (creating if needed) `dir` and binds the store to `key`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Io`] when `key` is not a plain file stem or
    /// the directory cannot be created or opened.
    pub fn open(dir: impl AsRef<Utf8Path>, key: &str) -> TaskStoreResult<Self> {
        validate_key(key)?;
        let path = dir.as_ref();
        std::fs::create_dir_all(path.as_std_path())?;
        let handle = Dir::open_ambient_dir(path, ambient_authority())?;
        Ok(Self {
            dir: Arc::new(handle),
            file_name: Utf8PathBuf::from(format!("{key}.json")),
            pretty: false,
        })
    }

    /// Opens `dir` using the storage key and JSON style from `config`.
    ///
    /// # Errors
    ///
    /// See [`Self::open`].
    pub fn from_config(dir: impl AsRef<Utf8Path>, config: &TaskListConfig) -> TaskStoreResult<Self> {
        Ok(Self::open(dir, &config.storage_key)?.with_pretty_json(config.pretty_json))
    }

    /// Writes indented JSON instead of the compact form.
    #[must_use]
    pub const fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Returns the file name, relative to the store directory.
    #[must_use]
    pub fn file_name(&self) -> &Utf8Path {
        &self.file_name
    }

    fn tmp_name(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(format!("{}.{}.tmp", self.file_name, Uuid::new_v4()))
    }

    fn encode(&self, tasks: &[Task]) -> TaskStoreResult<Vec<u8>> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(tasks)?
        } else {
            serde_json::to_vec(tasks)?
        };
        Ok(bytes)
    }
}

fn validate_key(key: &str) -> TaskStoreResult<()> {
    let is_plain = !key.is_empty()
        && key != "."
        && key != ".."
        && !key.contains(['/', '\\'])
        && !key.chars().any(char::is_whitespace);
    if is_plain {
        return Ok(());
    }
    Err(io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("storage key '{key}' must be a plain file stem"),
    )
    .into())
}

fn read_optional(dir: &Dir, file_name: &Utf8Path) -> io::Result<Option<String>> {
    match dir.read_to_string(file_name) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

fn write_then_rename(
    dir: &Dir,
    tmp_name: &Utf8Path,
    file_name: &Utf8Path,
    bytes: &[u8],
) -> io::Result<()> {
    let result = dir
        .write(tmp_name, bytes)
        .and_then(|()| dir.rename(tmp_name, dir, file_name));
    if result.is_err() && dir.remove_file(tmp_name).is_err() {
        tracing::debug!(file = %tmp_name, "temporary task file left behind");
    }
    result
}

#[async_trait]
impl TaskStore for JsonFileTaskStore {
    async fn load(&self) -> TaskStoreResult<Vec<Task>> {
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        let stored = tokio::task::spawn_blocking(move || read_optional(&dir, &file_name))
            .await
            .map_err(TaskStoreError::persistence)??;
        Ok(stored
            .map(|json| decode_task_list(self.file_name.as_str(), &json))
            .unwrap_or_default())
    }

    async fn save(&self, tasks: &[Task]) -> TaskStoreResult<()> {
        let bytes = self.encode(tasks)?;
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        let tmp_name = self.tmp_name();
        tokio::task::spawn_blocking(move || {
            write_then_rename(&dir, &tmp_name, &file_name, &bytes)
        })
        .await
        .map_err(TaskStoreError::persistence)??;
        tracing::debug!(file = %self.file_name, count = tasks.len(), "saved task list");
        Ok(())
    }
}
