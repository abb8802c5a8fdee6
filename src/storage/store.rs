//! Todo persistence: the whole collection lives in one JSON file.

use crate::domain::list::TodoList;
use crate::error::TodoError;
use crate::storage::record;
use std::fs;
use std::path::{Path, PathBuf};

const EMPTY_DOCUMENT: &str = "[]";

pub struct TodoStore {
    path: PathBuf,
}

impl TodoStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file with an empty collection if it is absent or empty.
    pub fn ensure_exists(&self) -> Result<(), TodoError> {
        let is_empty = match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => true,
            Err(e) => return Err(TodoError::storage(&self.path, e)),
        };
        if !is_empty {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| TodoError::storage(&self.path, e))?;
        }
        fs::write(&self.path, EMPTY_DOCUMENT).map_err(|e| TodoError::storage(&self.path, e))?;
        tracing::debug!(path = %self.path.display(), "created todo file");
        Ok(())
    }

    /// Read the entire collection.
    pub fn load(&self) -> Result<TodoList, TodoError> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| TodoError::storage(&self.path, e))?;
        let list = record::decode(&content).map_err(|e| TodoError::storage(&self.path, e))?;
        tracing::debug!(path = %self.path.display(), count = list.len(), "loaded todos");
        Ok(list)
    }

    /// Overwrite the backing file with the entire collection.
    ///
    /// Writes to a sibling temp file first and renames it into place, so the
    /// file is never observed half-written.
    pub fn save(&self, list: &TodoList) -> Result<(), TodoError> {
        let content = record::encode(list).map_err(|e| TodoError::storage(&self.path, e))?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| TodoError::storage(&self.path, e))?;
        }
        let tmp = self.tmp_path();
        fs::write(&tmp, content).map_err(|e| TodoError::storage(&self.path, e))?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(TodoError::storage(&self.path, e));
        }
        tracing::debug!(path = %self.path.display(), count = list.len(), "saved todos");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
