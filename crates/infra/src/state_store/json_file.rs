use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::r#trait::{PersistedState, STATE_BLOB_NAME, StateStore, StateStoreError};

/// State store backed by one pretty-printed JSON file.
///
/// Saves go to a sibling temp file first and are renamed into place, so a
/// crash mid-write leaves the previous state readable.
#[derive(Debug, Clone)]
pub struct JsonFileStateStore {
    path: PathBuf,
}

impl JsonFileStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<dir>/coffee-shop-storage.json`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(format!("{STATE_BLOB_NAME}.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StateStoreError {
        StateStoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl StateStore for JsonFileStateStore {
    fn load(&self) -> Result<Option<PersistedState>, StateStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.io_error(err)),
        };
        let state = serde_json::from_str(&raw)?;
        Ok(Some(state))
    }

    fn save(&self, state: &PersistedState) -> Result<(), StateStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_string_pretty(state)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| self.io_error(e))?;
        if let Err(err) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(self.io_error(err));
        }

        tracing::debug!(path = %self.path.display(), "state saved");
        Ok(())
    }
}
