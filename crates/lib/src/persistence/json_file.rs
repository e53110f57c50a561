use std::fs;
use std::path::{Path, PathBuf};

use super::{Persistence, PersistenceError, decode};
use crate::state::PersistedState;

/// Stores the state as pretty-printed JSON in a single file.
///
/// A missing file reads as "nothing stored yet". Parent directories are not
/// created.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> PersistenceError {
        PersistenceError::FileIo {
            path: self.path.clone(),
            source,
        }
    }
}

impl Persistence for JsonFile {
    fn get(&self) -> Result<Option<PersistedState>, PersistenceError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        decode(&json).map(Some)
    }

    fn set(&self, state: &PersistedState) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(state)
            .map_err(|source| PersistenceError::SerializationFailed { source })?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))
    }
}
