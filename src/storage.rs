use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed JSON key-value store.
///
/// Each key maps to `<dir>/<key>.json`. Reads are forgiving: a missing or
/// corrupt file reads as absent, so stale local state can never block a
/// render. Writes are strict and propagate IO errors.
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        JsonStore { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!(key, error = %e, "store entry unreadable, treating as absent");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(key, error = %e, "store entry corrupt, treating as absent");
                None
            }
        }
    }

    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let raw = serde_json::to_string(value)?;
        fs::write(self.path_for(key), raw)?;
        Ok(())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
