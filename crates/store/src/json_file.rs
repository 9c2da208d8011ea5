//! JSON-file snapshot store: one pretty-printed file per snapshot type.

use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::SnapshotStore;
use crate::error::StoreError;

/// Persists a snapshot as a single JSON file.
///
/// A missing file loads as `None` (fresh install). Writes go through a
/// sibling temp file and a rename, so a crash mid-save never leaves a
/// truncated snapshot behind.
#[derive(Debug)]
pub struct JsonFileStore<T> {
    path: PathBuf,
    _snapshot: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _snapshot: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T> SnapshotStore<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    fn load(&self) -> Result<Option<T>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let snapshot = serde_json::from_str(&raw)?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &T) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(snapshot)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
