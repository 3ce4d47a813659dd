// File preference store - Browser-storage stand-in persisted as one JSON object
use crate::application::preference_store::{KeyValueStore, StoreError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Every `set` rewrites the whole file via write-then-rename, so a crash
/// never leaves a half-written store behind.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store; an
    /// unreadable or corrupt one is logged and treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match Self::read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Starting with empty storage, {} unusable: {}", path.display(), e);
                BTreeMap::new()
            }
        };
        tracing::debug!("Opened storage {} with {} keys", path.display(), entries.len());

        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    fn read_entries(path: &Path) -> Result<BTreeMap<String, String>, StoreError> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(entries)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = match self.entries.write() {
            Ok(entries) => entries,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }
}
