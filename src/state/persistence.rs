use std::collections::BTreeMap;
use std::fmt::Debug;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Read(String),
    #[error("failed to write settings: {0}")]
    Write(String),
    #[error("malformed settings: {0}")]
    Format(String),
}

/// Key-value storage for user settings.
pub trait SettingsStore: Debug + Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>, SettingsError>;

    fn store(&self, key: &str, value: &str) -> Result<(), SettingsError>;
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: std::sync::Mutex<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl SettingsStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, SettingsError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| SettingsError::Read(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn store(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| SettingsError::Write(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Counter for unique temp file names within this process.
static SAVE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Settings kept as one JSON object on disk.
///
/// A missing file reads as empty. Writes land in a temp file first and are
/// renamed over the target, so a crash mid-write never leaves a truncated
/// file behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, SettingsError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|e| SettingsError::Format(e.to_string()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(SettingsError::Read(e.to_string())),
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), SettingsError> {
        let json =
            serde_json::to_string_pretty(entries).map_err(|e| SettingsError::Format(e.to_string()))?;

        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| SettingsError::Write(e.to_string()))?;
        }

        let unique_id = SAVE_COUNTER.fetch_add(1, Ordering::Relaxed);
        let temp_path = self
            .path
            .with_extension(format!("json.{}.{}.tmp", std::process::id(), unique_id));

        std::fs::write(&temp_path, json.as_bytes())
            .map_err(|e| SettingsError::Write(e.to_string()))?;

        if let Err(e) = std::fs::rename(&temp_path, &self.path) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(SettingsError::Write(e.to_string()));
        }

        Ok(())
    }
}

impl SettingsStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, SettingsError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn store(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(SettingsError::Format(error)) => {
                tracing::warn!(%error, path = %self.path.display(), "replacing malformed settings file");
                BTreeMap::new()
            }
            Err(error) => return Err(error),
        };

        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_overwrites_values() {
        let store = MemoryStore::default();

        assert_eq!(store.load("lang").unwrap(), None);
        store.store("lang", "en").unwrap();
        store.store("lang", "ko").unwrap();
        assert_eq!(store.load("lang").unwrap().as_deref(), Some("ko"));
    }

    #[test]
    fn file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("settings.json"));

        assert_eq!(store.load("lang").unwrap(), None);
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        FileStore::new(&path).store("lang", "ja").unwrap();
        FileStore::new(&path).store("other", "value").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.load("lang").unwrap().as_deref(), Some("ja"));
        assert_eq!(reopened.load("other").unwrap().as_deref(), Some("value"));

        let leftovers: Vec<_> = std::fs::read_dir(path.parent().unwrap())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn file_store_reports_and_replaces_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = FileStore::new(&path);

        assert!(matches!(store.load("lang"), Err(SettingsError::Format(_))));

        store.store("lang", "en").unwrap();
        assert_eq!(store.load("lang").unwrap().as_deref(), Some("en"));
    }
}
