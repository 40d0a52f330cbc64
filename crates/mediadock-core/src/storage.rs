//! Key-value preference storage.
//!
//! The application persists exactly one preference today (the selected theme
//! under [`SELECTED_THEME_KEY`]), but storage is a small string map so the
//! backends stay independent of what is stored in them.
//!
//! - [`JsonFilePreferenceStore`] keeps the map in a JSON object file and
//!   replaces it atomically on every write.
//! - [`MemoryPreferenceStore`] keeps the map in memory, for tests and as a
//!   fallback when no data directory is usable.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, info};

use crate::error::{Result, StorageError};

/// Key under which the selected theme identifier is stored.
pub const SELECTED_THEME_KEY: &str = "selectedTheme";

/// File name of the preference file inside the data directory.
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Abstraction over durable key-value storage for testability.
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete the value stored under `key`. Deleting a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Preference store backed by a JSON object file.
#[derive(Debug)]
pub struct JsonFilePreferenceStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl JsonFilePreferenceStore {
    /// Create a store that reads and writes `path`.
    ///
    /// The file is not touched until the first read or write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Create a store using [`PREFERENCES_FILE_NAME`] inside `directory`.
    pub fn in_directory(directory: &Path) -> Self {
        Self::new(directory.join(PREFERENCES_FILE_NAME))
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == IoErrorKind::NotFound => {
                debug!("Preference file {} not found", self.path.display());
                return Ok(BTreeMap::new());
            }
            Err(e) => {
                return Err(StorageError::ReadFailed {
                    path: self.path.clone(),
                    reason: e.to_string(),
                }
                .into());
            }
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            StorageError::Corrupted {
                path: self.path.clone(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| StorageError::CreateDirFailed {
                path: parent.to_path_buf(),
                reason: e.to_string(),
            })?;
        }

        let content = serde_json::to_string_pretty(map)?;
        let tmp_path = self.path.with_extension("json.tmp");

        let write_failed = |e: std::io::Error| StorageError::WriteFailed {
            path: self.path.clone(),
            reason: e.to_string(),
        };
        fs::write(&tmp_path, content).map_err(write_failed)?;
        fs::rename(&tmp_path, &self.path).map_err(write_failed)?;
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|_| StorageError::Unavailable("preference lock poisoned".to_string()).into())
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock()?;
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock()?;
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)?;
        info!("Saved preference '{}' to {}", key, self.path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.lock()?;
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
            debug!("Removed preference '{}'", key);
        }
        Ok(())
    }
}

/// In-memory preference store.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut values) = store.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        store
    }

    fn values(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.values
            .lock()
            .map_err(|_| StorageError::Unavailable("preference lock poisoned".to_string()).into())
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    #[test]
    fn test_json_store_missing_file_reads_none() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let store = JsonFilePreferenceStore::in_directory(temp_dir.path());

        assert_eq!(store.get(SELECTED_THEME_KEY).expect("get"), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_json_store_set_then_get() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let store = JsonFilePreferenceStore::in_directory(temp_dir.path());

        store.set(SELECTED_THEME_KEY, "dark-midnight").expect("set");
        assert_eq!(
            store.get(SELECTED_THEME_KEY).expect("get").as_deref(),
            Some("dark-midnight")
        );
    }

    #[test]
    fn test_json_store_survives_reopen() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        {
            let store = JsonFilePreferenceStore::in_directory(temp_dir.path());
            store.set(SELECTED_THEME_KEY, "amoled-neon").expect("set");
        }

        let reopened = JsonFilePreferenceStore::in_directory(temp_dir.path());
        assert_eq!(
            reopened.get(SELECTED_THEME_KEY).expect("get").as_deref(),
            Some("amoled-neon")
        );
    }

    #[test]
    fn test_json_store_creates_parent_directories() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let nested = temp_dir.path().join("a/b/c");
        let store = JsonFilePreferenceStore::in_directory(&nested);

        store.set("k", "v").expect("set");
        assert!(nested.join(PREFERENCES_FILE_NAME).exists());
        assert!(!nested.join("preferences.json.tmp").exists());
    }

    #[test]
    fn test_json_store_keeps_other_keys() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let store = JsonFilePreferenceStore::in_directory(temp_dir.path());

        store.set("a", "1").expect("set a");
        store.set("b", "2").expect("set b");
        store.remove("a").expect("remove a");

        assert_eq!(store.get("a").expect("get a"), None);
        assert_eq!(store.get("b").expect("get b").as_deref(), Some("2"));
    }

    #[test]
    fn test_json_store_corrupted_file() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let path = temp_dir.path().join(PREFERENCES_FILE_NAME);
        fs::write(&path, "{not json").expect("write garbage");

        let store = JsonFilePreferenceStore::new(&path);
        let result = store.get(SELECTED_THEME_KEY);
        assert!(matches!(
            result,
            Err(Error::Storage(StorageError::Corrupted { .. }))
        ));
    }

    #[test]
    fn test_json_store_empty_file_is_empty_map() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let path = temp_dir.path().join(PREFERENCES_FILE_NAME);
        fs::write(&path, "  \n").expect("write blank");

        let store = JsonFilePreferenceStore::new(&path);
        assert_eq!(store.get(SELECTED_THEME_KEY).expect("get"), None);
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryPreferenceStore::with_entry(SELECTED_THEME_KEY, "light-ocean");
        assert_eq!(
            store.get(SELECTED_THEME_KEY).expect("get").as_deref(),
            Some("light-ocean")
        );

        store.remove(SELECTED_THEME_KEY).expect("remove");
        assert_eq!(store.get(SELECTED_THEME_KEY).expect("get"), None);

        // Removing again is fine
        store.remove(SELECTED_THEME_KEY).expect("remove missing");
    }
}
