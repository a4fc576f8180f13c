//! Durable key/value storage for the theme preference
//!
//! The store persists two string keys ([`COLOR_SCHEME_KEY`], [`THEME_MODE_KEY`]).
//! Backends only need to get and set strings; the store decides what a
//! missing or unreadable value means.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use rustc_hash::FxHashMap;
use toml::{Table, Value};
use tracing::warn;

use crate::error::StorageError;

/// Storage key holding the color scheme id
pub const COLOR_SCHEME_KEY: &str = "colorScheme";

/// Storage key holding the theme mode id
pub const THEME_MODE_KEY: &str = "themeMode";

/// Client-local string storage
pub trait PreferenceStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: PreferenceStorage + ?Sized> PreferenceStorage for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// In-process storage, lost when dropped
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<FxHashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with entries, e.g. to simulate a previous session
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            entries: RwLock::new(map),
        }
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept in a flat TOML table
///
/// ```toml
/// colorScheme = "purple"
/// themeMode = "light"
/// ```
///
/// The file is read on every `get` and rewritten on every `set`; it does not
/// need to exist until the first write. Entries that are not strings are
/// kept but never returned. A file that no longer parses is replaced on the
/// next `set`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Table, StorageError> {
        if !self.path.exists() {
            return Ok(Table::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(content.parse::<Table>()?)
    }
}

impl PreferenceStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let table = self.load()?;
        Ok(table.get(key).and_then(Value::as_str).map(str::to_string))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = match self.load() {
            Ok(table) => table,
            Err(StorageError::Parse(err)) => {
                warn!(
                    "Replacing unreadable preference file {}: {}",
                    self.path.display(),
                    err
                );
                Table::new()
            }
            Err(err) => return Err(err),
        };
        entries.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, toml::to_string(&entries)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get(COLOR_SCHEME_KEY).unwrap(), None);
        storage.set(COLOR_SCHEME_KEY, "green").unwrap();
        assert_eq!(
            storage.get(COLOR_SCHEME_KEY).unwrap().as_deref(),
            Some("green")
        );
    }

    #[test]
    fn file_storage_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested/prefs.toml"));
        assert_eq!(storage.get(THEME_MODE_KEY).unwrap(), None);

        storage.set(THEME_MODE_KEY, "light").unwrap();
        storage.set(COLOR_SCHEME_KEY, "orange").unwrap();

        let reopened = FileStorage::new(storage.path());
        assert_eq!(reopened.get(THEME_MODE_KEY).unwrap().as_deref(), Some("light"));
        assert_eq!(
            reopened.get(COLOR_SCHEME_KEY).unwrap().as_deref(),
            Some("orange")
        );
    }

    #[test]
    fn file_storage_reports_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        fs::write(&path, "colorScheme = [").unwrap();
        let err = FileStorage::new(&path).get(COLOR_SCHEME_KEY).unwrap_err();
        assert!(matches!(err, StorageError::Parse(_)));
    }

    #[test]
    fn file_storage_skips_non_string_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        fs::write(&path, "colorScheme = \"blue\"\nthemeMode = 3\n").unwrap();

        let storage = FileStorage::new(&path);
        assert_eq!(storage.get(COLOR_SCHEME_KEY).unwrap().as_deref(), Some("blue"));
        assert_eq!(storage.get(THEME_MODE_KEY).unwrap(), None);
    }
}
