//! Preference storage.
//!
//! The card only needs a tiny key-value capability: read one flag at
//! startup, write it on every theme toggle. [`KeyValueStore`] is that
//! capability; [`Storage`] backs it with redb, [`MemoryStore`] keeps it in
//! memory for tests and `--memory` runs.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, TableDefinition};

use crate::error::CardError;

/// Key holding the theme preference (`"dark"` or `"light"`)
pub const THEME_KEY: &str = "profile_theme";

const PREFERENCES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("preferences");

/// String key-value capability injected into a card
pub trait KeyValueStore: Send + Sync {
    /// Read a value. `None` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, CardError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), CardError>;
}

/// Shared store handle for context providers
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
}

impl Storage {
    /// Create a new storage instance at the given path.
    ///
    /// This will:
    /// - Create the database directory if it doesn't exist
    /// - Initialize the database file
    /// - Create the preferences table
    pub fn new(path: impl AsRef<Path>) -> Result<Self, CardError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFERENCES_TABLE)?;
        }
        write_txn.commit()?;

        tracing::debug!(path = %path.display(), "opened preference database");

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }
}

impl KeyValueStore for Storage {
    fn get(&self, key: &str) -> Result<Option<String>, CardError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PREFERENCES_TABLE)?;

        Ok(table.get(key)?.map(|v| v.value().to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CardError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

/// Volatile store; contents vanish with the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `key = value`
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.values.write().insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CardError> {
        Ok(self.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CardError> {
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_storage_creation() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("nested").join("preferences.redb");
        let _storage = Storage::new(&db_path).unwrap();
        assert!(db_path.exists());
    }

    #[test]
    fn test_missing_key_is_none() {
        let dir = tempdir().unwrap();
        let storage = Storage::new(dir.path().join("preferences.redb")).unwrap();
        assert_eq!(storage.get(THEME_KEY).unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let dir = tempdir().unwrap();
        let storage = Storage::new(dir.path().join("preferences.redb")).unwrap();

        storage.set(THEME_KEY, "dark").unwrap();
        storage.set(THEME_KEY, "light").unwrap();

        assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::with_value(THEME_KEY, "dark");
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        store.set(THEME_KEY, "light").unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
        assert_eq!(store.get("other").unwrap(), None);
    }
}
