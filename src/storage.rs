//! Durable local preference storage.
//!
//! Preferences are plain string key/value pairs. Writes are best effort:
//! the preference stores treat storage as a cache of the user's choices,
//! so a failed write is logged and absorbed rather than surfaced. A
//! malformed or missing value is always treated as absent.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use rusqlite::{params, Connection, OptionalExtension};
use thiserror::Error;
use tracing::warn;

/// Storage key for the active UI language.
pub const PREFERRED_LANGUAGE_KEY: &str = "preferredLanguage";

/// Storage key for the translation on/off flag.
pub const TRANSLATION_ENABLED_KEY: &str = "translationEnabled";

/// Storage key for the translation source language.
pub const TRANSLATION_SOURCE_KEY: &str = "translationSourceLang";

/// Storage key for the translation target language.
pub const TRANSLATION_TARGET_KEY: &str = "translationTargetLang";

/// Error opening the preference database.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to open preference database at {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("failed to initialize preference schema: {0}")]
    Schema(#[from] rusqlite::Error),
}

/// Key/value store for user preferences.
///
/// Reads return `None` for anything missing; writes never propagate an
/// error to the caller. Implementations must be shareable across tasks.
pub trait PreferenceStorage: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
}

/// SQLite-backed preference storage.
#[derive(Clone)]
pub struct SqliteStorage {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStorage {
    /// Open (or create) the preference database at `path` and ensure the
    /// schema exists.
    pub fn open(path: &str) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(|source| StorageError::Open {
            path: path.to_string(),
            source,
        })?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-process database that vanishes when dropped.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(|source| StorageError::Open {
            path: ":memory:".to_string(),
            source,
        })?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

impl PreferenceStorage for SqliteStorage {
    fn get(&self, key: &str) -> Option<String> {
        let conn = self.conn.lock().expect("preference db lock poisoned");
        let result = conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional();

        match result {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read preference '{}': {}", key, e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        let conn = self.conn.lock().expect("preference db lock poisoned");
        let result = conn.execute(
            "INSERT INTO preferences (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        );

        if let Err(e) = result {
            warn!("Failed to persist preference '{}': {}", key, e);
        }
    }
}

/// In-memory preference storage for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .expect("preference map lock poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .expect("preference map lock poisoned")
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ==================== MemoryStorage Tests ====================

    #[test]
    fn test_memory_get_missing_key() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("nope"), None);
    }

    #[test]
    fn test_memory_set_then_get() {
        let storage = MemoryStorage::new();
        storage.set(PREFERRED_LANGUAGE_KEY, "es");
        assert_eq!(storage.get(PREFERRED_LANGUAGE_KEY), Some("es".to_string()));
    }

    #[test]
    fn test_memory_set_overwrites() {
        let storage = MemoryStorage::new();
        storage.set("k", "a");
        storage.set("k", "b");
        assert_eq!(storage.get("k"), Some("b".to_string()));
    }

    // ==================== SqliteStorage Tests ====================

    #[test]
    fn test_sqlite_open_creates_schema() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("prefs.db");
        let storage = SqliteStorage::open(path.to_str().unwrap()).expect("open");

        assert_eq!(storage.get(PREFERRED_LANGUAGE_KEY), None);
    }

    #[test]
    fn test_sqlite_set_then_get() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("prefs.db");
        let storage = SqliteStorage::open(path.to_str().unwrap()).expect("open");

        storage.set(TRANSLATION_ENABLED_KEY, "true");
        assert_eq!(
            storage.get(TRANSLATION_ENABLED_KEY),
            Some("true".to_string())
        );
    }

    #[test]
    fn test_sqlite_values_survive_reopen() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("prefs.db");

        {
            let storage = SqliteStorage::open(path.to_str().unwrap()).expect("open");
            storage.set(PREFERRED_LANGUAGE_KEY, "hi");
        }

        let reopened = SqliteStorage::open(path.to_str().unwrap()).expect("reopen");
        assert_eq!(
            reopened.get(PREFERRED_LANGUAGE_KEY),
            Some("hi".to_string())
        );
    }

    #[test]
    fn test_sqlite_set_overwrites() {
        let storage = SqliteStorage::open_in_memory().expect("open");
        storage.set("k", "a");
        storage.set("k", "b");
        assert_eq!(storage.get("k"), Some("b".to_string()));
    }

    #[test]
    fn test_sqlite_open_bad_path_errors() {
        let result = SqliteStorage::open("/nonexistent-dir/definitely/prefs.db");
        assert!(result.is_err());
        let message = result.err().unwrap().to_string();
        assert!(message.contains("prefs.db"));
    }
}
