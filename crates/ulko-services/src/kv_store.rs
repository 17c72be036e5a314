//! SQLite-backed key-value store.
//!
//! One `kv` table holds every persisted record of the app as a whole JSON (or
//! plain string) value under its fixed key.

use anyhow::{Context, Result};
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use ulko_core::error::RusqliteErrorExt;
use ulko_core::{KeyValueStore, StorageError};

/// Local SQLite record store
pub struct SqliteKvStore {
    conn: Mutex<Connection>,
}

impl SqliteKvStore {
    /// Open or create the database
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let conn = Connection::open(path).context("Failed to open record database")?;
        Self::with_connection(conn)
    }

    /// In-memory database, gone when dropped.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory database")?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )
        .context("Failed to initialize schema")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// All stored keys, sorted.
    pub fn keys(&self) -> Result<Vec<String>, StorageError> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare("SELECT key FROM kv ORDER BY key")
            .map_err(|e| e.into_storage_error())?;
        let keys = stmt
            .query_map([], |row| row.get(0))
            .map_err(|e| e.into_storage_error())?
            .collect::<Result<Vec<String>, _>>()
            .map_err(|e| e.into_storage_error())?;
        Ok(keys)
    }
}

impl KeyValueStore for SqliteKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .lock()
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| row.get(0))
            .optional()
            .map_err(|e| e.into_storage_error())?;
        tracing::debug!(key, found = value.is_some(), "kv get");
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn
            .lock()
            .execute(
                "INSERT INTO kv (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .map_err(|e| e.into_storage_error())?;
        tracing::debug!(key, bytes = value.len(), "kv set");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.conn
            .lock()
            .execute("DELETE FROM kv WHERE key = ?1", params![key])
            .map_err(|e| e.into_storage_error())?;
        tracing::debug!(key, "kv remove");
        Ok(())
    }
}
