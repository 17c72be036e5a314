//! Key-value persistence seam.
//!
//! Every persisted record in the app (garden, journal, avatar, language)
//! lives under one fixed string key and is read and written whole. The
//! `KeyValueStore` trait is the only thing record helpers and the
//! application context depend on; SQLite and in-memory backends implement it.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::error::StorageError;

/// String-keyed store of whole serialized records.
///
/// Implementations must be safe to share between screens, but callers only
/// ever issue one read or write at a time.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value stored under `key`. Missing keys are not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Ephemeral store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.values.lock().remove(key);
        Ok(())
    }
}
