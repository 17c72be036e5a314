use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use ulko_core::{KeyValueStore, StorageError};

use crate::record;

pub const JOURNAL_KEY: &str = "journal_entries";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// Creation time in epoch milliseconds
    pub id: String,
    pub text: String,
    pub created_at: String,
}

impl JournalEntry {
    pub fn new(text: &str, created_at: DateTime<Utc>) -> Self {
        Self {
            id: created_at.timestamp_millis().to_string(),
            text: text.to_string(),
            created_at: created_at.to_rfc3339(),
        }
    }
}

/// Journal entries persisted under [`JOURNAL_KEY`], newest first.
#[derive(Clone)]
pub struct JournalStore {
    store: Arc<dyn KeyValueStore>,
}

impl JournalStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn entries(&self) -> Vec<JournalEntry> {
        record::read_list(self.store.as_ref(), JOURNAL_KEY)
    }

    /// Save `text` as a new entry. The text is stored as given.
    pub fn add(&self, text: &str) -> Result<Vec<JournalEntry>, StorageError> {
        self.add_at(text, Utc::now())
    }

    pub fn add_at(&self, text: &str, created_at: DateTime<Utc>) -> Result<Vec<JournalEntry>, StorageError> {
        let entries = record::prepend(self.store.as_ref(), JOURNAL_KEY, JournalEntry::new(text, created_at))?;
        tracing::info!(total = entries.len(), "Journal entry added");
        Ok(entries)
    }
}
