use ulko_core::StorageError;
use ulko_services::{JournalEntry, JournalStore};

/// Journal screen: free-text notes, newest first.
pub struct JournalModel {
    journal: JournalStore,
    entries: Vec<JournalEntry>,
}

impl JournalModel {
    pub fn new(journal: JournalStore) -> Self {
        let entries = journal.entries();
        Self { journal, entries }
    }

    pub fn reload(&mut self) {
        self.entries = self.journal.entries();
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Save the draft. Surrounding whitespace is trimmed and blank drafts are
    /// ignored. Returns whether an entry was added.
    pub fn submit(&mut self, draft: &str) -> Result<bool, StorageError> {
        let text = draft.trim();
        if text.is_empty() {
            return Ok(false);
        }
        self.entries = self.journal.add(text)?;
        Ok(true)
    }
}
