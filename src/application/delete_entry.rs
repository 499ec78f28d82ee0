//! Delete entry use case

use crate::domain::Entry;
use crate::error::Result;
use crate::infrastructure::JournalStore;

/// Service for removing entries
pub struct DeleteEntryService {
    store: JournalStore,
}

impl DeleteEntryService {
    pub fn new(store: JournalStore) -> Self {
        DeleteEntryService { store }
    }

    /// Delete the entry at a zero-based index and persist. Out of range is a
    /// no-op returning None; nothing is written in that case.
    pub fn execute(&self, index: usize) -> Result<Option<Entry>> {
        let mut journal = self.store.load()?;

        match journal.delete(index) {
            Some(deleted) => {
                self.store.save(&journal)?;
                Ok(Some(deleted))
            }
            None => Ok(None),
        }
    }

    /// Delete all entries and persist, returning how many were removed.
    pub fn execute_all(&self) -> Result<usize> {
        let mut journal = self.store.load()?;
        let count = journal.clear();
        if count > 0 {
            self.store.save(&journal)?;
        }
        Ok(count)
    }
}
