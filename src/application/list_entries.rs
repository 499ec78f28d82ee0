//! List entries use case

use crate::domain::Journal;
use crate::error::Result;
use crate::infrastructure::JournalStore;

/// Service for reading the journal for display
pub struct ListEntriesService {
    store: JournalStore,
}

impl ListEntriesService {
    pub fn new(store: JournalStore) -> Self {
        ListEntriesService { store }
    }

    /// Load the full journal in insertion order. Display layers reverse it
    /// for most-recent-first views.
    pub fn execute(&self) -> Result<Journal> {
        self.store.load()
    }
}
