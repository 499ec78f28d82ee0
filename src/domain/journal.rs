//! Journal aggregate root

use crate::domain::Entry;

/// Owns the ordered sequence of dream entries.
///
/// Insertion order is display order; listing views reverse it for
/// most-recent-first output. Mutation goes through `add`/`delete`/`clear`;
/// the calling service persists the full sequence after each mutation.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Vec<Entry>,
}

impl Journal {
    pub fn new(entries: Vec<Entry>) -> Self {
        Journal { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Mutable view for the analyzer, which writes scores back in place.
    pub fn entries_mut(&mut self) -> &mut [Entry] {
        &mut self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn add(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Remove the entry at `index`. Out of range is a no-op returning None.
    pub fn delete(&mut self, index: usize) -> Option<Entry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Remove all entries, returning how many were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    /// All entries recorded on a specific date, in insertion order.
    pub fn entries_on(&self, date: &str) -> Vec<&Entry> {
        self.entries.iter().filter(|e| e.date == date).collect()
    }
}
