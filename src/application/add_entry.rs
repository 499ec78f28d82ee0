//! Add entry use case

use crate::domain::Entry;
use crate::error::{DreamlogError, Result};
use crate::infrastructure::JournalStore;
use chrono::{Local, NaiveDate};

/// Service for recording new dream entries
pub struct AddEntryService {
    store: JournalStore,
}

impl AddEntryService {
    pub fn new(store: JournalStore) -> Self {
        AddEntryService { store }
    }

    /// Append a new entry and persist the full journal immediately.
    pub fn execute(&self, text: &str, date: NaiveDate) -> Result<Entry> {
        let entry = Entry::new(text, &date.format("%Y-%m-%d").to_string())?;

        let mut journal = self.store.load()?;
        journal.add(entry.clone());
        self.store.save(&journal)?;

        Ok(entry)
    }
}

/// Parse and validate an entry date. `None` defaults to today; future dates
/// are rejected.
pub fn validate_date(input: Option<&str>) -> Result<NaiveDate> {
    let today = Local::now().date_naive();

    let Some(input) = input else {
        return Ok(today);
    };

    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
        DreamlogError::Config(format!("Invalid date format: '{}'", input))
    })?;

    if date > today {
        return Err(DreamlogError::Config(format!(
            "Entry date cannot be in the future: {}",
            date
        )));
    }

    Ok(date)
}
