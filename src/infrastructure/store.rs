//! Flat-file journal storage
//!
//! The journal is a single JSON array of entry records. Loading tolerates
//! corruption: bad records are skipped, an unparseable file is backed up and
//! replaced with an empty array. Saving goes through a temp file so a crash
//! mid-write never corrupts the previously-good file.

use crate::domain::{Entry, Journal};
use crate::error::Result;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// JSON-array storage for journal entries.
#[derive(Debug, Clone)]
pub struct JournalStore {
    path: PathBuf,
}

impl JournalStore {
    /// Create a store backed by the given file. The path is explicit
    /// configuration; the CLI layer decides the default.
    pub fn new(path: PathBuf) -> Self {
        JournalStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where a corrupted journal file is moved before the store resets it.
    pub fn backup_path(&self) -> PathBuf {
        append_extension(&self.path, "backup")
    }

    fn temp_path(&self) -> PathBuf {
        append_extension(&self.path, "tmp")
    }

    /// Load the journal from disk.
    ///
    /// A missing file yields an empty journal. Records that fail entry
    /// validation are skipped with a warning. A file that is not parseable
    /// as a JSON array is renamed to the backup path and replaced with a
    /// fresh empty array.
    pub fn load(&self) -> Result<Journal> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "no existing journal, starting empty");
            return Ok(Journal::default());
        }

        let contents = fs::read_to_string(&self.path)?;

        let records = match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Array(records)) => records,
            Ok(_) => {
                warn!(path = %self.path.display(), "journal file is not an array, resetting");
                self.backup_and_reset()?;
                return Ok(Journal::default());
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "corrupted journal file, resetting");
                self.backup_and_reset()?;
                return Ok(Journal::default());
            }
        };

        let mut entries = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            match Entry::from_record(record) {
                Ok(entry) => entries.push(entry),
                Err(e) => warn!(index, error = %e, "skipping corrupted entry"),
            }
        }

        Ok(Journal::new(entries))
    }

    /// Persist the full entry sequence atomically: write to a temp path,
    /// then rename into place. On failure the temp file is removed and the
    /// caller keeps its in-memory state.
    pub fn save(&self, journal: &Journal) -> Result<()> {
        let contents = serde_json::to_string_pretty(journal.entries())?;
        let tmp = self.temp_path();

        if let Err(e) = fs::write(&tmp, &contents) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        // `rename` does not overwrite existing files on Windows, so remove
        // the destination first.
        if self.path.exists() {
            if let Err(e) = fs::remove_file(&self.path) {
                let _ = fs::remove_file(&tmp);
                return Err(e.into());
            }
        }

        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        Ok(())
    }

    fn backup_and_reset(&self) -> Result<()> {
        let backup = self.backup_path();
        match fs::rename(&self.path, &backup) {
            Ok(()) => info!(backup = %backup.display(), "corrupted journal backed up"),
            Err(e) => warn!(error = %e, "could not back up corrupted journal"),
        }
        fs::write(&self.path, "[]")?;
        Ok(())
    }
}

fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut name = path.file_name().map(|s| s.to_os_string()).unwrap_or_default();
    name.push(".");
    name.push(ext);
    path.with_file_name(name)
}
