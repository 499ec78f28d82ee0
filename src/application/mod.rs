//! Application layer - Use cases and orchestration

pub mod add_entry;
pub mod analyze;
pub mod delete_entry;
pub mod list_entries;

pub use add_entry::AddEntryService;
pub use analyze::{AnalysisOutcome, AnalyzeService, AnalyzerOptions};
pub use delete_entry::DeleteEntryService;
pub use list_entries::ListEntriesService;
