//! Domain layer - entries, the journal aggregate, and analysis primitives

pub mod entry;
pub mod journal;
pub mod mood;
pub mod themes;

pub use entry::Entry;
pub use journal::Journal;
pub use mood::{BucketStats, MoodBucket, MoodMatrix, Statistics};
pub use themes::ThemeExtractor;
