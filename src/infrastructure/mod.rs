//! Infrastructure layer - flat-file storage and the sentiment backend

pub mod scorer;
pub mod store;

pub use scorer::{LexiconScorer, SentimentScorer};
pub use store::JournalStore;
