//! dreamlog - Dream journal with mood analysis
//!
//! A command-line dream journal that records dated free-text entries and
//! computes sentiment statistics over the whole journal: average mood,
//! recurring themes, and a five-bucket mood distribution.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DreamlogError;
