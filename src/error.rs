//! Error types for dreamlog

use thiserror::Error;

/// Main error type for the dreamlog application
#[derive(Debug, Error)]
pub enum DreamlogError {
    #[error("Invalid entry: {0}")]
    Validation(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Sentiment analyzer not available")]
    ScorerUnavailable,
}

impl DreamlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DreamlogError::Validation(_) | DreamlogError::MissingField(_) => 2,
            DreamlogError::Config(_) => 3,
            DreamlogError::ScorerUnavailable => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DreamlogError::Validation(msg) => {
                format!(
                    "Invalid entry: {}\n\n\
                    Suggestions:\n\
                    • Entry text must not be empty\n\
                    • Quote multi-word text: dreamlog add \"I was flying\"",
                    msg
                )
            }
            DreamlogError::Config(msg) => {
                if msg.contains("date") {
                    format!(
                        "{}\n\n\
                        Expected format: YYYY-MM-DD\n\
                        Example: dreamlog add \"...\" --date 2025-01-17",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            DreamlogError::ScorerUnavailable => {
                "Sentiment analyzer not available.\n\n\
                Suggestions:\n\
                • Re-run 'dreamlog analyze' once the sentiment backend is installed"
                    .to_string()
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DreamlogError
pub type Result<T> = std::result::Result<T, DreamlogError>;
