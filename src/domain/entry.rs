//! Dream entry record

use crate::error::{DreamlogError, Result};
use serde::Serialize;
use serde_json::Value;

/// A single dream entry: free text, an ISO date, and an optional mood score.
///
/// The score is absent until the analyzer has run; it is written back in
/// place and persisted so it survives a restart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub text: String,
    pub date: String,
    pub mood_score: Option<f64>,
}

impl Entry {
    /// Create a validated entry. Text is trimmed; empty text or date is
    /// rejected. Date format is the caller's responsibility (the CLI
    /// validates YYYY-MM-DD before constructing an entry).
    pub fn new(text: &str, date: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DreamlogError::Validation(
                "entry text must be a non-empty string".to_string(),
            ));
        }
        if date.trim().is_empty() {
            return Err(DreamlogError::Validation(
                "entry date must be a non-empty string".to_string(),
            ));
        }

        Ok(Entry {
            text: trimmed.to_string(),
            date: date.to_string(),
            mood_score: None,
        })
    }

    /// Serialize to a JSON record (`mood_score` serializes as null when absent).
    pub fn to_record(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Deserialize from a JSON record.
    ///
    /// Missing `text` or `date` keys fail with `MissingField`; wrong types or
    /// empty values fail with `Validation`. `mood_score` is optional and may
    /// be null.
    pub fn from_record(record: &Value) -> Result<Self> {
        let obj = record.as_object().ok_or_else(|| {
            DreamlogError::Validation("entry record must be an object".to_string())
        })?;

        let text = obj
            .get("text")
            .ok_or_else(|| DreamlogError::MissingField("text".to_string()))?
            .as_str()
            .ok_or_else(|| {
                DreamlogError::Validation("entry text must be a string".to_string())
            })?;

        let date = obj
            .get("date")
            .ok_or_else(|| DreamlogError::MissingField("date".to_string()))?
            .as_str()
            .ok_or_else(|| {
                DreamlogError::Validation("entry date must be a string".to_string())
            })?;

        let mood_score = match obj.get("mood_score") {
            None | Some(Value::Null) => None,
            Some(value) => Some(value.as_f64().ok_or_else(|| {
                DreamlogError::Validation("mood_score must be a number".to_string())
            })?),
        };

        let mut entry = Entry::new(text, date)?;
        entry.mood_score = mood_score;
        Ok(entry)
    }

    /// First `max_chars` characters of the text, with `...` appended when
    /// truncated. Safe on multi-byte text.
    pub fn preview(&self, max_chars: usize) -> String {
        if self.text.chars().count() <= max_chars {
            self.text.clone()
        } else {
            let head: String = self.text.chars().take(max_chars).collect();
            format!("{}...", head)
        }
    }
}
