//! Analyze use case - the mood analysis pipeline
//!
//! Scores every entry, writes the scores back onto the entries, persists
//! them, and aggregates the statistics the report renders: average mood,
//! top themes, and the five-bucket mood distribution.

use crate::domain::mood::round3;
use crate::domain::{Journal, MoodMatrix, Statistics, ThemeExtractor};
use crate::error::Result;
use crate::infrastructure::{JournalStore, SentimentScorer};
use tracing::warn;

/// Tunables for the analysis pass. Explicit configuration rather than
/// module-level constants so the pipeline is testable in isolation.
pub struct AnalyzerOptions {
    pub theme_extractor: ThemeExtractor,
    pub theme_limit: usize,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        AnalyzerOptions {
            theme_extractor: ThemeExtractor::default(),
            theme_limit: 10,
        }
    }
}

/// Outcome of an analysis request.
///
/// The two non-success cases are structured results, not errors: an empty
/// journal and a missing sentiment backend both surface as user-facing
/// messages rather than failures.
#[derive(Debug)]
pub enum AnalysisOutcome {
    Empty,
    Unavailable,
    Report(Statistics),
}

/// Service running the full analysis pass
pub struct AnalyzeService {
    store: JournalStore,
    scorer: Option<Box<dyn SentimentScorer>>,
    options: AnalyzerOptions,
}

impl AnalyzeService {
    pub fn new(store: JournalStore, scorer: Option<Box<dyn SentimentScorer>>) -> Self {
        AnalyzeService {
            store,
            scorer,
            options: AnalyzerOptions::default(),
        }
    }

    pub fn with_options(
        store: JournalStore,
        scorer: Option<Box<dyn SentimentScorer>>,
        options: AnalyzerOptions,
    ) -> Self {
        AnalyzeService {
            store,
            scorer,
            options,
        }
    }

    /// Run the pipeline over the whole journal.
    ///
    /// Scores are written back onto the entries in place and persisted so
    /// they survive a restart. Re-running recomputes from scratch and
    /// overwrites previous scores. A failed persist keeps the in-memory
    /// scores and is logged, not propagated.
    pub fn execute(&self, journal: &mut Journal) -> Result<AnalysisOutcome> {
        if journal.is_empty() {
            return Ok(AnalysisOutcome::Empty);
        }

        let Some(scorer) = &self.scorer else {
            return Ok(AnalysisOutcome::Unavailable);
        };

        let mut scores = Vec::with_capacity(journal.len());
        for entry in journal.entries_mut() {
            let score = scorer.score(&entry.text);
            entry.mood_score = Some(score);
            scores.push(score);
        }

        if let Err(e) = self.store.save(journal) {
            warn!(error = %e, "could not persist mood scores, keeping in-memory state");
        }

        let top_themes = self.options.theme_extractor.top_themes(
            journal.entries().iter().map(|e| e.text.as_str()),
            self.options.theme_limit,
        );

        let average_mood = round3(scores.iter().sum::<f64>() / scores.len() as f64);

        Ok(AnalysisOutcome::Report(Statistics {
            total_count: journal.len(),
            average_mood,
            top_themes,
            mood_matrix: MoodMatrix::from_scores(&scores),
        }))
    }
}
