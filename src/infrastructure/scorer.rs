//! Sentiment scoring backend

use vader_sentiment::SentimentIntensityAnalyzer;

/// Maps free text to a compound polarity score in [-1.0, 1.0], positive
/// meaning positive sentiment.
///
/// Injected into the analyzer so tests can substitute a stub without the
/// lexicon-backed implementation.
pub trait SentimentScorer {
    fn score(&self, text: &str) -> f64;
}

/// VADER lexicon-based scorer.
pub struct LexiconScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl LexiconScorer {
    pub fn new() -> Self {
        LexiconScorer {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        self.analyzer
            .polarity_scores(text)
            .get("compound")
            .copied()
            .unwrap_or(0.0)
    }
}
