//! Theme extraction - keyword frequency over entry text

use std::collections::{HashMap, HashSet};

/// Common English function words excluded from theme counting.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "up", "about", "into", "through", "during", "before", "after", "above", "below",
    "between", "under", "again", "further", "then", "once", "here", "there", "when", "where",
    "why", "how", "all", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will",
    "just", "don", "should", "now", "was", "were", "been", "being", "have", "has", "had",
    "having", "do", "does", "did", "doing", "am", "is", "are", "be", "as", "i", "me", "my",
    "myself", "we", "our", "ours", "ourselves", "you", "your", "yours", "yourself", "yourselves",
    "he", "him", "his", "himself", "she", "her", "hers", "herself", "it", "its", "itself",
    "they", "them", "their", "theirs", "themselves", "what", "which", "who", "whom", "this",
    "that", "these", "those", "if", "because", "while", "out", "off", "over", "down",
];

/// Punctuation stripped from the edges of surviving tokens.
const EDGE_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '(', ')', '[', ']', '{', '}', '"', '\'',
];

/// Extracts recurring content words from entry text.
///
/// The stop-word set is injected so the extractor stays deterministic and
/// testable in isolation.
#[derive(Debug, Clone)]
pub struct ThemeExtractor {
    stop_words: HashSet<String>,
}

impl Default for ThemeExtractor {
    fn default() -> Self {
        ThemeExtractor::new(DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()))
    }
}

impl ThemeExtractor {
    pub fn new(stop_words: impl IntoIterator<Item = String>) -> Self {
        ThemeExtractor {
            stop_words: stop_words.into_iter().collect(),
        }
    }

    /// Token frequencies over the concatenation of `texts`, ordered by first
    /// appearance.
    ///
    /// A token survives if it is fully alphabetic, longer than two
    /// characters, and not a stop word; edge punctuation is then stripped.
    pub fn counts<'a>(&self, texts: impl IntoIterator<Item = &'a str>) -> Vec<(String, usize)> {
        let mut ordered: Vec<(String, usize)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for text in texts {
            for word in text.to_lowercase().split_whitespace() {
                if !word.chars().all(|c| c.is_alphabetic())
                    || word.chars().count() <= 2
                    || self.stop_words.contains(word)
                {
                    continue;
                }
                let token = word.trim_matches(|c| EDGE_PUNCTUATION.contains(&c));
                if token.is_empty() {
                    continue;
                }

                match index.get(token) {
                    Some(&i) => ordered[i].1 += 1,
                    None => {
                        index.insert(token.to_string(), ordered.len());
                        ordered.push((token.to_string(), 1));
                    }
                }
            }
        }

        ordered
    }

    /// The `limit` most frequent themes, ties broken by first appearance.
    pub fn top_themes<'a>(
        &self,
        texts: impl IntoIterator<Item = &'a str>,
        limit: usize,
    ) -> Vec<String> {
        let mut counts = self.counts(texts);
        // Stable sort keeps first-appearance order within equal counts.
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.into_iter().take(limit).map(|(word, _)| word).collect()
    }
}
