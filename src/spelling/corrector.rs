//! Spelling correction against the domain vocabulary.
//!
//! Correction is a pure function over the vocabulary. A word is corrected
//! by approximate matching first, then by a bounded edit-distance scan in
//! vocabulary order, and falls back to the lower-cased original.
//!
//! # Examples
//!
//! ```
//! use parlance::spelling::SpellingCorrector;
//!
//! let corrector = SpellingCorrector::new();
//!
//! assert_eq!(corrector.correct("rulez"), "rules");
//! assert_eq!(corrector.correct("xyz123"), "xyz123");
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::spelling::levenshtein::levenshtein_distance_threshold;
use crate::spelling::vocabulary::Vocabulary;

/// Configuration for the spelling corrector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectorConfig {
    /// Words shorter than this pass through unchanged.
    pub min_word_len: usize,
    /// Approximate matches must score strictly above this.
    pub min_similarity: f64,
    /// Hard cap on edit distance in the fallback scan.
    pub max_distance: usize,
    /// Edit distance must also stay under `ceil(fraction * word_len)`.
    pub max_distance_fraction: f64,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            min_word_len: 3,
            min_similarity: 0.70,
            max_distance: 2,
            max_distance_fraction: 0.4,
        }
    }
}

/// Result of correcting a whole query string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectedQuery {
    /// Original query.
    pub original: String,
    /// Rebuilt query, present only when at least one word changed.
    pub corrected: Option<String>,
    /// Number of words that changed.
    pub changed: usize,
}

impl CorrectedQuery {
    /// Get the corrected query, or the original if nothing changed.
    pub fn query(&self) -> &str {
        self.corrected.as_deref().unwrap_or(&self.original)
    }

    /// Check whether any word was corrected.
    pub fn is_corrected(&self) -> bool {
        self.corrected.is_some()
    }
}

/// Vocabulary-backed spelling corrector.
#[derive(Debug, Clone)]
pub struct SpellingCorrector {
    vocabulary: Vocabulary,
    config: CorrectorConfig,
}

impl SpellingCorrector {
    /// Create a corrector over the builtin vocabulary with default settings.
    pub fn new() -> Self {
        Self::with_vocabulary(Vocabulary::builtin())
    }

    /// Create a corrector over a custom vocabulary with default settings.
    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        SpellingCorrector {
            vocabulary,
            config: CorrectorConfig::default(),
        }
    }

    /// Create a corrector with a custom vocabulary and configuration.
    pub fn with_config(vocabulary: Vocabulary, config: CorrectorConfig) -> Self {
        SpellingCorrector { vocabulary, config }
    }

    /// Get the underlying vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Correct a single word.
    ///
    /// Rules, in order: words shorter than the minimum pass through
    /// unchanged; an approximate match scoring above the similarity floor
    /// wins; otherwise the closest vocabulary word by edit distance wins if
    /// the distance is within both caps, earlier entries breaking ties;
    /// failing all of those, the lower-cased word comes back unchanged.
    pub fn correct(&self, word: &str) -> String {
        let word_len = word.chars().count();
        if word_len < self.config.min_word_len {
            return word.to_string();
        }

        let lower = word.to_lowercase();

        if let Some((candidate, score)) = self.vocabulary.nearest_match(&lower) {
            if score > self.config.min_similarity {
                if candidate != lower {
                    debug!("spell check: {word:?} -> {candidate:?} (similarity {score:.2})");
                }
                return candidate.to_string();
            }
        }

        let length_cap = (word_len as f64 * self.config.max_distance_fraction).ceil() as usize;
        let mut best = lower.clone();
        let mut best_distance = length_cap;

        for candidate in self.vocabulary.words() {
            if let Some(distance) =
                levenshtein_distance_threshold(&lower, candidate, self.config.max_distance)
            {
                // Strict improvement only, so the first entry wins ties.
                if distance < best_distance {
                    best_distance = distance;
                    best = candidate.to_string();
                }
            }
        }

        if best != lower {
            debug!("spell check: {word:?} -> {best:?} (distance {best_distance})");
        }

        best
    }

    /// Correct every whitespace-separated word of a query.
    ///
    /// Case-only differences do not count as corrections.
    pub fn correct_query(&self, query: &str) -> CorrectedQuery {
        let mut changed = 0;
        let corrected_words: Vec<String> = query
            .split_whitespace()
            .map(|word| {
                let corrected = self.correct(word);
                if !corrected.eq_ignore_ascii_case(word) {
                    changed += 1;
                }
                corrected
            })
            .collect();

        let corrected = if changed > 0 {
            Some(corrected_words.join(" "))
        } else {
            None
        };

        CorrectedQuery {
            original: query.to_string(),
            corrected,
            changed,
        }
    }

    /// Check whether a word is already a vocabulary word.
    pub fn is_correct(&self, word: &str) -> bool {
        self.vocabulary.contains(word)
    }
}

impl Default for SpellingCorrector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corrector() -> SpellingCorrector {
        SpellingCorrector::new()
    }

    #[test]
    fn test_short_words_pass_through() {
        let corrector = corrector();
        assert_eq!(corrector.correct("hi"), "hi");
        assert_eq!(corrector.correct("He"), "He");
        assert_eq!(corrector.correct(""), "");
    }

    #[test]
    fn test_approximate_match_path() {
        let corrector = corrector();
        assert_eq!(corrector.correct("rulez"), "rules");
        assert_eq!(corrector.correct("Rulez"), "rules");
        assert_eq!(corrector.correct("socity"), "society");
    }

    #[test]
    fn test_vocabulary_words_unchanged() {
        let corrector = corrector();
        assert_eq!(corrector.correct("hostel"), "hostel");
        assert_eq!(corrector.correct("wifi"), "wifi");
    }

    #[test]
    fn test_edit_distance_fallback() {
        let corrector = corrector();
        // Similarity 0.67 misses the approximate gate; distance 2 of 3
        // allowed for a six-letter word still corrects it.
        assert_eq!(corrector.correct("hostle"), "hostel");
    }

    #[test]
    fn test_no_match_returns_lowercased() {
        let corrector = corrector();
        assert_eq!(corrector.correct("xyz123"), "xyz123");
        assert_eq!(corrector.correct("Qwerty"), "qwerty");
    }

    #[test]
    fn test_fallback_tie_takes_first_entry() {
        let vocabulary = Vocabulary::new(["abcdef", "abcdgh"]);
        let corrector = SpellingCorrector::with_vocabulary(vocabulary);
        assert_eq!(corrector.correct("abcdxy"), "abcdef");
    }

    #[test]
    fn test_distance_cap_scales_with_length() {
        let corrector = corrector();
        // Four-letter words only get one edit: ceil(0.4 * 4) = 2, strict.
        assert_eq!(corrector.correct("wifi"), "wifi");
        assert_eq!(corrector.correct("wofi"), "wifi");
        assert_eq!(corrector.correct("wxfz"), "wxfz");
    }

    #[test]
    fn test_correct_query_reports_changes() {
        let corrector = corrector();

        let result = corrector.correct_query("hostel rulez");
        assert_eq!(result.query(), "hostel rules");
        assert_eq!(result.changed, 1);
        assert!(result.is_corrected());

        let clean = corrector.correct_query("hostel rules");
        assert_eq!(clean.query(), "hostel rules");
        assert_eq!(clean.changed, 0);
        assert!(!clean.is_corrected());
    }

    #[test]
    fn test_correct_query_ignores_case_only_changes() {
        let corrector = corrector();
        let result = corrector.correct_query("Hostel Rules");
        assert_eq!(result.changed, 0);
        assert!(!result.is_corrected());
    }

    #[test]
    fn test_is_correct() {
        let corrector = corrector();
        assert!(corrector.is_correct("rules"));
        assert!(!corrector.is_correct("rulez"));
    }
}
