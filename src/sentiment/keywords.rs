//! Forum keyword weights for sentiment scoring.
//!
//! A hand-tuned table mapping Porter stems to polarity weights. These
//! capture domain cues a general valence lexicon misses: on a support
//! forum "solved" is a strong positive signal and "stuck" a strong
//! negative one, while interrogatives are close to neutral.

use ahash::AHashMap;

use crate::error::{ParlanceError, Result};

/// Stem-to-weight table used by the sentiment scorer.
///
/// Keys are Porter stems, so callers stem tokens before lookup. A weight
/// of zero still marks the stem as a recognized keyword, which feeds the
/// match count without moving the score.
#[derive(Debug, Clone)]
pub struct KeywordWeights {
    weights: AHashMap<String, f64>,
}

impl KeywordWeights {
    /// Create an empty table.
    pub fn empty() -> Self {
        KeywordWeights {
            weights: AHashMap::new(),
        }
    }

    /// Create a table from `(stem, weight)` pairs.
    pub fn from_entries<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut table = Self::empty();
        for (stem, weight) in pairs {
            table.insert(stem, weight);
        }
        table
    }

    /// Create the builtin forum keyword table.
    pub fn builtin() -> Self {
        let entries: Vec<(&str, f64)> = vec![
            // Resolution and gratitude stems.
            ("solv", 2.5),
            ("fix", 2.0),
            ("work", 1.5),
            ("help", 1.5),
            ("thank", 2.0),
            ("great", 2.0),
            ("excel", 2.0),
            ("awesom", 2.0),
            ("perfect", 2.0),
            ("appreci", 1.5),
            ("us", 1.5),
            ("brilliant", 2.0),
            ("recommend", 1.5),
            ("answer", 1.5),
            ("resolv", 2.0),
            // Failure stems.
            ("problem", -1.5),
            ("issu", -1.5),
            ("bug", -2.0),
            ("error", -2.0),
            ("fail", -2.5),
            ("broken", -2.0),
            ("stuck", -2.0),
            ("confus", -1.5),
            ("unclear", -1.5),
            ("difficult", -1.5),
            ("troubl", -1.5),
            ("crash", -2.0),
            ("wrong", -1.5),
            ("bad", -1.5),
            ("poor", -1.5),
            // Interrogatives carry little polarity on their own.
            ("how", -0.3),
            ("what", 0.0),
            ("when", 0.0),
            ("where", 0.0),
            ("why", -0.2),
            ("question", 0.0),
        ];

        Self::from_entries(entries)
    }

    /// Load a keyword table from a JSON file.
    ///
    /// The JSON file should contain an object mapping each stem to its
    /// weight.
    ///
    /// Example format:
    /// ```json
    /// {
    ///   "solv": 2.5,
    ///   "fail": -2.5
    /// }
    /// ```
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ParlanceError::lexicon(format!("Failed to read keyword file '{path}': {e}"))
        })?;

        let raw: AHashMap<String, f64> = serde_json::from_str(&content).map_err(|e| {
            ParlanceError::lexicon(format!("Failed to parse keyword JSON from '{path}': {e}"))
        })?;

        Ok(Self::from_entries(raw))
    }

    /// Insert a stem with its weight, replacing any existing entry.
    pub fn insert<S: Into<String>>(&mut self, stem: S, weight: f64) {
        let stem = stem.into().trim().to_lowercase();
        if stem.is_empty() {
            return;
        }
        self.weights.insert(stem, weight);
    }

    /// Look up the weight for a stem.
    pub fn weight(&self, stem: &str) -> Option<f64> {
        self.weights.get(stem).copied()
    }

    /// Get the number of stems in the table.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl Default for KeywordWeights {
    fn default() -> Self {
        Self::builtin()
    }
}
