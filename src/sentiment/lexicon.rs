//! Valence lexicon for lexical sentiment scoring.
//!
//! An AFINN-style table of surface forms with integer-like valences in
//! `[-5, 5]`, tuned for the vocabulary of support-forum posts. Lookup
//! falls back from the exact form to the Porter stem, so `solving` picks
//! up the valence of `solved` without listing every inflection.

use ahash::AHashMap;

use crate::analysis::{PorterStemmer, Stemmer};
use crate::error::{ParlanceError, Result};

/// Valence bounds for lexicon entries.
const MIN_VALENCE: f64 = -5.0;
const MAX_VALENCE: f64 = 5.0;

/// Word valence table with stem-level fallback.
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    valences: AHashMap<String, f64>,
    stem_valences: AHashMap<String, f64>,
    stemmer: PorterStemmer,
}

impl SentimentLexicon {
    /// Create an empty lexicon.
    pub fn empty() -> Self {
        SentimentLexicon {
            valences: AHashMap::new(),
            stem_valences: AHashMap::new(),
            stemmer: PorterStemmer,
        }
    }

    /// Create a lexicon from `(word, valence)` pairs.
    pub fn from_entries<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut lexicon = Self::empty();
        for (word, valence) in pairs {
            lexicon.insert(word, valence);
        }
        lexicon
    }

    /// Create the builtin lexicon.
    pub fn builtin() -> Self {
        let entries: Vec<(&str, f64)> = vec![
            // Gratitude, praise, and resolution vocabulary.
            ("amazing", 4.0),
            ("appreciate", 2.0),
            ("appreciated", 2.0),
            ("awesome", 4.0),
            ("best", 3.0),
            ("better", 2.0),
            ("brilliant", 4.0),
            ("clear", 1.0),
            ("cool", 1.0),
            ("easy", 1.0),
            ("excellent", 3.0),
            ("fantastic", 4.0),
            ("fine", 2.0),
            ("fixed", 2.0),
            ("glad", 3.0),
            ("good", 3.0),
            ("grateful", 3.0),
            ("great", 3.0),
            ("happy", 3.0),
            ("help", 2.0),
            ("helpful", 2.0),
            ("helps", 2.0),
            ("hope", 2.0),
            ("hopefully", 2.0),
            ("important", 2.0),
            ("impressed", 3.0),
            ("interesting", 2.0),
            ("love", 3.0),
            ("nice", 3.0),
            ("perfect", 3.0),
            ("please", 1.0),
            ("pleased", 3.0),
            ("recommend", 2.0),
            ("recommended", 2.0),
            ("resolve", 2.0),
            ("resolved", 2.0),
            ("safe", 1.0),
            ("satisfied", 2.0),
            ("solution", 1.0),
            ("solved", 2.0),
            ("superb", 5.0),
            ("thank", 2.0),
            ("thanks", 2.0),
            ("useful", 2.0),
            ("welcome", 2.0),
            ("wonderful", 4.0),
            ("worked", 2.0),
            ("working", 2.0),
            ("works", 2.0),
            // Failure and frustration vocabulary.
            ("annoying", -2.0),
            ("awful", -3.0),
            ("bad", -3.0),
            ("broken", -1.0),
            ("bug", -2.0),
            ("bugs", -2.0),
            ("confused", -2.0),
            ("confusing", -2.0),
            ("crash", -2.0),
            ("crashed", -2.0),
            ("crashes", -2.0),
            ("difficult", -1.0),
            ("disappointed", -2.0),
            ("disappointing", -2.0),
            ("doubt", -1.0),
            ("error", -2.0),
            ("errors", -2.0),
            ("fail", -2.0),
            ("failed", -2.0),
            ("fails", -2.0),
            ("failure", -2.0),
            ("frustrated", -2.0),
            ("frustrating", -2.0),
            ("hard", -1.0),
            ("hate", -3.0),
            ("horrible", -3.0),
            ("issue", -2.0),
            ("issues", -2.0),
            ("lack", -2.0),
            ("limited", -1.0),
            ("lost", -3.0),
            ("missing", -2.0),
            ("mistake", -2.0),
            ("mistakes", -2.0),
            ("poor", -2.0),
            ("problem", -2.0),
            ("problems", -2.0),
            ("sad", -2.0),
            ("slow", -1.0),
            ("stuck", -2.0),
            ("terrible", -3.0),
            ("trouble", -2.0),
            ("troubles", -2.0),
            ("unclear", -1.0),
            ("unfortunately", -2.0),
            ("useless", -2.0),
            ("worried", -3.0),
            ("worry", -3.0),
            ("worse", -3.0),
            ("worst", -3.0),
            ("wrong", -2.0),
        ];

        Self::from_entries(entries)
    }

    /// Load a lexicon from a JSON file.
    ///
    /// The JSON file should contain an object mapping each word to its
    /// valence.
    ///
    /// Example format:
    /// ```json
    /// {
    ///   "thanks": 2,
    ///   "broken": -1
    /// }
    /// ```
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ParlanceError::lexicon(format!("Failed to read lexicon file '{path}': {e}"))
        })?;

        let raw: AHashMap<String, f64> = serde_json::from_str(&content).map_err(|e| {
            ParlanceError::lexicon(format!("Failed to parse lexicon JSON from '{path}': {e}"))
        })?;

        let mut entries: Vec<(String, f64)> = raw.into_iter().collect();
        // Map order is arbitrary; sort so stem ties resolve the same way
        // on every load.
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(Self::from_entries(entries))
    }

    /// Insert a word with its valence, clamped to `[-5, 5]`.
    ///
    /// The first word to claim a stem keeps the stem-level valence;
    /// later entries with the same stem only affect their exact form.
    pub fn insert<S: Into<String>>(&mut self, word: S, valence: f64) {
        let word = word.into().trim().to_lowercase();
        if word.is_empty() {
            return;
        }
        let valence = valence.clamp(MIN_VALENCE, MAX_VALENCE);
        let stem = self.stemmer.stem(&word);
        self.valences.insert(word, valence);
        self.stem_valences.entry(stem).or_insert(valence);
    }

    /// Look up the valence of a token.
    ///
    /// Tries the exact lowercased form first, then the Porter stem.
    pub fn valence(&self, token: &str) -> Option<f64> {
        let token = token.to_lowercase();
        if let Some(valence) = self.valences.get(&token) {
            return Some(*valence);
        }
        self.stem_valences.get(&self.stemmer.stem(&token)).copied()
    }

    /// Check whether a token has a valence, exact or via stem.
    pub fn contains(&self, token: &str) -> bool {
        self.valence(token).is_some()
    }

    /// Get the number of surface forms in the lexicon.
    pub fn len(&self) -> usize {
        self.valences.len()
    }

    /// Check if the lexicon is empty.
    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_builtin_lexicon() {
        let lexicon = SentimentLexicon::builtin();

        assert!(lexicon.len() >= 90);
        assert_eq!(lexicon.valence("thanks"), Some(2.0));
        assert_eq!(lexicon.valence("solved"), Some(2.0));
        assert_eq!(lexicon.valence("problem"), Some(-2.0));
        assert_eq!(lexicon.valence("superb"), Some(5.0));
        assert_eq!(lexicon.valence("the"), None);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let lexicon = SentimentLexicon::builtin();
        assert_eq!(lexicon.valence("Thanks"), Some(2.0));
        assert_eq!(lexicon.valence("BROKEN"), Some(-1.0));
    }

    #[test]
    fn test_stem_fallback() {
        let lexicon = SentimentLexicon::builtin();

        // "solving" is not a surface form but shares the stem of "solved".
        assert_eq!(lexicon.valence("solving"), Some(2.0));
        assert!(lexicon.contains("crashing"));
        assert!(!lexicon.contains("table"));
    }

    #[test]
    fn test_insert_clamps() {
        let mut lexicon = SentimentLexicon::empty();
        lexicon.insert("ecstatic", 9.0);
        lexicon.insert("abysmal", -7.5);

        assert_eq!(lexicon.valence("ecstatic"), Some(5.0));
        assert_eq!(lexicon.valence("abysmal"), Some(-5.0));
    }

    #[test]
    fn test_first_entry_keeps_stem() {
        let mut lexicon = SentimentLexicon::empty();
        lexicon.insert("pleased", 3.0);
        lexicon.insert("pleasing", 1.0);

        assert_eq!(lexicon.valence("pleased"), Some(3.0));
        assert_eq!(lexicon.valence("pleasing"), Some(1.0));
        // Unlisted inflection resolves through the first claimant's stem.
        assert_eq!(lexicon.valence("pleases"), Some(3.0));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"stellar": 4, "dismal": -3}}"#).unwrap();

        let lexicon = SentimentLexicon::load_from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.valence("stellar"), Some(4.0));
        assert_eq!(lexicon.valence("dismal"), Some(-3.0));
    }
}
