//! Vocabulary store and approximate matching for spelling correction.
//!
//! The vocabulary is a fixed list of domain words kept in insertion order.
//! Approximate matching retrieves candidates by character n-gram cosine
//! similarity (gram size 3, then 2) and re-scores the retrieved candidates
//! by normalized edit-distance ratio, so exact matches score 1.0 and the
//! score decreases with edit distance.
//!
//! # Examples
//!
//! ```
//! use parlance::spelling::Vocabulary;
//!
//! let vocabulary = Vocabulary::builtin();
//!
//! let (word, score) = vocabulary.nearest_match("rulez").unwrap();
//! assert_eq!(word, "rules");
//! assert!(score > 0.7);
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;

use crate::error::Result;
use crate::spelling::levenshtein::levenshtein_ratio;

/// Gram sizes consulted during retrieval, widest first.
const GRAM_SIZES: [usize; 2] = [3, 2];

/// How many cosine candidates are kept for re-scoring.
const MAX_CANDIDATES: usize = 50;

/// Matches scoring below this ratio are discarded.
const MIN_MATCH_SCORE: f64 = 0.33;

/// An inverted index from grams of one size to the words containing them.
#[derive(Debug, Clone)]
struct GramIndex {
    gram_size: usize,
    /// gram -> [(word index, occurrences of the gram in that word)]
    postings: AHashMap<String, Vec<(usize, u32)>>,
    /// Per-word vector norm over this index's gram counts.
    norms: Vec<f64>,
}

impl GramIndex {
    fn new(gram_size: usize) -> Self {
        GramIndex {
            gram_size,
            postings: AHashMap::new(),
            norms: Vec::new(),
        }
    }
}

/// A fixed word list with approximate matching.
///
/// Words keep their insertion order; ties anywhere in matching resolve to
/// the earlier entry, so iteration order is part of the contract.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Stored forms, in insertion order.
    words: Vec<String>,
    /// Normalized forms, parallel to `words`.
    normalized: Vec<String>,
    /// Normalized form -> index of the first insertion.
    exact: AHashMap<String, usize>,
    indexes: Vec<GramIndex>,
}

impl Vocabulary {
    /// Create an empty vocabulary.
    pub fn empty() -> Self {
        Vocabulary {
            words: Vec::new(),
            normalized: Vec::new(),
            exact: AHashMap::new(),
            indexes: GRAM_SIZES.iter().map(|&size| GramIndex::new(size)).collect(),
        }
    }

    /// Create a vocabulary from the given words, keeping their order.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocabulary = Vocabulary::empty();
        for word in words {
            vocabulary.add(word);
        }
        vocabulary
    }

    /// The builtin forum vocabulary.
    ///
    /// Core forum terms, the synonym fan-outs for the rule, classroom,
    /// hostel, and society clusters, and common campus words.
    pub fn builtin() -> Self {
        Vocabulary::new([
            // Core forum terms
            "rules",
            "classroom",
            "hostel",
            "society",
            "comment",
            "post",
            "question",
            "answer",
            "problem",
            "solution",
            "help",
            "error",
            "issue",
            "fixed",
            "solved",
            "working",
            // Rule synonyms
            "regulations",
            "directives",
            "guidelines",
            "policies",
            "standards",
            "principles",
            "laws",
            "norms",
            "code",
            "requirements",
            "bylaws",
            "ordinances",
            "decree",
            "statute",
            "mandate",
            "protocol",
            // Classroom synonyms
            "class",
            "room",
            "lecture",
            "hall",
            "course",
            "lectureroom",
            "auditorium",
            "seminar",
            "tutorial",
            "workshop",
            // Hostel synonyms
            "dormitory",
            "dorm",
            "residence",
            "accommodation",
            "lodging",
            "quarters",
            "housing",
            "residency",
            "dwelling",
            "lodge",
            // Society synonyms
            "community",
            "association",
            "organization",
            "group",
            "club",
            "collective",
            "fellowship",
            "league",
            "union",
            "guild",
            // Campus vocabulary
            "assignment",
            "homework",
            "exam",
            "test",
            "grade",
            "professor",
            "teacher",
            "student",
            "library",
            "cafeteria",
            "wifi",
            "internet",
            "parking",
            "facility",
            "campus",
            "university",
            "college",
            "school",
            "schedule",
            "timetable",
            "syllabus",
            "curriculum",
            "degree",
            "diploma",
            "certificate",
            "transcript",
            "enrollment",
            "registration",
            "admission",
            "scholarship",
            "tuition",
            "fees",
        ])
    }

    /// Load a vocabulary from a text file with one word per line.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut vocabulary = Vocabulary::empty();

        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            vocabulary.add(word);
        }

        Ok(vocabulary)
    }

    /// Add a word, returning false if its normalized form is already
    /// present (or normalizes to nothing).
    pub fn add<S: Into<String>>(&mut self, word: S) -> bool {
        let word = word.into();
        let normalized = normalize(&word);
        if normalized.is_empty() || self.exact.contains_key(&normalized) {
            return false;
        }

        let index = self.words.len();
        for gram_index in &mut self.indexes {
            let counts = gram_counts(&normalized, gram_index.gram_size);
            let norm = counts
                .values()
                .map(|&c| f64::from(c) * f64::from(c))
                .sum::<f64>()
                .sqrt();
            for (gram, count) in counts {
                gram_index.postings.entry(gram).or_default().push((index, count));
            }
            gram_index.norms.push(norm);
        }

        self.exact.insert(normalized.clone(), index);
        self.normalized.push(normalized);
        self.words.push(word);
        true
    }

    /// Find the closest vocabulary word with its similarity score.
    ///
    /// Exact normalized matches short-circuit at 1.0. Otherwise candidates
    /// are retrieved per gram size, widest first; once a gram size yields
    /// candidates, narrower sizes are not consulted even if every candidate
    /// falls below the score floor.
    pub fn nearest_match(&self, word: &str) -> Option<(&str, f64)> {
        let normalized = normalize(word);
        if let Some(&index) = self.exact.get(&normalized) {
            return Some((self.words[index].as_str(), 1.0));
        }

        for gram_index in &self.indexes {
            let candidates = self.cosine_candidates(&normalized, gram_index);
            if candidates.is_empty() {
                continue;
            }

            // Re-score the retrieved candidates by edit-distance ratio.
            // Stable sort keeps cosine order for equal ratios.
            let mut scored: Vec<(usize, f64)> = candidates
                .into_iter()
                .take(MAX_CANDIDATES)
                .map(|(index, _)| (index, levenshtein_ratio(&self.normalized[index], &normalized)))
                .collect();
            scored.sort_by(|a, b| b.1.total_cmp(&a.1));

            return scored
                .first()
                .filter(|(_, score)| *score >= MIN_MATCH_SCORE)
                .map(|&(index, score)| (self.words[index].as_str(), score));
        }

        None
    }

    /// Retrieve candidate words sharing grams with the query, with cosine
    /// similarity, best first. Ties resolve to the earlier word.
    fn cosine_candidates(&self, normalized: &str, gram_index: &GramIndex) -> Vec<(usize, f64)> {
        let counts = gram_counts(normalized, gram_index.gram_size);
        let query_norm = counts
            .values()
            .map(|&c| f64::from(c) * f64::from(c))
            .sum::<f64>()
            .sqrt();

        let mut dot_products: AHashMap<usize, f64> = AHashMap::new();
        for (gram, count) in &counts {
            if let Some(postings) = gram_index.postings.get(gram) {
                for &(index, other_count) in postings {
                    *dot_products.entry(index).or_insert(0.0) +=
                        f64::from(*count) * f64::from(other_count);
                }
            }
        }

        let mut candidates: Vec<(usize, f64)> = dot_products
            .into_iter()
            .map(|(index, dot)| (index, dot / (query_norm * gram_index.norms[index])))
            .collect();
        candidates.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        candidates
    }

    /// Words starting with the given prefix, case-insensitive, in
    /// vocabulary order, capped at `limit`.
    pub fn completions(&self, prefix: &str, limit: usize) -> Vec<&str> {
        let prefix = prefix.to_lowercase();
        self.words
            .iter()
            .filter(|word| word.to_lowercase().starts_with(&prefix))
            .take(limit)
            .map(|word| word.as_str())
            .collect()
    }

    /// Check whether the word's normalized form is in the vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.exact.contains_key(&normalize(word))
    }

    /// Iterate the stored words in insertion order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|word| word.as_str())
    }

    /// Number of unique words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Lower-case and keep only `[a-z0-9, ]`.
fn normalize(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .filter(|&c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ',' || c == ' ')
        .collect()
}

/// Count grams of the given size over the padded word.
///
/// The word is wrapped in `-` markers and padded out to a full window, so
/// every word produces at least one gram.
fn gram_counts(normalized: &str, gram_size: usize) -> AHashMap<String, u32> {
    let mut padded: Vec<char> = Vec::with_capacity(normalized.len() + 2);
    padded.push('-');
    padded.extend(normalized.chars());
    padded.push('-');
    while padded.len() < gram_size {
        padded.push('-');
    }

    let mut counts = AHashMap::new();
    for window in padded.windows(gram_size) {
        *counts.entry(window.iter().collect::<String>()).or_insert(0) += 1;
    }
    counts
}
