//! Spelling correction for Parlance.
//!
//! This module provides typo correction for search queries: a fuzzy-matching
//! vocabulary of forum terms, edit-distance primitives, and a corrector that
//! combines them with a conservative fallback chain.

pub mod corrector;
pub mod levenshtein;
pub mod vocabulary;

// Re-export commonly used types
pub use corrector::{CorrectedQuery, CorrectorConfig, SpellingCorrector};
pub use levenshtein::{levenshtein_distance, levenshtein_distance_threshold, levenshtein_ratio};
pub use vocabulary::Vocabulary;
