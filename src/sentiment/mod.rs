//! Sentiment scoring for Parlance.
//!
//! This module scores forum text for sentiment: an AFINN-style valence
//! lexicon, a hand-tuned table of forum keyword stems, and the analyzer
//! that blends both into a classified, confidence-weighted result.

pub mod analyzer;
pub mod keywords;
pub mod lexicon;

// Re-export commonly used types
pub use analyzer::{Category, DetectedKeyword, Sentiment, SentimentAnalyzer, SentimentResult};
pub use keywords::KeywordWeights;
pub use lexicon::SentimentLexicon;
