//! Relevance scoring for Parlance.
//!
//! This module scores candidate documents against an expanded query:
//! field-weighted term matching over title, content, and tags, plus an
//! intent-aware boost that folds in document sentiment and upvotes.

pub mod boost;
pub mod relevance;

// Re-export commonly used types
pub use boost::boost_by_intent;
pub use relevance::{CandidateDocument, DocumentSentiment, TermMatcher};
