//! # Parlance
//!
//! A query understanding and relevance scoring library for forum search.
//!
//! ## Features
//!
//! - Fuzzy spelling correction over a forum vocabulary
//! - Synonym and lexical-database query expansion
//! - Search intent classification with per-intent sorting strategies
//! - Forum-tuned sentiment scoring
//! - Field-weighted document relevance scoring

pub mod analysis;
pub mod engine;
pub mod error;
pub mod query;
pub mod scoring;
pub mod sentiment;
pub mod spelling;
pub mod synonym;

pub mod prelude {
    pub use crate::engine::{QueryEngine, QueryEngineBuilder};
    pub use crate::error::{ParlanceError, Result};
    pub use crate::query::{Intent, QueryAnalysis, QueryType, SortBy, SortingStrategy};
    pub use crate::scoring::{CandidateDocument, DocumentSentiment};
    pub use crate::sentiment::{Category, Sentiment, SentimentResult};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
