//! Query understanding for Parlance.
//!
//! This module classifies what a querier wants: the intent classifier
//! maps a raw query to one of four intents, and the sorting strategy
//! table turns an intent into ordering rules for the search handler.

pub mod intent;
pub mod strategy;

// Re-export commonly used types
pub use intent::{Intent, IntentClassifier, QueryAnalysis, QueryType};
pub use strategy::{SortBy, SortingStrategy};
