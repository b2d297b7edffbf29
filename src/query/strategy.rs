//! Sorting strategies derived from query intent.
//!
//! A `SortingStrategy` tells the search handler how to order and filter
//! results once documents are scored. The mapping from intent is a fixed
//! table with no runtime state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::query::intent::Intent;
use crate::sentiment::Sentiment;

/// Primary sort order for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    Relevance,
    Popular,
}

impl SortBy {
    /// Get the sort order as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Relevance => "relevance",
            SortBy::Popular => "popular",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a search handler should order and filter results for an intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortingStrategy {
    /// Sentiments to prefer when ranking, if any.
    pub preferred_sentiments: Option<Vec<Sentiment>>,
    /// Primary sort order.
    pub sort_by: SortBy,
    /// Whether solved documents should rank higher.
    pub boost_solved: bool,
    /// Whether heavily upvoted documents should rank higher.
    pub boost_high_upvotes: bool,
    /// Minimum upvotes for a document to qualify.
    pub min_upvotes: u32,
}

impl SortingStrategy {
    /// Get the strategy for an intent.
    pub fn for_intent(intent: Intent) -> Self {
        match intent {
            Intent::FindAnswers => SortingStrategy {
                preferred_sentiments: Some(vec![Sentiment::Positive, Sentiment::SlightlyPositive]),
                sort_by: SortBy::Relevance,
                boost_solved: true,
                boost_high_upvotes: true,
                min_upvotes: 1,
            },
            Intent::FindSolutions => SortingStrategy {
                preferred_sentiments: Some(vec![Sentiment::Positive, Sentiment::Neutral]),
                sort_by: SortBy::Relevance,
                boost_solved: true,
                boost_high_upvotes: true,
                min_upvotes: 0,
            },
            Intent::FindSimilarSolved => SortingStrategy {
                preferred_sentiments: Some(vec![Sentiment::Positive]),
                sort_by: SortBy::Popular,
                boost_solved: true,
                boost_high_upvotes: true,
                min_upvotes: 2,
            },
            Intent::GeneralSearch => SortingStrategy {
                preferred_sentiments: None,
                sort_by: SortBy::Relevance,
                boost_solved: false,
                boost_high_upvotes: false,
                min_upvotes: 0,
            },
        }
    }
}
