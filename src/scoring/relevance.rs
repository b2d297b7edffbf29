//! Field-weighted relevance scoring of documents against expanded terms.
//!
//! Every expanded term is compiled once into an escaped literal pattern,
//! then counted against a document's title, content, and tags with fixed
//! field weights. Upvotes add a popularity component and comments are
//! damped relative to posts.
//!
//! # Examples
//!
//! ```
//! use parlance::scoring::{CandidateDocument, TermMatcher};
//!
//! let matcher = TermMatcher::new(&["wifi".to_string(), "hostel".to_string()]).unwrap();
//! let document = CandidateDocument::new("wifi issue", "wifi is broken in hostel")
//!     .with_tags(vec!["network".to_string()])
//!     .with_upvotes(6);
//!
//! // 10 (title) + 3 + 3 (content) + 6 * 0.5 (upvotes)
//! assert_eq!(matcher.score_document(&document, false), 19.0);
//! ```

use rayon::prelude::*;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ParlanceError, Result};
use crate::sentiment::{Category, Sentiment};

/// Weight of a term occurrence in the title.
const TITLE_WEIGHT: f64 = 10.0;
/// Weight of a term occurrence in the content.
const CONTENT_WEIGHT: f64 = 3.0;
/// Weight of a term occurrence in the joined tags.
const TAG_WEIGHT: f64 = 5.0;
/// Popularity contribution per upvote.
const UPVOTE_WEIGHT: f64 = 0.5;
/// Damping factor applied to comment scores.
const COMMENT_FACTOR: f64 = 0.7;

/// Precomputed sentiment summary attached to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSentiment {
    /// Content category of the document.
    pub category: Category,
    /// Sentiment label of the document.
    pub sentiment: Sentiment,
}

impl DocumentSentiment {
    /// Create a sentiment summary.
    pub fn new(category: Category, sentiment: Sentiment) -> Self {
        DocumentSentiment {
            category,
            sentiment,
        }
    }
}

/// Read-only view of a post or comment to score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateDocument {
    /// Document title. Empty for documents without one.
    pub title: String,
    /// Document body.
    pub content: String,
    /// Tags attached to the document.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Upvote count.
    #[serde(default)]
    pub upvotes: u32,
    /// Precomputed text score, when a previous stage supplied one.
    #[serde(default)]
    pub text_score: Option<f64>,
    /// Precomputed sentiment summary, when available.
    #[serde(default)]
    pub sentiment: Option<DocumentSentiment>,
}

impl CandidateDocument {
    /// Create a document with a title and content.
    pub fn new<S: Into<String>>(title: S, content: S) -> Self {
        CandidateDocument {
            title: title.into(),
            content: content.into(),
            tags: Vec::new(),
            upvotes: 0,
            text_score: None,
            sentiment: None,
        }
    }

    /// Set the tags.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the upvote count.
    pub fn with_upvotes(mut self, upvotes: u32) -> Self {
        self.upvotes = upvotes;
        self
    }

    /// Set the precomputed text score.
    pub fn with_text_score(mut self, text_score: f64) -> Self {
        self.text_score = Some(text_score);
        self
    }

    /// Set the sentiment summary.
    pub fn with_sentiment(mut self, sentiment: DocumentSentiment) -> Self {
        self.sentiment = Some(sentiment);
        self
    }
}

/// Compiled matcher for one expanded term set.
///
/// Terms are lowercased and regex-escaped at construction, so
/// user-supplied metacharacters match literally and cannot produce a
/// pattern error at scoring time.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    patterns: Vec<Regex>,
}

impl TermMatcher {
    /// Compile a matcher for the given terms. Empty terms are skipped.
    pub fn new(terms: &[String]) -> Result<Self> {
        let mut patterns = Vec::with_capacity(terms.len());
        for term in terms {
            let lowered = term.to_lowercase();
            if lowered.is_empty() {
                continue;
            }
            let pattern = Regex::new(&regex::escape(&lowered)).map_err(|e| {
                ParlanceError::analysis(format!("Invalid term pattern {lowered:?}: {e}"))
            })?;
            patterns.push(pattern);
        }
        Ok(TermMatcher { patterns })
    }

    /// Get the number of compiled terms.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Check if the matcher has no terms.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Score one document against the term set.
    ///
    /// Counts non-overlapping occurrences of every term in the
    /// lowercased title, content, and joined tags, weighted per field,
    /// then adds the upvote contribution. Comment scores are multiplied
    /// by the damping factor after everything else.
    pub fn score_document(&self, document: &CandidateDocument, is_comment: bool) -> f64 {
        let title = document.title.to_lowercase();
        let content = document.content.to_lowercase();
        let tags = document.tags.join(" ").to_lowercase();

        let mut score = 0.0;
        for pattern in &self.patterns {
            score += pattern.find_iter(&title).count() as f64 * TITLE_WEIGHT;
            score += pattern.find_iter(&content).count() as f64 * CONTENT_WEIGHT;
            score += pattern.find_iter(&tags).count() as f64 * TAG_WEIGHT;
        }
        score += f64::from(document.upvotes) * UPVOTE_WEIGHT;

        if is_comment {
            score *= COMMENT_FACTOR;
        }
        score
    }

    /// Score a batch of documents in parallel.
    ///
    /// Scores come back in input order, one per document.
    pub fn score_documents(&self, documents: &[CandidateDocument], is_comment: bool) -> Vec<f64> {
        documents
            .par_iter()
            .map(|document| self.score_document(document, is_comment))
            .collect()
    }
}
