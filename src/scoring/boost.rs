//! Intent-aware score boosting.
//!
//! Adjusts a document's precomputed text score using the query intent,
//! the document's sentiment summary, and its upvotes. Solution posts get
//! the largest bonus when the querier is looking for answers or fixes.

use crate::query::{Intent, QueryAnalysis};
use crate::scoring::relevance::{CandidateDocument, DocumentSentiment};
use crate::sentiment::{Category, Sentiment};

/// Bonus for a solution document under `FindAnswers`.
const ANSWER_SOLUTION_BONUS: f64 = 5.0;
/// Bonus for a solution document under `FindSolutions`.
const SOLUTION_BONUS: f64 = 4.0;
/// Bonus for a positive document under `FindAnswers`.
const ANSWER_POSITIVE_BONUS: f64 = 3.0;
/// Upvotes required before the popularity bonus applies.
const UPVOTE_BONUS_THRESHOLD: u32 = 5;
/// Ceiling on the popularity bonus.
const MAX_UPVOTE_BONUS: f64 = 10.0;

/// Boost a document's text score by query intent.
///
/// Starts from the precomputed `text_score` (zero when absent). Without
/// a sentiment summary the score is returned unchanged. The category and
/// sentiment bonuses are mutually exclusive, checked in priority order;
/// the popularity bonus stacks on top of whichever applied.
pub fn boost_by_intent(
    document: &CandidateDocument,
    analysis: &QueryAnalysis,
    sentiment: Option<&DocumentSentiment>,
) -> f64 {
    let mut score = document.text_score.unwrap_or(0.0);
    let sentiment = match sentiment {
        Some(sentiment) => sentiment,
        None => return score,
    };

    if analysis.intent == Intent::FindAnswers && sentiment.category == Category::Solution {
        score += ANSWER_SOLUTION_BONUS;
    } else if analysis.intent == Intent::FindSolutions && sentiment.category == Category::Solution {
        score += SOLUTION_BONUS;
    } else if analysis.intent == Intent::FindAnswers && sentiment.sentiment == Sentiment::Positive {
        score += ANSWER_POSITIVE_BONUS;
    }

    if document.upvotes > UPVOTE_BONUS_THRESHOLD {
        score += (f64::from(document.upvotes) * 0.5).min(MAX_UPVOTE_BONUS);
    }
    score
}
