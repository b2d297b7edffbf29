//! Query intent classification.
//!
//! Classifies a raw query into one of four intents by pattern-matching
//! its tokens against interrogative, problem, and resolution vocabulary,
//! then folding in the sentiment category. Search handlers use the intent
//! to pick a sorting strategy and boost rules.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use parlance::query::{Intent, IntentClassifier, QueryType};
//! use parlance::sentiment::SentimentAnalyzer;
//! use parlance::spelling::SpellingCorrector;
//!
//! let analyzer = Arc::new(SentimentAnalyzer::new(Arc::new(SpellingCorrector::new())));
//! let classifier = IntentClassifier::new(analyzer);
//!
//! let analysis = classifier.analyze("how do i connect to wifi");
//! assert_eq!(analysis.query_type, QueryType::Question);
//! assert_eq!(analysis.intent, Intent::FindAnswers);
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::sentiment::{Category, SentimentAnalyzer, SentimentResult};

/// Interrogative words, counted only within the first three tokens.
const QUESTION_PATTERNS: [&str; 11] = [
    "how", "what", "when", "where", "why", "who", "which", "can", "could", "would", "should",
];

/// Failure vocabulary, matched anywhere in tokens or raw text.
const PROBLEM_PATTERNS: [&str; 13] = [
    "problem",
    "issue",
    "error",
    "bug",
    "not working",
    "failed",
    "broken",
    "stuck",
    "cant",
    "cannot",
    "doesnt",
    "wont",
    "crash",
];

/// Resolution vocabulary, matched anywhere in tokens or raw text.
const SOLUTION_PATTERNS: [&str; 7] = [
    "solved",
    "solution",
    "fix",
    "resolved",
    "answer",
    "how to fix",
    "how to solve",
];

/// Tokens reported in a `QueryAnalysis`.
const MAX_ANALYSIS_TOKENS: usize = 10;

/// Syntactic shape of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryType {
    Question,
    ProblemReport,
    SeekingSolution,
    General,
}

impl QueryType {
    /// Get the query type as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::Question => "question",
            QueryType::ProblemReport => "problem_report",
            QueryType::SeekingSolution => "seeking_solution",
            QueryType::General => "general",
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the querier is trying to accomplish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    FindAnswers,
    FindSolutions,
    FindSimilarSolved,
    GeneralSearch,
}

impl Intent {
    /// Get the intent as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::FindAnswers => "find_answers",
            Intent::FindSolutions => "find_solutions",
            Intent::FindSimilarSolved => "find_similar_solved",
            Intent::GeneralSearch => "general_search",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Full analysis of one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryAnalysis {
    /// Sentiment of the query text.
    pub sentiment: SentimentResult,
    /// Syntactic shape of the query.
    pub query_type: QueryType,
    /// Derived intent.
    pub intent: Intent,
    /// First ten corrected tokens.
    pub tokens: Vec<String>,
}

/// Classifier combining keyword patterns with sentiment.
pub struct IntentClassifier {
    analyzer: Arc<SentimentAnalyzer>,
}

impl IntentClassifier {
    /// Create a classifier over a shared sentiment analyzer.
    pub fn new(analyzer: Arc<SentimentAnalyzer>) -> Self {
        IntentClassifier { analyzer }
    }

    /// Analyze a query into sentiment, type, and intent.
    pub fn analyze(&self, query: &str) -> QueryAnalysis {
        let sentiment = self.analyzer.analyze(query);
        let tokens = self.analyzer.tokens(query);
        let lowered = query.to_lowercase();

        let query_type = classify_query_type(&tokens, &lowered);
        let intent = determine_intent(query_type, &sentiment);

        let mut tokens = tokens;
        tokens.truncate(MAX_ANALYSIS_TOKENS);

        QueryAnalysis {
            sentiment,
            query_type,
            intent,
            tokens,
        }
    }
}

/// Match tokens and raw text against the pattern groups in priority order.
///
/// Interrogatives only count near the start of the query; a question that
/// mentions "error" later is still a question. Problem and resolution
/// vocabulary match any token, or the raw text as a substring so that
/// multi-word patterns like "not working" are caught.
fn classify_query_type(tokens: &[String], lowered: &str) -> QueryType {
    let head = &tokens[..tokens.len().min(3)];
    if QUESTION_PATTERNS
        .iter()
        .any(|p| head.iter().any(|t| t == p))
    {
        return QueryType::Question;
    }

    if matches_any(&PROBLEM_PATTERNS, tokens, lowered) {
        return QueryType::ProblemReport;
    }
    if matches_any(&SOLUTION_PATTERNS, tokens, lowered) {
        return QueryType::SeekingSolution;
    }
    QueryType::General
}

fn matches_any(patterns: &[&str], tokens: &[String], lowered: &str) -> bool {
    patterns
        .iter()
        .any(|p| tokens.iter().any(|t| t == p) || lowered.contains(p))
}

/// Derive the intent from the query type, falling back to the sentiment
/// category when the type alone is inconclusive.
fn determine_intent(query_type: QueryType, sentiment: &SentimentResult) -> Intent {
    if query_type == QueryType::Question || sentiment.category == Category::Question {
        Intent::FindAnswers
    } else if query_type == QueryType::ProblemReport || sentiment.category == Category::Problem {
        Intent::FindSolutions
    } else if query_type == QueryType::SeekingSolution || sentiment.category == Category::Solution {
        Intent::FindSimilarSolved
    } else {
        Intent::GeneralSearch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::SpellingCorrector;

    fn classifier() -> IntentClassifier {
        let corrector = Arc::new(SpellingCorrector::new());
        IntentClassifier::new(Arc::new(SentimentAnalyzer::new(corrector)))
    }

    #[test]
    fn test_question_query() {
        let classifier = classifier();

        let analysis = classifier.analyze("how do i connect to wifi");
        assert_eq!(analysis.query_type, QueryType::Question);
        assert_eq!(analysis.intent, Intent::FindAnswers);
        assert_eq!(analysis.tokens[0], "how");
    }

    #[test]
    fn test_problem_query() {
        let classifier = classifier();

        let analysis = classifier.analyze("my wifi is broken");
        assert_eq!(analysis.query_type, QueryType::ProblemReport);
        assert_eq!(analysis.intent, Intent::FindSolutions);
    }

    #[test]
    fn test_solution_query() {
        let classifier = classifier();

        let analysis = classifier.analyze("anyone solved this");
        assert_eq!(analysis.query_type, QueryType::SeekingSolution);
        assert_eq!(analysis.intent, Intent::FindSimilarSolved);
    }

    #[test]
    fn test_question_wins_over_other_groups() {
        let classifier = classifier();

        // "fix" and "error" are present, but the leading interrogative
        // decides.
        let analysis = classifier.analyze("how to fix this error");
        assert_eq!(analysis.query_type, QueryType::Question);
        assert_eq!(analysis.intent, Intent::FindAnswers);
    }

    #[test]
    fn test_late_interrogative_does_not_count() {
        let classifier = classifier();

        let analysis = classifier.analyze("tell me about how");
        assert_eq!(analysis.query_type, QueryType::General);
        assert_eq!(analysis.intent, Intent::GeneralSearch);
    }

    #[test]
    fn test_multi_word_pattern_matches_raw_text() {
        let classifier = classifier();

        // "not working" never appears as a single token.
        let analysis = classifier.analyze("my wifi is not working");
        assert_eq!(analysis.query_type, QueryType::ProblemReport);
        assert_eq!(analysis.intent, Intent::FindSolutions);
    }

    #[test]
    fn test_sentiment_category_drives_intent() {
        let classifier = classifier();

        // No pattern hit, but the mildly negative sentiment lands in the
        // question category.
        let analysis = classifier.analyze("schedule seems very unclear here");
        assert_eq!(analysis.query_type, QueryType::General);
        assert_eq!(analysis.sentiment.category, Category::Question);
        assert_eq!(analysis.intent, Intent::FindAnswers);
    }

    #[test]
    fn test_general_query() {
        let classifier = classifier();

        let analysis = classifier.analyze("library opening hours");
        assert_eq!(analysis.query_type, QueryType::General);
        assert_eq!(analysis.intent, Intent::GeneralSearch);
    }

    #[test]
    fn test_tokens_are_truncated() {
        let classifier = classifier();

        let analysis =
            classifier.analyze("one two three four five six seven eight nine ten eleven twelve");
        assert_eq!(analysis.tokens.len(), 10);
    }

    #[test]
    fn test_empty_query() {
        let classifier = classifier();

        let analysis = classifier.analyze("");
        assert_eq!(analysis.query_type, QueryType::General);
        assert_eq!(analysis.intent, Intent::GeneralSearch);
        assert_eq!(analysis.sentiment.category, Category::Unknown);
        assert!(analysis.tokens.is_empty());
    }

    #[test]
    fn test_analysis_round_trips_through_json() {
        let classifier = classifier();

        let analysis = classifier.analyze("how do i fix this");
        let json = serde_json::to_string(&analysis).unwrap();
        assert!(json.contains("\"query_type\":\"question\""));
        assert!(json.contains("\"intent\":\"find_answers\""));

        let back: QueryAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(back, analysis);
    }
}
