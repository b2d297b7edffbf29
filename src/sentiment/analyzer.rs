//! Lexical sentiment scoring for forum text.
//!
//! The analyzer blends two signals: an AFINN-style mean valence over the
//! corrected token sequence, and a hand-tuned table of forum keyword
//! stems. The blended score is normalized by length, clamped to
//! `[-1, 1]`, and classified into sentiment and category buckets with a
//! confidence estimate.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use parlance::sentiment::{Category, Sentiment, SentimentAnalyzer};
//! use parlance::spelling::SpellingCorrector;
//!
//! let analyzer = SentimentAnalyzer::new(Arc::new(SpellingCorrector::new()));
//!
//! let result = analyzer.analyze("thanks this solved my problem");
//! assert_eq!(result.sentiment, Sentiment::SlightlyPositive);
//! assert_eq!(result.category, Category::Discussion);
//! assert_eq!(result.keyword_matches, 3);
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::{PorterStemmer, Stemmer, TextPipeline};
use crate::sentiment::keywords::KeywordWeights;
use crate::sentiment::lexicon::SentimentLexicon;
use crate::spelling::SpellingCorrector;

/// Negation tokens that flip the sign of subsequent valences.
///
/// Listed in their post-tokenization form, with apostrophes already
/// stripped by the pipeline.
const NEGATIONS: [&str; 17] = [
    "not", "no", "never", "none", "neither", "nobody", "nothing", "cant", "cannot", "dont",
    "doesnt", "wont", "isnt", "wasnt", "shouldnt", "couldnt", "wouldnt",
];

/// Maximum keywords reported in `detected_keywords`.
const MAX_DETECTED_KEYWORDS: usize = 5;

/// Sentiment label derived from the normalized score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    SlightlyPositive,
    Neutral,
    SlightlyNegative,
    Negative,
}

impl Sentiment {
    /// Get the label as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::SlightlyPositive => "slightly_positive",
            Sentiment::Neutral => "neutral",
            Sentiment::SlightlyNegative => "slightly_negative",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Content category derived from the normalized score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Solution,
    Problem,
    Discussion,
    Question,
    General,
    Unknown,
}

impl Category {
    /// Get the category as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Solution => "solution",
            Category::Problem => "problem",
            Category::Discussion => "discussion",
            Category::Question => "question",
            Category::General => "general",
            Category::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A forum keyword found during scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedKeyword {
    /// Corrected token as it appeared in the text.
    pub original: String,
    /// Porter stem that matched the keyword table.
    pub stemmed: String,
    /// Weight contributed to the forum score.
    pub weight: f64,
}

/// Result of sentiment analysis over one piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Normalized score in `[-1, 1]`, rounded to three decimals.
    pub score: f64,
    /// Sentiment bucket for the score.
    pub sentiment: Sentiment,
    /// Confidence estimate in `[0, 1]`, rounded to two decimals.
    pub confidence: f64,
    /// Content category for the score.
    pub category: Category,
    /// Number of forum keywords found, uncapped.
    pub keyword_matches: usize,
    /// First keywords found, capped at five.
    pub detected_keywords: Vec<DetectedKeyword>,
}

impl SentimentResult {
    /// Neutral result for empty or unusable input.
    pub fn unknown() -> Self {
        SentimentResult {
            score: 0.0,
            sentiment: Sentiment::Neutral,
            confidence: 0.0,
            category: Category::Unknown,
            keyword_matches: 0,
            detected_keywords: Vec::new(),
        }
    }
}

/// Sentiment scorer over corrected tokens.
pub struct SentimentAnalyzer {
    pipeline: TextPipeline,
    lexicon: SentimentLexicon,
    keywords: KeywordWeights,
    stemmer: PorterStemmer,
}

impl SentimentAnalyzer {
    /// Create an analyzer with the builtin lexicon and keyword table.
    ///
    /// The corrector is shared with the rest of the engine so that
    /// sentiment scoring sees the same corrected tokens as expansion.
    pub fn new(corrector: Arc<SpellingCorrector>) -> Self {
        Self::with_tables(
            TextPipeline::forum_search(corrector),
            SentimentLexicon::builtin(),
            KeywordWeights::builtin(),
        )
    }

    /// Create an analyzer with custom tables.
    pub fn with_tables(
        pipeline: TextPipeline,
        lexicon: SentimentLexicon,
        keywords: KeywordWeights,
    ) -> Self {
        SentimentAnalyzer {
            pipeline,
            lexicon,
            keywords,
            stemmer: PorterStemmer,
        }
    }

    /// Get the valence lexicon.
    pub fn lexicon(&self) -> &SentimentLexicon {
        &self.lexicon
    }

    /// Get the keyword weight table.
    pub fn keywords(&self) -> &KeywordWeights {
        &self.keywords
    }

    /// Tokenize text through the analyzer's pipeline.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        self.pipeline.terms(text)
    }

    /// Analyze the sentiment of a piece of text.
    ///
    /// Empty input, or input that produces no tokens, yields the neutral
    /// `unknown` result rather than an error.
    pub fn analyze(&self, text: &str) -> SentimentResult {
        if text.trim().is_empty() {
            return SentimentResult::unknown();
        }
        let tokens = self.pipeline.terms(text);
        if tokens.is_empty() {
            return SentimentResult::unknown();
        }

        let base = self.base_score(&tokens);

        let mut forum = 0.0;
        let mut matches = 0usize;
        let mut detected = Vec::new();
        for token in &tokens {
            let stemmed = self.stemmer.stem(token);
            if let Some(weight) = self.keywords.weight(&stemmed) {
                forum += weight;
                matches += 1;
                if detected.len() < MAX_DETECTED_KEYWORDS {
                    detected.push(DetectedKeyword {
                        original: token.clone(),
                        stemmed,
                        weight,
                    });
                }
            }
        }

        let combined = base * 0.5 + forum * 0.5;
        let normalized = (combined / tokens.len().max(1) as f64).clamp(-1.0, 1.0);
        let (sentiment, category) = classify(normalized);

        let length_confidence = (tokens.len() as f64 / 30.0).min(1.0);
        let keyword_confidence = (matches as f64 * 0.15).min(1.0);
        let confidence = (length_confidence + keyword_confidence + normalized.abs()) / 3.0;

        SentimentResult {
            score: round_to(normalized, 3),
            sentiment,
            confidence: round_to(confidence, 2),
            category,
            keyword_matches: matches,
            detected_keywords: detected,
        }
    }

    /// Mean valence over the token sequence.
    ///
    /// A negation token flips the sign of every valence after it, and
    /// contributes no valence of its own.
    fn base_score(&self, tokens: &[String]) -> f64 {
        if tokens.is_empty() {
            return 0.0;
        }
        let mut total = 0.0;
        let mut negator = 1.0;
        for token in tokens {
            if NEGATIONS.contains(&token.as_str()) {
                negator = -1.0;
                continue;
            }
            if let Some(valence) = self.lexicon.valence(token) {
                total += negator * valence;
            }
        }
        total / tokens.len() as f64
    }
}

/// Map a normalized score to its sentiment and category buckets.
fn classify(score: f64) -> (Sentiment, Category) {
    if score > 0.4 {
        (Sentiment::Positive, Category::Solution)
    } else if score < -0.4 {
        (Sentiment::Negative, Category::Problem)
    } else if score > 0.15 {
        (Sentiment::SlightlyPositive, Category::Discussion)
    } else if score < -0.15 {
        (Sentiment::SlightlyNegative, Category::Question)
    } else {
        (Sentiment::Neutral, Category::General)
    }
}

/// Round to a fixed number of decimal places.
fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> SentimentAnalyzer {
        SentimentAnalyzer::new(Arc::new(SpellingCorrector::new()))
    }

    #[test]
    fn test_empty_input_is_unknown() {
        let analyzer = analyzer();

        let result = analyzer.analyze("");
        assert_eq!(result, SentimentResult::unknown());

        let result = analyzer.analyze("   ");
        assert_eq!(result.category, Category::Unknown);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_punctuation_only_is_unknown() {
        let analyzer = analyzer();

        let result = analyzer.analyze("!!! ... ???");
        assert_eq!(result.category, Category::Unknown);
        assert!(result.detected_keywords.is_empty());
    }

    #[test]
    fn test_gratitude_text() {
        let analyzer = analyzer();

        let result = analyzer.analyze("thanks this solved my problem");

        // base = (2 + 2 - 2) / 5 = 0.4, forum = 2.0 + 2.5 - 1.5 = 3.0,
        // normalized = (0.2 + 1.5) / 5 = 0.34.
        assert_eq!(result.score, 0.34);
        assert_eq!(result.sentiment, Sentiment::SlightlyPositive);
        assert_eq!(result.category, Category::Discussion);
        assert_eq!(result.keyword_matches, 3);
        assert_eq!(result.confidence, 0.32);

        let stems: Vec<&str> = result
            .detected_keywords
            .iter()
            .map(|k| k.stemmed.as_str())
            .collect();
        assert_eq!(stems, vec!["thank", "solv", "problem"]);
    }

    #[test]
    fn test_problem_text() {
        let analyzer = analyzer();

        let result = analyzer.analyze("broken wifi error");

        // base = (-1 - 2) / 3 = -1.0, forum = -2.0 - 2.0 = -4.0,
        // normalized = (-0.5 - 2.0) / 3 clamped to -0.833.
        assert_eq!(result.score, -0.833);
        assert_eq!(result.sentiment, Sentiment::Negative);
        assert_eq!(result.category, Category::Problem);
        assert_eq!(result.keyword_matches, 2);
    }

    #[test]
    fn test_negation_flips_valence() {
        let analyzer = analyzer();

        let result = analyzer.analyze("this is not working");

        // base = -2 / 4 = -0.5, forum = 1.5 ("work" stem),
        // normalized = (-0.25 + 0.75) / 4 = 0.125 which stays neutral.
        assert_eq!(result.score, 0.125);
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.category, Category::General);
    }

    #[test]
    fn test_score_stays_in_range() {
        let analyzer = analyzer();

        let texts = [
            "solved solved solved solved",
            "fail fail fail fail fail fail",
            "the quick brown fox",
            "thanks so much, this was awesome and perfect and brilliant",
        ];
        for text in texts {
            let result = analyzer.analyze(text);
            assert!((-1.0..=1.0).contains(&result.score), "score for {text:?}");
            assert!(
                (0.0..=1.0).contains(&result.confidence),
                "confidence for {text:?}"
            );
        }
    }

    #[test]
    fn test_strong_positive_is_solution() {
        let analyzer = analyzer();

        // forum = 2.5 + 2.5 = 5.0 over two tokens pushes past 0.4.
        let result = analyzer.analyze("solved solved");
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.category, Category::Solution);
    }

    #[test]
    fn test_detected_keywords_are_capped() {
        let analyzer = analyzer();

        let result = analyzer.analyze("solved fixed working helped thanks great awesome perfect");
        assert_eq!(result.detected_keywords.len(), 5);
        assert!(result.keyword_matches > 5);
    }

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(classify(0.5), (Sentiment::Positive, Category::Solution));
        assert_eq!(classify(-0.5), (Sentiment::Negative, Category::Problem));
        assert_eq!(
            classify(0.2),
            (Sentiment::SlightlyPositive, Category::Discussion)
        );
        assert_eq!(
            classify(-0.2),
            (Sentiment::SlightlyNegative, Category::Question)
        );
        assert_eq!(classify(0.0), (Sentiment::Neutral, Category::General));
        // Thresholds are exclusive, so the boundary values fall through.
        assert_eq!(classify(0.15), (Sentiment::Neutral, Category::General));
        assert_eq!(
            classify(0.4),
            (Sentiment::SlightlyPositive, Category::Discussion)
        );
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.31889, 2), 0.32);
        assert_eq!(round_to(0.34, 3), 0.34);
        assert_eq!(round_to(-0.8333333, 3), -0.833);
    }

    #[test]
    fn test_sentiment_labels() {
        assert_eq!(Sentiment::SlightlyPositive.as_str(), "slightly_positive");
        assert_eq!(Category::Unknown.to_string(), "unknown");

        let json = serde_json::to_string(&Sentiment::SlightlyNegative).unwrap();
        assert_eq!(json, "\"slightly_negative\"");
    }
}
