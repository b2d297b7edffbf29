//! Token filter implementations for token transformation.
//!
//! Filters are applied in sequence after tokenization. The forum search
//! pipeline chains [`LowercaseFilter`], [`WordCharFilter`], and
//! [`CorrectionFilter`] so that raw post text comes out as corrected,
//! comparable terms.

use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::error::Result;
use crate::spelling::SpellingCorrector;

/// Trait for filters that transform token streams.
pub trait TokenFilter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A filter that converts tokens to lowercase.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl TokenFilter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered: Vec<_> = tokens
            .map(|token| {
                let lowered = token.text.to_lowercase();
                token.with_text(lowered)
            })
            .collect();

        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

/// A filter that strips every non-word character from each token.
///
/// Word characters are ASCII letters, digits, and underscore. Tokens that
/// become empty after stripping are removed from the stream.
#[derive(Clone, Debug, Default)]
pub struct WordCharFilter;

impl WordCharFilter {
    /// Create a new word-character filter.
    pub fn new() -> Self {
        WordCharFilter
    }

    fn is_word_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_'
    }
}

impl TokenFilter for WordCharFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered: Vec<_> = tokens
            .filter_map(|token| {
                let stripped: String = token
                    .text
                    .chars()
                    .filter(|&c| Self::is_word_char(c))
                    .collect();
                if stripped.is_empty() {
                    None
                } else {
                    Some(token.with_text(stripped))
                }
            })
            .collect();

        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word_char"
    }
}

/// A filter that replaces each token with its spelling correction.
///
/// Tokens shorter than the corrector's minimum length pass through
/// unchanged, as do tokens with no close vocabulary match.
#[derive(Clone)]
pub struct CorrectionFilter {
    corrector: Arc<SpellingCorrector>,
}

impl CorrectionFilter {
    /// Create a new correction filter backed by the given corrector.
    pub fn new(corrector: Arc<SpellingCorrector>) -> Self {
        CorrectionFilter { corrector }
    }
}

impl TokenFilter for CorrectionFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let corrector = Arc::clone(&self.corrector);
        let filtered: Vec<_> = tokens
            .map(|token| {
                let corrected = corrector.correct(&token.text);
                token.with_text(corrected)
            })
            .collect();

        Ok(Box::new(filtered.into_iter()))
    }

    fn name(&self) -> &'static str {
        "correction"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::{IntoTokenStream, Token};
    use crate::spelling::Vocabulary;

    fn collect(stream: TokenStream) -> Vec<String> {
        stream.map(|t| t.text).collect()
    }

    #[test]
    fn test_lowercase_filter() {
        let filter = LowercaseFilter::new();
        let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];

        let result = collect(filter.filter(tokens.into_token_stream()).unwrap());
        assert_eq!(result, vec!["hello", "world"]);
    }

    #[test]
    fn test_word_char_filter_strips_punctuation() {
        let filter = WordCharFilter::new();
        let tokens = vec![
            Token::new("hello!", 0),
            Token::new("it's", 1),
            Token::new("...", 2),
            Token::new("wi-fi", 3),
        ];

        let result = collect(filter.filter(tokens.into_token_stream()).unwrap());
        assert_eq!(result, vec!["hello", "its", "wifi"]);
    }

    #[test]
    fn test_word_char_filter_keeps_underscore() {
        let filter = WordCharFilter::new();
        let tokens = vec![Token::new("snake_case", 0)];

        let result = collect(filter.filter(tokens.into_token_stream()).unwrap());
        assert_eq!(result, vec!["snake_case"]);
    }

    #[test]
    fn test_correction_filter() {
        let vocabulary = Vocabulary::new(["rules", "classroom", "hostel"]);
        let corrector = Arc::new(SpellingCorrector::with_vocabulary(vocabulary));
        let filter = CorrectionFilter::new(corrector);

        let tokens = vec![Token::new("rulez", 0), Token::new("of", 1)];
        let result = collect(filter.filter(tokens.into_token_stream()).unwrap());

        assert_eq!(result, vec!["rules", "of"]);
    }

    #[test]
    fn test_filter_names() {
        assert_eq!(LowercaseFilter::new().name(), "lowercase");
        assert_eq!(WordCharFilter::new().name(), "word_char");
    }
}
