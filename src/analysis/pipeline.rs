//! Text pipeline that combines a tokenizer with a chain of filters.
//!
//! This is the preprocessing used by sentiment scoring and intent
//! classification: split on whitespace, lower-case, strip non-word
//! characters, drop empties, then correct each surviving token.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use parlance::analysis::pipeline::TextPipeline;
//! use parlance::spelling::SpellingCorrector;
//!
//! let corrector = Arc::new(SpellingCorrector::new());
//! let pipeline = TextPipeline::forum_search(corrector);
//!
//! let terms = pipeline.terms("My WiFi isn't working!");
//! assert_eq!(terms, vec!["my", "wifi", "isnt", "working"]);
//! ```

use std::sync::Arc;

use crate::analysis::filter::{CorrectionFilter, LowercaseFilter, TokenFilter, WordCharFilter};
use crate::analysis::token::TokenStream;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::error::Result;
use crate::spelling::SpellingCorrector;

/// A configurable pipeline that combines a tokenizer with a chain of filters.
///
/// Filters are applied sequentially in the order they were added.
#[derive(Clone)]
pub struct TextPipeline {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn TokenFilter>>,
}

impl TextPipeline {
    /// Create a new pipeline with the given tokenizer and no filters.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        TextPipeline {
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Create the standard forum search pipeline.
    ///
    /// Whitespace tokenization, lower-casing, non-word stripping, and
    /// per-token spelling correction, in that order.
    pub fn forum_search(corrector: Arc<SpellingCorrector>) -> Self {
        TextPipeline::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(WordCharFilter::new()))
            .add_filter(Arc::new(CorrectionFilter::new(corrector)))
    }

    /// Add a filter to the end of the chain.
    pub fn add_filter(mut self, filter: Arc<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Get the tokenizer used by this pipeline.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters used by this pipeline.
    pub fn filters(&self) -> &[Arc<dyn TokenFilter>] {
        &self.filters
    }

    /// Run the full pipeline over the given text.
    pub fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    /// Collect the pipeline output as plain terms in stream order.
    ///
    /// The builtin tokenizer and filters never fail; a failing custom
    /// filter yields an empty term list.
    pub fn terms(&self, text: &str) -> Vec<String> {
        self.analyze(text)
            .map(|stream| stream.map(|token| token.text).collect())
            .unwrap_or_default()
    }
}
