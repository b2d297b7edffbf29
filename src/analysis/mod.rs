//! Text analysis module for Parlance.
//!
//! This module provides the text preprocessing used across the crate:
//! tokenization, token filtering, stemming, and the composed pipeline that
//! turns raw post or query text into corrected terms.

pub mod filter;
pub mod pipeline;
pub mod stem;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use filter::{CorrectionFilter, LowercaseFilter, TokenFilter, WordCharFilter};
pub use pipeline::TextPipeline;
pub use stem::{PorterStemmer, Stemmer};
pub use token::{IntoTokenStream, Token, TokenStream};
pub use tokenizer::{Tokenizer, WhitespaceTokenizer};
