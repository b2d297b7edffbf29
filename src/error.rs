//! Error types for the Parlance library.
//!
//! All fallible operations in Parlance report through the [`ParlanceError`]
//! enum. The core text operations (correction, expansion, sentiment, scoring)
//! are total over their inputs, so errors here come from the edges: loading
//! tables from files, malformed JSON, or a lexical database collaborator
//! failing or timing out.
//!
//! # Examples
//!
//! ```
//! use parlance::error::{ParlanceError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ParlanceError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Parlance operations.
///
/// This enum represents all possible errors that can occur in the Parlance
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum ParlanceError {
    /// I/O errors (reading vocabulary, synonym, or lexicon files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, stemming)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Synonym expansion errors
    #[error("Synonym error: {0}")]
    Synonym(String),

    /// Lexical database collaborator errors
    #[error("Lexical database error: {0}")]
    Lexicon(String),

    /// A lexical lookup exceeded its deadline
    #[error("Lookup timed out: {0}")]
    Timeout(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ParlanceError.
pub type Result<T> = std::result::Result<T, ParlanceError>;

impl ParlanceError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        ParlanceError::Analysis(msg.into())
    }

    /// Create a new synonym error.
    pub fn synonym<S: Into<String>>(msg: S) -> Self {
        ParlanceError::Synonym(msg.into())
    }

    /// Create a new lexical database error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        ParlanceError::Lexicon(msg.into())
    }

    /// Create a new timeout error.
    pub fn timeout<S: Into<String>>(msg: S) -> Self {
        ParlanceError::Timeout(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ParlanceError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ParlanceError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        ParlanceError::Other(format!("Invalid configuration: {}", msg.into()))
    }
}
