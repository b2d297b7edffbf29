//! Synonym expansion for Parlance.
//!
//! This module turns query words into broader term sets: a curated table of
//! forum synonyms, an abstraction over WordNet-style lexical databases, and
//! the expander that merges both with spelling correction and stemming.

pub mod expander;
pub mod lexical;
pub mod table;

// Re-export commonly used types
pub use expander::{ExpansionConfig, SynonymExpander};
pub use lexical::{InMemoryLexicalDatabase, LexicalDatabase, LexicalEntry, NullLexicalDatabase};
pub use table::SynonymTable;
