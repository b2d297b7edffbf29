//! Lexical database abstraction for external synonym lookup.
//!
//! This module provides the `LexicalDatabase` trait, which abstracts over
//! WordNet-style dictionaries. The query expander consults a lexical
//! database after the curated table, so implementations can be backed by a
//! bundled word list, an embedded dictionary, or a remote service.
//!
//! # Thread Safety
//!
//! Implementations must be `Send + Sync` so that lookups can run from
//! concurrent query tasks.
//!
//! # Example
//!
//! ```
//! use async_trait::async_trait;
//! use parlance::error::Result;
//! use parlance::synonym::{LexicalDatabase, LexicalEntry};
//!
//! #[derive(Debug)]
//! struct SingleEntryDatabase;
//!
//! #[async_trait]
//! impl LexicalDatabase for SingleEntryDatabase {
//!     async fn lookup(&self, word: &str) -> Result<Vec<LexicalEntry>> {
//!         if word == "hostel" {
//!             Ok(vec![LexicalEntry::new(vec!["youth_hostel".to_string()])])
//!         } else {
//!             Ok(Vec::new())
//!         }
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "single-entry"
//!     }
//! }
//! ```

use std::fmt::Debug;

use ahash::AHashMap;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One sense of a word as reported by a lexical database.
///
/// Mirrors the synset records of WordNet-style dictionaries: the member
/// words of the sense, an optional canonical lemma, and an optional gloss.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LexicalEntry {
    /// Member words of this sense. Multi-word members use underscores
    /// (e.g. `youth_hostel`) as WordNet does.
    pub synonyms: Vec<String>,
    /// Canonical lemma for this sense, if the database reports one.
    pub lemma: Option<String>,
    /// Definition text. Quoted phrases inside the gloss are harvested as
    /// usage examples during expansion.
    pub gloss: Option<String>,
}

impl LexicalEntry {
    /// Create an entry with only member words.
    pub fn new(synonyms: Vec<String>) -> Self {
        LexicalEntry {
            synonyms,
            lemma: None,
            gloss: None,
        }
    }

    /// Set the canonical lemma.
    pub fn with_lemma<S: Into<String>>(mut self, lemma: S) -> Self {
        self.lemma = Some(lemma.into());
        self
    }

    /// Set the gloss text.
    pub fn with_gloss<S: Into<String>>(mut self, gloss: S) -> Self {
        self.gloss = Some(gloss.into());
        self
    }
}

/// WordNet-style dictionary used to enrich query expansion.
#[async_trait]
pub trait LexicalDatabase: Send + Sync + Debug {
    /// Look up all senses of a word.
    ///
    /// Returns an empty vector when the word is unknown. Errors are
    /// reserved for infrastructure failures (I/O, remote service), not
    /// for missing words.
    async fn lookup(&self, word: &str) -> Result<Vec<LexicalEntry>>;

    /// Get the name of this database.
    fn name(&self) -> &'static str;
}

/// Lexical database that knows no words.
///
/// Used when expansion should rely on the curated synonym table alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLexicalDatabase;

impl NullLexicalDatabase {
    /// Create a new null database.
    pub fn new() -> Self {
        NullLexicalDatabase
    }
}

#[async_trait]
impl LexicalDatabase for NullLexicalDatabase {
    async fn lookup(&self, _word: &str) -> Result<Vec<LexicalEntry>> {
        Ok(Vec::new())
    }

    fn name(&self) -> &'static str {
        "null"
    }
}

/// Lexical database backed by an in-memory map.
///
/// Useful for bundling a small curated dictionary with an application, and
/// for exercising the expander without a real WordNet installation.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLexicalDatabase {
    entries: AHashMap<String, Vec<LexicalEntry>>,
}

impl InMemoryLexicalDatabase {
    /// Create an empty in-memory database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sense for a word. Lookup is keyed on the lowercased word.
    pub fn insert<S: Into<String>>(&mut self, word: S, entry: LexicalEntry) {
        self.entries
            .entry(word.into().to_lowercase())
            .or_default()
            .push(entry);
    }

    /// Get the number of words with at least one sense.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the database is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl LexicalDatabase for InMemoryLexicalDatabase {
    async fn lookup(&self, word: &str) -> Result<Vec<LexicalEntry>> {
        Ok(self
            .entries
            .get(&word.to_lowercase())
            .cloned()
            .unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "in-memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_null_database_is_empty() {
        let db = NullLexicalDatabase::new();
        assert!(db.lookup("rules").await.unwrap().is_empty());
        assert_eq!(db.name(), "null");
    }

    #[tokio::test]
    async fn test_in_memory_lookup() {
        let mut db = InMemoryLexicalDatabase::new();
        db.insert(
            "hostel",
            LexicalEntry::new(vec!["youth_hostel".to_string(), "hostelry".to_string()])
                .with_lemma("hostel")
                .with_gloss("inexpensive supervised lodging"),
        );
        db.insert("hostel", LexicalEntry::new(vec!["inn".to_string()]));

        let senses = db.lookup("Hostel").await.unwrap();
        assert_eq!(senses.len(), 2);
        assert_eq!(senses[0].lemma.as_deref(), Some("hostel"));
        assert_eq!(senses[1].synonyms, vec!["inn".to_string()]);

        assert!(db.lookup("unknown").await.unwrap().is_empty());
        assert_eq!(db.len(), 1);
    }

    #[test]
    fn test_entry_builder() {
        let entry = LexicalEntry::new(vec!["fix".to_string()])
            .with_lemma("fix")
            .with_gloss("a solution; \"a quick fix\"");
        assert_eq!(entry.lemma.as_deref(), Some("fix"));
        assert!(entry.gloss.unwrap().contains("quick fix"));
    }
}
