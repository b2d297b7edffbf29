//! Query expansion combining curated synonyms with a lexical database.
//!
//! The expander turns a raw user query into the ordered term set that
//! relevance scoring matches against documents. Each word contributes its
//! corrected form, curated synonyms, lexical-database synonyms, and Porter
//! stems, deduplicated in insertion order.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use parlance::spelling::SpellingCorrector;
//! use parlance::synonym::{NullLexicalDatabase, SynonymExpander, SynonymTable};
//!
//! # async fn example() -> parlance::error::Result<()> {
//! let corrector = Arc::new(SpellingCorrector::new());
//! let expander = SynonymExpander::new(
//!     SynonymTable::builtin(),
//!     Arc::new(NullLexicalDatabase::new()),
//!     corrector,
//! )?;
//!
//! let terms = expander.expand_query("hostel rules").await;
//! assert_eq!(terms[0], "hostel rules");
//! assert!(terms.contains(&"dormitory".to_string()));
//! assert!(terms.contains(&"regulations".to_string()));
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use ahash::{AHashMap, AHashSet};
use log::{debug, warn};
use parking_lot::RwLock;
use regex::Regex;

use crate::analysis::{PorterStemmer, Stemmer};
use crate::error::{ParlanceError, Result};
use crate::spelling::SpellingCorrector;
use crate::synonym::lexical::LexicalDatabase;
use crate::synonym::table::SynonymTable;

/// Configuration for query expansion.
#[derive(Debug, Clone)]
pub struct ExpansionConfig {
    /// Deadline for a single lexical-database lookup.
    pub lookup_timeout: Duration,
    /// Maximum entries harvested from the lexical database per word,
    /// counting the seed word itself.
    pub max_external_synonyms: usize,
    /// Maximum terms in an expanded query.
    pub max_query_terms: usize,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        ExpansionConfig {
            lookup_timeout: Duration::from_millis(3000),
            max_external_synonyms: 15,
            max_query_terms: 100,
        }
    }
}

/// Term accumulator that deduplicates while preserving insertion order.
#[derive(Debug, Default)]
struct OrderedTermSet {
    seen: AHashSet<String>,
    terms: Vec<String>,
}

impl OrderedTermSet {
    fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, term: String) {
        if !self.seen.contains(&term) {
            self.seen.insert(term.clone());
            self.terms.push(term);
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.terms
    }
}

/// Query expander over a curated table and a lexical database.
///
/// External lookup results are cached per corrected word behind an
/// `RwLock`, so repeated queries for common words skip the database after
/// the first request. Lookup failures and timeouts degrade to the curated
/// contribution and are logged rather than propagated.
#[derive(Debug)]
pub struct SynonymExpander {
    table: SynonymTable,
    lexical: Arc<dyn LexicalDatabase>,
    corrector: Arc<SpellingCorrector>,
    stemmer: PorterStemmer,
    config: ExpansionConfig,
    cache: RwLock<AHashMap<String, Vec<String>>>,
    gloss_quote: Regex,
}

impl SynonymExpander {
    /// Create an expander with the default configuration.
    pub fn new(
        table: SynonymTable,
        lexical: Arc<dyn LexicalDatabase>,
        corrector: Arc<SpellingCorrector>,
    ) -> Result<Self> {
        Self::with_config(table, lexical, corrector, ExpansionConfig::default())
    }

    /// Create an expander with a custom configuration.
    pub fn with_config(
        table: SynonymTable,
        lexical: Arc<dyn LexicalDatabase>,
        corrector: Arc<SpellingCorrector>,
        config: ExpansionConfig,
    ) -> Result<Self> {
        let gloss_quote = Regex::new(r#""([^"]+)""#)
            .map_err(|e| ParlanceError::synonym(format!("Invalid gloss pattern: {e}")))?;

        Ok(SynonymExpander {
            table,
            lexical,
            corrector,
            stemmer: PorterStemmer,
            config,
            cache: RwLock::new(AHashMap::new()),
            gloss_quote,
        })
    }

    /// Get the curated synonym table.
    pub fn table(&self) -> &SynonymTable {
        &self.table
    }

    /// Get the expansion configuration.
    pub fn config(&self) -> &ExpansionConfig {
        &self.config
    }

    /// Expand a single word into its synonym set.
    ///
    /// The result starts with the lowercased word, followed by curated
    /// synonyms and then the lexical-database contribution. The word is
    /// taken as given; callers wanting typo tolerance should correct it
    /// first.
    pub async fn expand_word(&self, word: &str) -> Vec<String> {
        let seed = word.trim().to_lowercase();
        if seed.is_empty() {
            return Vec::new();
        }

        let mut terms = OrderedTermSet::new();
        terms.insert(seed.clone());
        if let Some(synonyms) = self.table.lookup(&seed) {
            for synonym in synonyms {
                terms.insert(synonym.clone());
            }
        }
        for synonym in self.lookup_external(&seed).await {
            terms.insert(synonym);
        }
        terms.into_vec()
    }

    /// Expand a whole query into the term set used for relevance scoring.
    ///
    /// The first term is the full lowercased query. Every whitespace token
    /// longer than two characters then contributes, in order: the raw
    /// token, its corrected form, curated synonyms with their stems,
    /// lexical-database synonyms with their stems, and the stem of the
    /// corrected form. Terms are deduplicated in insertion order, entries
    /// of one character or less are dropped, and the result is truncated
    /// to `max_query_terms`.
    pub async fn expand_query(&self, query: &str) -> Vec<String> {
        let lowered = query.to_lowercase();
        let words: Vec<&str> = lowered
            .split_whitespace()
            .filter(|w| w.chars().count() > 2)
            .collect();

        let mut terms = OrderedTermSet::new();
        terms.insert(lowered.clone());

        for word in words {
            terms.insert(word.to_string());

            let corrected = self.corrector.correct(word);
            terms.insert(corrected.clone());

            if let Some(synonyms) = self.table.lookup(&corrected) {
                for synonym in synonyms {
                    terms.insert(synonym.clone());
                    terms.insert(self.stemmer.stem(synonym));
                }
            }

            for synonym in self.lookup_external(&corrected).await {
                let stemmed = self.stemmer.stem(&synonym);
                terms.insert(synonym);
                terms.insert(stemmed);
            }

            terms.insert(self.stemmer.stem(&corrected));
        }

        let mut expanded: Vec<String> = terms
            .into_vec()
            .into_iter()
            .filter(|t| t.chars().count() > 1)
            .collect();
        expanded.truncate(self.config.max_query_terms);

        debug!("expanded query {query:?} into {} terms", expanded.len());
        expanded
    }

    /// Collect the lexical-database contribution for a word.
    ///
    /// Returns the seed word followed by filtered synonyms, lemmas, and
    /// quoted gloss phrases, capped at `max_external_synonyms`. Results
    /// are cached, including degraded results from failed lookups.
    async fn lookup_external(&self, word: &str) -> Vec<String> {
        let key = word.to_lowercase();
        if let Some(hit) = self.cache.read().get(&key) {
            return hit.clone();
        }

        let mut terms = OrderedTermSet::new();
        terms.insert(key.clone());

        let lookup = self.lexical.lookup(&key);
        match tokio::time::timeout(self.config.lookup_timeout, lookup).await {
            Ok(Ok(entries)) => {
                for entry in entries {
                    for synonym in &entry.synonyms {
                        if let Some(term) = normalize_external(synonym) {
                            terms.insert(term);
                        }
                    }
                    if let Some(lemma) = &entry.lemma {
                        if let Some(term) = normalize_external(lemma) {
                            terms.insert(term);
                        }
                    }
                    if let Some(gloss) = &entry.gloss {
                        for captures in self.gloss_quote.captures_iter(gloss) {
                            if let Some(term) = normalize_external(&captures[1]) {
                                terms.insert(term);
                            }
                        }
                    }
                }
            }
            Ok(Err(e)) => {
                warn!("lexical lookup for {key:?} failed: {e}");
            }
            Err(_) => {
                warn!(
                    "lexical lookup for {key:?} timed out after {:?}",
                    self.config.lookup_timeout
                );
            }
        }

        let mut contribution = terms.into_vec();
        contribution.truncate(self.config.max_external_synonyms);
        self.cache.write().insert(key, contribution.clone());
        contribution
    }
}

/// Normalize a lexical-database term for inclusion in an expansion.
///
/// Lowercases, turns underscores into spaces, and trims. Terms shorter
/// than three characters or longer than two words are rejected.
fn normalize_external(raw: &str) -> Option<String> {
    let cleaned = raw.to_lowercase().replace('_', " ");
    let cleaned = cleaned.trim();
    if cleaned.chars().count() < 3 {
        return None;
    }
    if cleaned.split_whitespace().count() > 2 {
        return None;
    }
    Some(cleaned.to_string())
}
