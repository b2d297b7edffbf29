//! Query understanding engine.
//!
//! [`QueryEngine`] wires the spelling corrector, text pipeline, sentiment
//! analyzer, intent classifier and synonym expander into a single
//! immutable value, built once at startup and shared across requests.
//!
//! # Examples
//!
//! ```rust
//! use parlance::engine::QueryEngine;
//! use parlance::query::{Intent, QueryType};
//!
//! let engine = QueryEngine::new().unwrap();
//!
//! let analysis = engine.analyze_query("how do i fix this wifi error");
//! assert_eq!(analysis.query_type, QueryType::Question);
//! assert_eq!(analysis.intent, Intent::FindAnswers);
//!
//! let strategy = engine.sorting_strategy(&analysis);
//! assert!(strategy.boost_solved);
//! ```

use std::sync::Arc;

use log::debug;

use crate::analysis::pipeline::TextPipeline;
use crate::error::Result;
use crate::query::{IntentClassifier, QueryAnalysis, SortingStrategy};
use crate::scoring::{CandidateDocument, DocumentSentiment, TermMatcher, boost_by_intent};
use crate::sentiment::{KeywordWeights, SentimentAnalyzer, SentimentLexicon, SentimentResult};
use crate::spelling::{CorrectedQuery, CorrectorConfig, SpellingCorrector, Vocabulary};
use crate::synonym::{
    ExpansionConfig, LexicalDatabase, NullLexicalDatabase, SynonymExpander, SynonymTable,
};

/// Query understanding engine for forum search.
///
/// Bundles spelling correction, query expansion, intent classification,
/// sentiment scoring and relevance scoring behind one value.
pub struct QueryEngine {
    /// Spelling corrector shared by the pipeline and the expander.
    corrector: Arc<SpellingCorrector>,
    /// Sentiment analyzer backing classification and document scoring.
    analyzer: Arc<SentimentAnalyzer>,
    /// Intent classifier for incoming queries.
    classifier: IntentClassifier,
    /// Synonym expander with its per-word lookup cache.
    expander: SynonymExpander,
}

impl QueryEngine {
    /// Create an engine with the builtin tables and no external lexical
    /// database.
    pub fn new() -> Result<Self> {
        QueryEngineBuilder::new().build()
    }

    /// Create a builder for an engine with custom tables or collaborators.
    pub fn builder() -> QueryEngineBuilder {
        QueryEngineBuilder::new()
    }

    /// Get the shared spelling corrector.
    pub fn corrector(&self) -> &SpellingCorrector {
        &self.corrector
    }

    /// Get the sentiment analyzer.
    pub fn analyzer(&self) -> &SentimentAnalyzer {
        &self.analyzer
    }

    /// Get the synonym expander.
    pub fn expander(&self) -> &SynonymExpander {
        &self.expander
    }

    /// Correct a single word against the vocabulary.
    pub fn correct_spelling(&self, word: &str) -> String {
        self.corrector.correct(word)
    }

    /// Correct every word of a whitespace-separated query.
    pub fn correct_query(&self, query: &str) -> CorrectedQuery {
        self.corrector.correct_query(query)
    }

    /// Vocabulary words starting with the given prefix.
    pub fn completions(&self, prefix: &str, limit: usize) -> Vec<&str> {
        self.corrector.vocabulary().completions(prefix, limit)
    }

    /// Expand a query into the deduplicated term set used for scoring.
    ///
    /// See [`SynonymExpander::expand_query`] for the expansion phases.
    pub async fn expand_query(&self, query: &str) -> Vec<String> {
        self.expander.expand_query(query).await
    }

    /// Expand a single word into its synonym set.
    pub async fn expand_word(&self, word: &str) -> Vec<String> {
        self.expander.expand_word(word).await
    }

    /// Score the sentiment of a free-text snippet.
    pub fn analyze_sentiment(&self, text: &str) -> SentimentResult {
        self.analyzer.analyze(text)
    }

    /// Classify a query into sentiment, query type and search intent.
    pub fn analyze_query(&self, query: &str) -> QueryAnalysis {
        self.classifier.analyze(query)
    }

    /// Pick the sorting strategy matching the analyzed intent.
    pub fn sorting_strategy(&self, analysis: &QueryAnalysis) -> SortingStrategy {
        SortingStrategy::for_intent(analysis.intent)
    }

    /// Compile the given terms into a matcher reusable across documents.
    pub fn term_matcher(&self, terms: &[String]) -> Result<TermMatcher> {
        TermMatcher::new(terms)
    }

    /// Score one document against the given terms.
    pub fn score_document_match(
        &self,
        document: &CandidateDocument,
        terms: &[String],
        is_comment: bool,
    ) -> Result<f64> {
        Ok(TermMatcher::new(terms)?.score_document(document, is_comment))
    }

    /// Score a batch of documents against the given terms in parallel.
    pub fn score_documents(
        &self,
        documents: &[CandidateDocument],
        terms: &[String],
        is_comment: bool,
    ) -> Result<Vec<f64>> {
        Ok(TermMatcher::new(terms)?.score_documents(documents, is_comment))
    }

    /// Re-rank a document's text score by query intent and the document's
    /// sentiment summary.
    pub fn boost_by_intent(
        &self,
        document: &CandidateDocument,
        analysis: &QueryAnalysis,
        sentiment: Option<&DocumentSentiment>,
    ) -> f64 {
        boost_by_intent(document, analysis, sentiment)
    }
}

/// Builder for creating query engines.
///
/// Unset parts fall back to the builtin tables and a
/// [`NullLexicalDatabase`].
///
/// # Examples
///
/// ```rust
/// use parlance::engine::QueryEngine;
/// use parlance::spelling::Vocabulary;
///
/// let engine = QueryEngine::builder()
///     .vocabulary(Vocabulary::new(["wifi", "hostel"]))
///     .build()
///     .unwrap();
///
/// assert_eq!(engine.correct_spelling("wifo"), "wifi");
/// ```
#[derive(Debug)]
pub struct QueryEngineBuilder {
    vocabulary: Option<Vocabulary>,
    corrector_config: Option<CorrectorConfig>,
    synonym_table: Option<SynonymTable>,
    lexical: Option<Arc<dyn LexicalDatabase>>,
    expansion_config: Option<ExpansionConfig>,
    lexicon: Option<SentimentLexicon>,
    keywords: Option<KeywordWeights>,
}

impl QueryEngineBuilder {
    /// Create a new query engine builder.
    pub fn new() -> Self {
        QueryEngineBuilder {
            vocabulary: None,
            corrector_config: None,
            synonym_table: None,
            lexical: None,
            expansion_config: None,
            lexicon: None,
            keywords: None,
        }
    }

    /// Set the correction vocabulary.
    pub fn vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = Some(vocabulary);
        self
    }

    /// Set the spelling corrector thresholds.
    pub fn corrector_config(mut self, config: CorrectorConfig) -> Self {
        self.corrector_config = Some(config);
        self
    }

    /// Set the curated synonym table.
    pub fn synonym_table(mut self, table: SynonymTable) -> Self {
        self.synonym_table = Some(table);
        self
    }

    /// Set the external lexical database used by expansion.
    pub fn lexical_database(mut self, database: Arc<dyn LexicalDatabase>) -> Self {
        self.lexical = Some(database);
        self
    }

    /// Set the expansion limits and lookup timeout.
    pub fn expansion_config(mut self, config: ExpansionConfig) -> Self {
        self.expansion_config = Some(config);
        self
    }

    /// Set the sentiment valence lexicon.
    pub fn sentiment_lexicon(mut self, lexicon: SentimentLexicon) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Set the forum keyword weight table.
    pub fn keyword_weights(mut self, keywords: KeywordWeights) -> Self {
        self.keywords = Some(keywords);
        self
    }

    /// Build the engine, wiring one shared corrector through the
    /// pipeline, the analyzer and the expander.
    pub fn build(self) -> Result<QueryEngine> {
        let vocabulary = self.vocabulary.unwrap_or_default();
        let config = self.corrector_config.unwrap_or_default();
        let corrector = Arc::new(SpellingCorrector::with_config(vocabulary, config));

        let analyzer = Arc::new(SentimentAnalyzer::with_tables(
            TextPipeline::forum_search(corrector.clone()),
            self.lexicon.unwrap_or_default(),
            self.keywords.unwrap_or_default(),
        ));
        let classifier = IntentClassifier::new(analyzer.clone());

        let lexical = self
            .lexical
            .unwrap_or_else(|| Arc::new(NullLexicalDatabase::new()));
        let expander = SynonymExpander::with_config(
            self.synonym_table.unwrap_or_default(),
            lexical,
            corrector.clone(),
            self.expansion_config.unwrap_or_default(),
        )?;

        debug!(
            "query engine ready: {} vocabulary words, {} synonym entries, {} lexicon entries",
            corrector.vocabulary().len(),
            expander.table().len(),
            analyzer.lexicon().len(),
        );

        Ok(QueryEngine {
            corrector,
            analyzer,
            classifier,
            expander,
        })
    }
}

impl Default for QueryEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
