use std::io::Write;

use parlance::engine::QueryEngine;
use parlance::query::{Intent, QueryType, SortBy};
use parlance::scoring::{CandidateDocument, DocumentSentiment};
use parlance::sentiment::{Category, Sentiment};
use parlance::spelling::Vocabulary;
use parlance::synonym::SynonymTable;

#[tokio::test]
async fn test_search_query_pipeline() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Build the engine with the builtin tables
    let engine = QueryEngine::new()?;

    // 2. Classify the incoming query
    let analysis = engine.analyze_query("how do i fix wifi error");
    assert_eq!(analysis.query_type, QueryType::Question);
    assert_eq!(analysis.intent, Intent::FindAnswers);

    // 3. Expand the query into search terms
    let expanded = engine.expand_query("how do i fix wifi error").await;
    assert_eq!(expanded[0], "how do i fix wifi error");
    assert!(expanded.contains(&"wifi".to_string()));
    assert!(expanded.contains(&"error".to_string()));
    assert!(expanded.len() <= 100);

    // 4. Score candidate documents against the corrected tokens
    let terms = vec!["wifi".to_string(), "error".to_string()];
    let solved = CandidateDocument::new(
        "Fixed wifi error on campus",
        "turn it off and on again solved the wifi error",
    )
    .with_tags(vec!["wifi".to_string(), "network".to_string()])
    .with_upvotes(12);
    let related = CandidateDocument::new("Wifi slow in library", "the wifi is slow").with_upvotes(3);
    let offtopic = CandidateDocument::new("Mess menu this week", "chicken on friday").with_upvotes(4);

    let scores = engine.score_documents(&[solved.clone(), related.clone(), offtopic], &terms, false)?;
    assert!((scores[0] - 37.0).abs() < 1e-9);
    assert!((scores[1] - 14.5).abs() < 1e-9);
    assert!((scores[2] - 2.0).abs() < 1e-9);
    assert!(scores[0] > scores[1] && scores[1] > scores[2]);

    // 5. Pick the sorting strategy for the intent
    let strategy = engine.sorting_strategy(&analysis);
    assert_eq!(strategy.sort_by, SortBy::Relevance);
    assert_eq!(strategy.min_upvotes, 1);
    assert!(strategy.boost_solved);

    // 6. Re-rank with intent and per-document sentiment
    let solved = solved.with_text_score(scores[0]);
    let solved_sentiment = DocumentSentiment::new(Category::Solution, Sentiment::Positive);
    let boosted_solved = engine.boost_by_intent(&solved, &analysis, Some(&solved_sentiment));
    // Answer-plus-solution bonus and the capped upvote bonus.
    assert!((boosted_solved - 48.0).abs() < 1e-9);

    let related = related.with_text_score(scores[1]);
    let related_sentiment = DocumentSentiment::new(Category::Discussion, Sentiment::Neutral);
    let boosted_related = engine.boost_by_intent(&related, &analysis, Some(&related_sentiment));
    assert!((boosted_related - 14.5).abs() < 1e-9);

    assert!(boosted_solved > boosted_related);

    Ok(())
}

#[tokio::test]
async fn test_custom_tables_from_files() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Write a vocabulary file, one word per line
    let mut vocabulary_file = tempfile::NamedTempFile::new()?;
    writeln!(vocabulary_file, "printer")?;
    writeln!(vocabulary_file, "scanner")?;
    writeln!(vocabulary_file, "# office devices")?;
    writeln!(vocabulary_file, "toner")?;
    writeln!(vocabulary_file)?;
    writeln!(vocabulary_file, "cartridge")?;

    // 2. Write a synonym table as a JSON object
    let mut synonym_file = tempfile::NamedTempFile::new()?;
    write!(
        synonym_file,
        r#"{{"printer": ["printing device", "laser printer"]}}"#
    )?;

    // 3. Build an engine from the files
    let vocabulary = Vocabulary::load_from_file(vocabulary_file.path())?;
    let table = SynonymTable::load_from_file(synonym_file.path().to_str().unwrap())?;
    let engine = QueryEngine::builder()
        .vocabulary(vocabulary)
        .synonym_table(table)
        .build()?;

    // 4. Correction and expansion use the custom tables
    assert_eq!(engine.correct_spelling("printr"), "printer");

    let expanded = engine.expand_query("printr paper").await;
    assert_eq!(expanded[0], "printr paper");
    assert!(expanded.contains(&"printer".to_string()));
    assert!(expanded.contains(&"printing device".to_string()));
    assert!(expanded.contains(&"paper".to_string()));

    Ok(())
}

#[test]
fn test_comment_scoring_discount() -> Result<(), Box<dyn std::error::Error>> {
    let engine = QueryEngine::new()?;
    let terms = vec!["laundry".to_string()];
    let document = CandidateDocument::new("Laundry room hours", "the laundry room closes at ten");

    let post_score = engine.score_document_match(&document, &terms, false)?;
    let comment_score = engine.score_document_match(&document, &terms, true)?;

    assert!((post_score - 13.0).abs() < 1e-9);
    assert!((comment_score - 13.0 * 0.7).abs() < 1e-9);

    Ok(())
}

#[test]
fn test_intent_to_strategy_matrix() -> Result<(), Box<dyn std::error::Error>> {
    let engine = QueryEngine::new()?;

    // Questions prefer positively-rated answers
    let answers = engine.sorting_strategy(&engine.analyze_query("how do i connect to wifi"));
    assert_eq!(answers.sort_by, SortBy::Relevance);
    assert_eq!(
        answers.preferred_sentiments,
        Some(vec![Sentiment::Positive, Sentiment::SlightlyPositive])
    );
    assert_eq!(answers.min_upvotes, 1);

    // Problem reports look for working solutions
    let solutions = engine.sorting_strategy(&engine.analyze_query("my wifi is broken"));
    assert_eq!(
        solutions.preferred_sentiments,
        Some(vec![Sentiment::Positive, Sentiment::Neutral])
    );
    assert!(solutions.boost_solved);

    // Solution seekers browse popular solved threads
    let solved = engine.sorting_strategy(&engine.analyze_query("anyone solved this"));
    assert_eq!(solved.sort_by, SortBy::Popular);
    assert_eq!(solved.min_upvotes, 2);

    // Everything else stays unfiltered
    let general = engine.sorting_strategy(&engine.analyze_query("library opening hours"));
    assert_eq!(general.preferred_sentiments, None);
    assert!(!general.boost_solved);
    assert!(!general.boost_high_upvotes);

    Ok(())
}

#[test]
fn test_document_sentiment_feeds_boosting() -> Result<(), Box<dyn std::error::Error>> {
    let engine = QueryEngine::new()?;

    // 1. Summarize document bodies with the sentiment analyzer
    let thankful = engine.analyze_sentiment("thanks this solved my problem");
    assert_eq!(thankful.sentiment, Sentiment::SlightlyPositive);
    assert_eq!(thankful.category, Category::Discussion);

    let broken = engine.analyze_sentiment("broken wifi error");
    assert_eq!(broken.sentiment, Sentiment::Negative);
    assert_eq!(broken.category, Category::Problem);

    let neutral = engine.analyze_sentiment("where is the library");
    assert_eq!(neutral.sentiment, Sentiment::Neutral);
    assert_eq!(neutral.category, Category::General);

    // 2. Feed a summary back into intent boosting
    let analysis = engine.analyze_query("how do i fix this");
    let document = CandidateDocument::new("Campus wifi", "thanks this solved my problem")
        .with_text_score(10.0)
        .with_upvotes(8);
    let summary = DocumentSentiment::new(thankful.category, thankful.sentiment);

    let boosted = engine.boost_by_intent(&document, &analysis, Some(&summary));
    // No category bonus, only the upvote bonus.
    assert!((boosted - 14.0).abs() < 1e-9);

    Ok(())
}

#[tokio::test]
async fn test_shared_corrector_consistency() -> Result<(), Box<dyn std::error::Error>> {
    // Expansion, sentiment and classification see the same corrections.
    let engine = QueryEngine::new()?;

    let expanded = engine.expand_query("hostel rulez").await;
    assert!(expanded.contains(&"rules".to_string()));

    let tokens = engine.analyzer().tokens("hostel rulez");
    assert_eq!(tokens, vec!["hostel", "rules"]);

    let corrected = engine.correct_query("hostel rulez");
    assert_eq!(corrected.query(), "hostel rules");

    Ok(())
}

#[test]
fn test_builder_shares_one_corrector() -> Result<(), Box<dyn std::error::Error>> {
    // A tiny vocabulary propagates to every stage that corrects tokens.
    let engine = QueryEngine::builder()
        .vocabulary(Vocabulary::new(["garage", "garden"]))
        .build()?;

    assert_eq!(engine.correct_spelling("garge"), "garage");
    assert_eq!(engine.analyzer().tokens("garge"), vec!["garage"]);

    Ok(())
}
