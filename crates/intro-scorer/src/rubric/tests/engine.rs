use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use super::common::*;
use crate::collaborators::CollaboratorError;
use crate::rubric::{
    assemble, CollaboratorOutcome, RubricCategory, RubricScorer, ScoreResult, ScoringError,
};

fn assert_invariants(result: &ScoreResult) {
    assert!((0.0..=100.0).contains(&result.overall_score));
    let mut total = 0u16;
    for criterion in &result.criteria {
        let sum: u16 = criterion
            .subcomponents
            .iter()
            .map(|sub| u16::from(sub.points()))
            .sum();
        assert_eq!(u16::from(criterion.final_score), sum, "{:?}", criterion.category);
        assert!(criterion.final_score <= criterion.max_score);
        assert_eq!(criterion.max_score, criterion.category.max_score());
        total += u16::from(criterion.final_score);
    }
    assert_eq!(result.overall_score, f64::from(total));
}

#[tokio::test]
async fn sample_introduction_category_contributions() {
    let scorer = scorer(StaticGrammar::with_issues(0), StaticSentiment::positive(0.5));

    let result = scorer.score(ALEX_INTRO, None).await.expect("scores");

    assert_eq!(result.word_count, 27);
    let content = result
        .criterion(RubricCategory::ContentStructure)
        .expect("content criterion");
    assert_eq!(content.subcomponent("salutation").and_then(|s| s.score), Some(2));
    let keywords = content
        .subcomponent("keyword_presence")
        .and_then(|s| s.score)
        .expect("keyword score");
    assert!(keywords >= 22);
    assert_eq!(result.category_score(RubricCategory::SpeechRate), 0);
    let speech = result
        .criterion(RubricCategory::SpeechRate)
        .expect("speech rate criterion");
    assert!(!speech.scored);
    assert_eq!(speech.max_score, 10);
    assert_eq!(result.category_score(RubricCategory::LanguageGrammar), 18);
    assert_eq!(result.category_score(RubricCategory::Engagement), 9);
    assert!(!result.degraded);
    assert_invariants(&result);
}

#[tokio::test]
async fn criteria_follow_rubric_order() {
    let scorer = scorer(StaticGrammar::default(), StaticSentiment::positive(0.2));

    let result = scorer.score(ORDERED_INTRO, Some(40.0)).await.expect("scores");

    let order: Vec<_> = result.criteria.iter().map(|c| c.category).collect();
    assert_eq!(order, RubricCategory::ordered().to_vec());
    assert_invariants(&result);
}

#[tokio::test]
async fn blank_transcript_is_rejected() {
    let scorer = scorer(StaticGrammar::default(), StaticSentiment::positive(0.5));

    for text in ["", "   ", "\n\t "] {
        let err = scorer.score(text, Some(30.0)).await.expect_err("blank input");
        assert!(matches!(err, ScoringError::InvalidInput { .. }));
    }
}

#[tokio::test]
async fn scoring_is_idempotent() {
    let scorer = scorer(StaticGrammar::with_issues(1), StaticSentiment::positive(0.72));

    let first = scorer.score(ORDERED_INTRO, Some(25.0)).await.expect("scores");
    let second = scorer.score(ORDERED_INTRO, Some(25.0)).await.expect("scores");

    assert_eq!(first, second);
    assert_eq!(
        first.to_json_pretty().expect("serializes"),
        second.to_json_pretty().expect("serializes")
    );
}

#[tokio::test]
async fn grammar_failure_degrades_instead_of_failing() {
    let scorer = scorer(FailingGrammar, StaticSentiment::positive(0.5));

    let result = scorer.score(ALEX_INTRO, None).await.expect("still scores");

    assert!(result.degraded);
    assert_eq!(result.diagnostics.len(), 1);
    let diagnostic = &result.diagnostics[0];
    assert_eq!(diagnostic.category, RubricCategory::LanguageGrammar);
    assert_eq!(diagnostic.sub_item, "grammar");
    assert_eq!(diagnostic.collaborator, "failing-grammar");
    let grammar = result
        .criterion(RubricCategory::LanguageGrammar)
        .and_then(|c| c.subcomponent("grammar"))
        .expect("grammar sub-score");
    assert_eq!(grammar.score, Some(2));
    assert_invariants(&result);
}

#[tokio::test]
async fn slow_grammar_check_times_out() {
    let scorer = scorer(HangingGrammar, StaticSentiment::positive(0.5));

    let result = scorer.score(ALEX_INTRO, None).await.expect("still scores");

    assert!(result.degraded);
    assert!(result.diagnostics[0].message.contains("timed out after 50ms"));
}

#[tokio::test]
async fn malformed_sentiment_degrades_engagement() {
    let scorer = scorer(StaticGrammar::default(), MalformedSentiment);

    let result = scorer.score(ALEX_INTRO, None).await.expect("still scores");

    assert!(result.degraded);
    assert_eq!(result.category_score(RubricCategory::Engagement), 3);
    assert_eq!(result.diagnostics[0].category, RubricCategory::Engagement);
    assert_eq!(result.diagnostics[0].collaborator, "malformed-sentiment");
}

#[tokio::test]
async fn wordless_transcript_skips_grammar_checker() {
    let grammar = Arc::new(StaticGrammar::with_issues(3));
    let scorer = RubricScorer::new(
        grammar.clone(),
        Arc::new(StaticSentiment::positive(0.0)),
        test_config(),
    );

    let result = scorer.score("... !!! ???", Some(10.0)).await.expect("scores");

    assert_eq!(grammar.calls.load(Ordering::SeqCst), 0);
    assert_eq!(result.word_count, 0);
    assert_eq!(result.category_score(RubricCategory::LanguageGrammar), 0);
    assert_eq!(result.category_score(RubricCategory::Clarity), 0);
    assert_invariants(&result);
}

#[tokio::test]
async fn close_releases_both_collaborators() {
    let grammar = Arc::new(StaticGrammar::default());
    let sentiment = Arc::new(StaticSentiment::positive(0.5));
    let scorer = RubricScorer::new(grammar.clone(), sentiment.clone(), test_config());

    scorer.close().await;

    assert!(grammar.closed.load(Ordering::SeqCst));
    assert!(sentiment.closed.load(Ordering::SeqCst));
}

#[test]
fn scorer_exposes_the_configuration_it_was_built_with() {
    let scorer = scorer(StaticGrammar::default(), StaticSentiment::positive(0.5));

    assert_eq!(scorer.config(), &test_config());
    assert_eq!(scorer.config().grammar_timeout, Duration::from_millis(50));
}

#[test]
fn assemble_sums_categories_into_overall() {
    let transcript = transcript(ORDERED_INTRO);
    let word_count = transcript.word_count();
    let duration = word_count as f64 / 2.0;

    let result = assemble(
        &transcript,
        Some(duration),
        CollaboratorOutcome::ok("grammar", 0),
        CollaboratorOutcome::ok("sentiment", 0.95),
    );

    // 120 WPM with the duration above.
    assert_eq!(result.category_score(RubricCategory::SpeechRate), 10);
    assert_eq!(result.category_score(RubricCategory::Engagement), 15);
    assert_eq!(
        result
            .criterion(RubricCategory::ContentStructure)
            .and_then(|c| c.subcomponent("flow"))
            .and_then(|s| s.score),
        Some(5)
    );
    assert_invariants(&result);
}

#[test]
fn assemble_records_one_diagnostic_per_failed_collaborator() {
    let transcript = transcript(ALEX_INTRO);

    let result = assemble(
        &transcript,
        None,
        CollaboratorOutcome::failed(
            "languagetool",
            CollaboratorError::Unavailable("refused".to_string()),
        ),
        CollaboratorOutcome::failed(
            "vader",
            CollaboratorError::Malformed("bad".to_string()),
        ),
    );

    assert!(result.degraded);
    let sub_items: Vec<_> = result.diagnostics.iter().map(|d| d.sub_item).collect();
    assert_eq!(sub_items, vec!["grammar", "sentiment"]);
    assert_invariants(&result);
}

#[test]
fn serialized_result_keeps_nested_shape() {
    let transcript = transcript(ALEX_INTRO);
    let result = assemble(
        &transcript,
        None,
        CollaboratorOutcome::ok("grammar", 1),
        CollaboratorOutcome::ok("sentiment", 0.4),
    );

    let value = serde_json::to_value(&result).expect("serializes");

    assert_eq!(value["word_count"], 27);
    assert_eq!(value["criteria"][0]["name"], "Content & Structure");
    assert_eq!(value["criteria"][0]["category"], "content_structure");
    assert_eq!(
        value["criteria"][0]["subcomponents"][1]["measurement"]["must_have_present"]["age"],
        true
    );
    assert!(value["criteria"][1]["subcomponents"][0]["score"].is_null());
    assert_eq!(value["criteria"][1]["final_score"], 0);
    assert_eq!(value["degraded"], false);
}
