//! Field weighting, position bonus and tie handling.

use super::common::{engine_with, ids, make_doc, make_full_doc, result_for};
use herdsearch::Field;

// ============================================================================
// FIELD WEIGHTS
// ============================================================================

#[test]
fn test_name_outranks_symptoms() {
    let engine = engine_with(vec![
        make_full_doc("symptom", "Bravo", "", &["fever"], &[], &[]),
        make_full_doc("name", "Fever Syndrome", "", &[], &[], &[]),
    ]);

    let results = engine.search("fever");
    assert_eq!(ids(&results), vec!["name", "symptom"]);
}

#[test]
fn test_earlier_position_ranks_higher() {
    let engine = engine_with(vec![
        make_full_doc("late", "Alpha", "cough and fever", &[], &[], &[]),
        make_full_doc("early", "Bravo", "fever and cough", &[], &[], &[]),
    ]);

    let results = engine.search("fever");
    assert_eq!(ids(&results), vec!["early", "late"]);
}

#[test]
fn test_whole_word_beats_embedded_substring() {
    // The category puts "pox" in the index without scoring it
    let mut embedded = make_full_doc("embedded", "Alpha", "", &[], &[], &["poxvirus"]);
    embedded.category = Some("Pox".into());
    let engine = engine_with(vec![
        embedded,
        make_full_doc("whole", "Bravo", "", &[], &[], &["pox"]),
    ]);

    let results = engine.search("pox");
    let embedded = result_for(&results, "embedded").unwrap();
    let whole = result_for(&results, "whole").unwrap();
    assert!(whole.score > embedded.score);
    assert!(embedded.matched_fields.contains(&Field::Tags));
}

// ============================================================================
// ACCUMULATION
// ============================================================================

#[test]
fn test_multi_word_scores_add_up() {
    let doc = make_full_doc("d1", "Newcastle Disease", "", &["twisted neck"], &[], &[]);
    let engine = engine_with(vec![doc]);

    let twisted = engine.search("twisted")[0].score;
    let neck = engine.search("neck")[0].score;
    let both = engine.search("twisted neck")[0].score;
    assert!((both - (twisted + neck)).abs() < 1e-9);
}

#[test]
fn test_matched_fields_union_across_words() {
    let doc = make_full_doc("d1", "Newcastle Disease", "", &["twisted neck"], &[], &[]);
    let engine = engine_with(vec![doc]);

    let results = engine.search("newcastle neck");
    assert_eq!(
        results[0].matched_fields.iter().copied().collect::<Vec<_>>(),
        vec![Field::Name, Field::Symptoms]
    );
}

// ============================================================================
// TIES AND ZERO SCORES
// ============================================================================

#[test]
fn test_ties_keep_corpus_order() {
    let engine = engine_with(vec![
        make_doc("a", "Rabies"),
        make_doc("b", "Rabies"),
        make_doc("c", "Rabies"),
    ]);

    let results = engine.search("rabies");
    assert_eq!(ids(&results), vec!["a", "b", "c"]);
    assert_eq!(results[0].score, results[2].score);
}

#[test]
fn test_stem_match_without_literal_scores_zero() {
    let engine = engine_with(vec![make_doc("d1", "Swallowing difficulty")]);

    // "swallowed" and "swallowing" share the key "swallow", but the literal
    // query word never appears in the text
    let results = engine.search("swallowed");
    assert_eq!(ids(&results), vec!["d1"]);
    assert_eq!(results[0].score, 0.0);
    assert!(results[0].matched_fields.is_empty());
    assert!(results[0]
        .highlighted_text
        .values()
        .all(|text| !text.contains("<mark>")));
    assert_eq!(results[0].highlighted_text[&Field::Name], "Swallowing difficulty");
}

#[test]
fn test_zero_score_results_rank_last() {
    let engine = engine_with(vec![
        make_doc("stem-only", "Swallowing difficulty"),
        make_full_doc("literal", "Bravo", "swallowed objects", &[], &[], &[]),
    ]);

    let results = engine.search("swallowed");
    assert_eq!(ids(&results), vec!["literal", "stem-only"]);
    assert!(results[0].score > 0.0);
    assert_eq!(results[1].score, 0.0);
}
