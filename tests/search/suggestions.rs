//! Typeahead suggestions.

use super::common::{engine_with, make_doc, sample_corpus};
use herdsearch::SearchConfigUpdate;

#[test]
fn test_prefix_phase_items_start_with_prefix() {
    let engine = engine_with(sample_corpus());

    let found = engine.suggestions("Dia", 2);
    assert_eq!(found.len(), 2);
    for suggestion in &found {
        assert!(suggestion.starts_with("dia"), "{} does not start with dia", suggestion);
    }
    assert!(found.contains(&"diarrhea".to_string()));
}

#[test]
fn test_limit_respected() {
    let engine = engine_with(sample_corpus());

    for limit in 0..6 {
        assert!(engine.suggestions("co", limit).len() <= limit);
    }
    assert!(engine.suggestions("co", 0).is_empty());
}

#[test]
fn test_short_prefix_returns_nothing() {
    let engine = engine_with(sample_corpus());

    assert!(engine.suggestions("", 5).is_empty());
    assert!(engine.suggestions("d", 5).is_empty());
}

#[test]
fn test_suggestions_are_index_keys() {
    let engine = engine_with(vec![make_doc("d1", "Swallowing difficulty")]);

    // The vocabulary holds the stem, not the surface form
    assert_eq!(engine.suggestions("swal", 5), vec!["swallow"]);
}

#[test]
fn test_fuzzy_fill_follows_config() {
    let engine = engine_with(vec![make_doc("d1", "Rabies")]);

    assert_eq!(engine.suggestions("rabis", 5), vec!["rabies"]);

    engine
        .update_config(SearchConfigUpdate {
            enable_fuzzy_search: Some(false),
            ..Default::default()
        })
        .unwrap();
    assert!(engine.suggestions("rabis", 5).is_empty());
}

#[test]
fn test_uppercase_typo_gets_no_fuzzy_fill() {
    let engine = engine_with(vec![make_doc("d1", "Rabies")]);

    assert!(engine.suggestions("RABIS", 5).is_empty());
    assert_eq!(engine.suggestions("RAB", 5), vec!["rabies"]);
}

#[test]
fn test_suggestions_before_build() {
    let engine = herdsearch::SearchEngine::new();
    assert!(engine.suggestions("ra", 5).is_empty());
}
