//! Configuration updates: validation, atomicity and effect on ranking.

use super::common::{engine_with, ids, make_doc, newcastle_corpus, tags_vs_description_corpus};
use herdsearch::{BoostUpdate, ConfigError, Field, SearchConfig, SearchConfigUpdate, SearchEngine};

fn boost_update(boosts: BoostUpdate) -> SearchConfigUpdate {
    SearchConfigUpdate {
        boost_factors: Some(boosts),
        ..Default::default()
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

#[test]
fn test_negative_boost_rejected() {
    let engine = engine_with(newcastle_corpus());

    let err = engine
        .update_config(boost_update(BoostUpdate {
            name: Some(-1.0),
            ..Default::default()
        }))
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::NegativeBoost {
            field: Field::Name,
            ..
        }
    ));
    assert_eq!(engine.config(), SearchConfig::default());
}

#[test]
fn test_non_finite_boost_rejected() {
    let engine = SearchEngine::new();

    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let result = engine.update_config(boost_update(BoostUpdate {
            tags: Some(value),
            ..Default::default()
        }));
        assert!(result.is_err(), "accepted tags boost {}", value);
    }
    assert_eq!(engine.config(), SearchConfig::default());
}

#[test]
fn test_negative_fuzzy_distance_rejected() {
    let engine = SearchEngine::new();

    let err = engine
        .update_config(SearchConfigUpdate {
            max_fuzzy_distance: Some(-1),
            ..Default::default()
        })
        .unwrap_err();
    assert_eq!(err, ConfigError::InvalidFuzzyDistance(-1));
}

#[test]
fn test_rejected_update_applies_nothing() {
    let engine = SearchEngine::new();

    let update = SearchConfigUpdate {
        enable_fuzzy_search: Some(false),
        enable_stemming: Some(false),
        boost_factors: Some(BoostUpdate {
            name: Some(10.0),
            causes: Some(-0.5),
            ..Default::default()
        }),
        ..Default::default()
    };
    assert!(engine.update_config(update).is_err());
    assert_eq!(engine.config(), SearchConfig::default());
}

#[test]
fn test_zero_boost_allowed() {
    let engine = SearchEngine::new();

    engine
        .update_config(boost_update(BoostUpdate {
            description: Some(0.0),
            ..Default::default()
        }))
        .unwrap();
    assert_eq!(engine.config().boost_factors.description, 0.0);
}

#[test]
fn test_partial_update_keeps_other_values() {
    let engine = SearchEngine::new();

    engine
        .update_config(boost_update(BoostUpdate {
            tags: Some(4.0),
            ..Default::default()
        }))
        .unwrap();
    let config = engine.config();
    assert_eq!(config.boost_factors.tags, 4.0);
    assert_eq!(config.boost_factors.name, 3.0);
    assert!(config.enable_fuzzy_search);
    assert_eq!(config.max_fuzzy_distance, 2);
}

#[test]
fn test_with_config_rejects_invalid() {
    let mut config = SearchConfig::default();
    config.boost_factors.symptoms = f64::NAN;
    assert!(SearchEngine::with_config(config).is_err());
}

#[test]
fn test_config_deserializes_from_camel_case() {
    let update: SearchConfigUpdate =
        serde_json::from_str(r#"{ "enableFuzzySearch": false, "boostFactors": { "name": 5 } }"#)
            .unwrap();
    let next = update.apply_to(&SearchConfig::default()).unwrap();
    assert!(!next.enable_fuzzy_search);
    assert_eq!(next.boost_factors.name, 5.0);
}

// ============================================================================
// EFFECT ON RESULTS
// ============================================================================

#[test]
fn test_boost_change_reorders_results() {
    let engine = engine_with(tags_vs_description_corpus());
    assert_eq!(ids(&engine.search("viral")), vec!["d1", "d2"]);

    engine
        .update_config(boost_update(BoostUpdate {
            tags: Some(0.5),
            ..Default::default()
        }))
        .unwrap();
    assert_eq!(ids(&engine.search("viral")), vec!["d2", "d1"]);
}

#[test]
fn test_stemming_change_needs_rebuild_for_index() {
    let engine = engine_with(vec![make_doc("d1", "Swallowing difficulty")]);
    assert_eq!(ids(&engine.search("swallowing")), vec!["d1"]);

    engine
        .update_config(SearchConfigUpdate {
            enable_stemming: Some(false),
            ..Default::default()
        })
        .unwrap();
    // The index still holds "swallow"; the raw query word is three edits away
    assert!(engine.search("swallowing").is_empty());

    engine.build_index(vec![make_doc("d1", "Swallowing difficulty")]);
    assert_eq!(ids(&engine.search("swallowing")), vec!["d1"]);
}

#[test]
fn test_synonyms_disabled_at_build() {
    let engine = SearchEngine::new();
    engine
        .update_config(SearchConfigUpdate {
            enable_synonyms: Some(false),
            ..Default::default()
        })
        .unwrap();
    engine.build_index(vec![make_doc("d1", "Poultry pox")]);
    assert!(engine.search("chicken").is_empty());

    let with_synonyms = engine_with(vec![make_doc("d1", "Poultry pox")]);
    assert_eq!(ids(&with_synonyms.search("chicken")), vec!["d1"]);
}
