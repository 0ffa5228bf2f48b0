//! Query cache: identity on hits, FIFO eviction, invalidation.

use super::common::{engine_with, make_doc, newcastle_corpus};
use herdsearch::{cache::DEFAULT_CAPACITY, SearchConfigUpdate};
use std::sync::Arc;

#[test]
fn test_repeat_query_returns_same_allocation() {
    let engine = engine_with(newcastle_corpus());

    let first = engine.search("newcastle");
    let second = engine.search("newcastle");
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(engine.stats().cache_size, 1);
}

#[test]
fn test_case_and_padding_share_an_entry() {
    let engine = engine_with(newcastle_corpus());

    let first = engine.search("NEWCASTLE ");
    let second = engine.search(" newcastle");
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_misses_are_cached_too() {
    let engine = engine_with(newcastle_corpus());

    let first = engine.search("zzzznotfound");
    assert!(first.is_empty());
    assert_eq!(engine.stats().cache_size, 1);
    assert!(Arc::ptr_eq(&first, &engine.search("zzzznotfound")));
}

#[test]
fn test_empty_query_not_cached() {
    let engine = engine_with(newcastle_corpus());

    engine.search("");
    engine.search("   ");
    assert_eq!(engine.stats().cache_size, 0);
}

#[test]
fn test_rebuild_forces_recomputation() {
    let engine = engine_with(newcastle_corpus());
    let before = engine.search("newcastle");

    engine.build_index(newcastle_corpus());
    assert_eq!(engine.stats().cache_size, 0);

    let after = engine.search("newcastle");
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(before.len(), after.len());
    assert_eq!(before[0].score, after[0].score);
}

#[test]
fn test_rebuild_with_new_corpus_changes_results() {
    let engine = engine_with(newcastle_corpus());
    assert_eq!(engine.search("rabies").len(), 0);

    engine.build_index(vec![make_doc("r1", "Rabies")]);
    let results = engine.search("rabies");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].document.id, "r1");
}

#[test]
fn test_config_update_clears_cache() {
    let engine = engine_with(newcastle_corpus());
    let before = engine.search("newcastle");

    engine
        .update_config(SearchConfigUpdate {
            max_fuzzy_distance: Some(1),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(engine.stats().cache_size, 0);
    assert!(!Arc::ptr_eq(&before, &engine.search("newcastle")));
}

#[test]
fn test_clear_cache() {
    let engine = engine_with(newcastle_corpus());
    engine.search("newcastle");
    engine.search("fever");

    engine.clear_cache();
    let stats = engine.stats();
    assert_eq!(stats.cache_size, 0);
    assert_eq!(stats.total_diseases, 1);
}

#[test]
fn test_fifo_eviction_at_capacity() {
    let engine = engine_with(newcastle_corpus());

    let oldest = engine.search("query000");
    let second = engine.search("query001");
    for i in 2..DEFAULT_CAPACITY {
        engine.search(&format!("query{:03}", i));
    }
    assert_eq!(engine.stats().cache_size, DEFAULT_CAPACITY);

    // Reading the oldest entry does not protect it
    assert!(Arc::ptr_eq(&oldest, &engine.search("query000")));

    engine.search("one more query");
    assert_eq!(engine.stats().cache_size, DEFAULT_CAPACITY);
    assert!(Arc::ptr_eq(&second, &engine.search("query001")));
    assert!(!Arc::ptr_eq(&oldest, &engine.search("query000")));
}
