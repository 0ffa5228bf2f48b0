//! Shared-engine use from several threads.
//!
//! Readers must always see one whole generation: results sorted, positions
//! pointing into the corpus they were ranked against.

use super::common::{engine_with, make_doc, sample_corpus};
use herdsearch::{SearchConfigUpdate, SearchEngine};
use std::sync::Arc;
use std::thread;

const QUERIES: [&str; 6] = ["diarrhea", "viral", "hoof", "mastitus", "fever", "twisted neck"];

#[test]
fn test_concurrent_searches_agree() {
    let engine = Arc::new(engine_with(sample_corpus()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                QUERIES
                    .iter()
                    .map(|query| {
                        engine
                            .search(query)
                            .iter()
                            .map(|r| (r.document.id.clone(), r.score))
                            .collect::<Vec<_>>()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let outputs: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for output in &outputs[1..] {
        assert_eq!(output, &outputs[0]);
    }
}

#[test]
fn test_readers_during_rebuilds_and_config_changes() {
    let engine = SearchEngine::new();
    engine.build_index(sample_corpus());

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for round in 0..50 {
                    let query = QUERIES[round % QUERIES.len()];
                    let results = engine.search(query);
                    for pair in results.windows(2) {
                        assert!(pair[0].score >= pair[1].score);
                    }
                    for result in results.iter() {
                        assert!(result.score.is_finite() && result.score >= 0.0);
                    }
                    assert!(engine.suggestions("di", 3).len() <= 3);
                    let stats = engine.stats();
                    assert!(stats.total_diseases == 1 || stats.total_diseases == 5);
                }
            });
        }

        scope.spawn(|| {
            for round in 0..20 {
                if round % 2 == 0 {
                    engine.build_index(vec![make_doc("solo", "Fever of unknown origin")]);
                } else {
                    engine.build_index(sample_corpus());
                }
                engine
                    .update_config(SearchConfigUpdate {
                        enable_fuzzy_search: Some(round % 3 != 0),
                        ..Default::default()
                    })
                    .unwrap();
                engine.clear_cache();
            }
        });
    });

    assert_eq!(engine.generation(), 21);
}
