// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine: one explicit, constructible object per index.
//!
//! # Generations
//!
//! Everything derived from a corpus (the documents, their lowercase field texts,
//! the inverted index, the query cache) lives in one immutable `Generation`
//! behind an `Arc`. Readers clone the `Arc` under a short read lock and work
//! against that snapshot with no lock held. Writers build a replacement outside
//! the lock and only swap it in under the write lock.
//!
//! The query cache belongs to its generation, so the cache can never outlive or
//! lag the index it was computed from. A search that races a rebuild writes its
//! results into the old generation's cache, which is dropped with it.
//!
//! | Operation       | Lock  | Effect |
//! |-----------------|-------|--------|
//! | `build_index`   | read, then write for the swap | new generation (new corpus, index, empty cache) |
//! | `update_config` | write | new config; same index, empty cache |
//! | `clear_cache`   | write | same index, empty cache |
//! | `search`        | read  | may fill the current generation's cache |
//! | `suggestions`   | read  | - |
//! | `stats`         | read  | - |
//!
//! The stem memo is engine-wide and survives all of the above.

use crate::cache::{QueryCache, SharedResults};
use crate::config::{ConfigError, SearchConfig, SearchConfigUpdate};
use crate::contracts;
use crate::fuzzy::fuzzy_terms;
use crate::index::InvertedIndex;
use crate::scoring::{score_fields, FieldTexts, Highlighter, QueryTerm, ScoreBoard};
use crate::suggest;
use crate::text::{normalize_query, tokenize, Stemmer};
use crate::types::{Document, SearchResult, SearchStats};
use parking_lot::{Mutex, RwLock};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// One corpus snapshot and everything computed from it.
#[derive(Debug)]
struct Generation {
    id: u64,
    corpus: Arc<[Arc<Document>]>,
    texts: Arc<[FieldTexts]>,
    index: Arc<InvertedIndex>,
    cache: Mutex<QueryCache>,
}

impl Generation {
    fn empty() -> Self {
        Self {
            id: 0,
            corpus: Arc::from(Vec::new()),
            texts: Arc::from(Vec::new()),
            index: Arc::new(InvertedIndex::empty()),
            cache: Mutex::new(QueryCache::new()),
        }
    }

    /// Same corpus and index, empty cache.
    fn with_fresh_cache(&self) -> Self {
        Self {
            id: self.id,
            corpus: Arc::clone(&self.corpus),
            texts: Arc::clone(&self.texts),
            index: Arc::clone(&self.index),
            cache: Mutex::new(QueryCache::new()),
        }
    }
}

#[derive(Debug)]
struct EngineState {
    config: SearchConfig,
    generation: Arc<Generation>,
}

/// In-memory fuzzy search over a disease corpus.
///
/// Cheap to construct and fully independent of other instances. Safe to share
/// across threads (`Send + Sync`).
#[derive(Debug)]
pub struct SearchEngine {
    state: RwLock<EngineState>,
    stemmer: Stemmer,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchEngine {
    /// An engine with default config and an empty index.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(EngineState {
                config: SearchConfig::default(),
                generation: Arc::new(Generation::empty()),
            }),
            stemmer: Stemmer::new(),
        }
    }

    /// An engine with a custom config, rejected if invalid.
    pub fn with_config(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let engine = Self::new();
        engine.state.write().config = config;
        Ok(engine)
    }

    /// Replace the corpus and rebuild the index from scratch.
    ///
    /// Clears the query cache as a side effect. Idempotent: the same corpus and
    /// config always produce the same index.
    pub fn build_index<I>(&self, documents: I)
    where
        I: IntoIterator<Item = Document>,
    {
        let corpus: Arc<[Arc<Document>]> = documents.into_iter().map(Arc::new).collect();
        let texts: Arc<[FieldTexts]> = corpus.iter().map(|doc| FieldTexts::new(doc)).collect();

        // Readers keep the old generation until the swap below
        let options = self.state.read().config.index_options();
        let index = InvertedIndex::build(&corpus[..], &self.stemmer, options);
        contracts::check_index_well_formed(&index);

        let mut state = self.state.write();
        let id = state.generation.id + 1;

        debug!(
            generation = id,
            documents = corpus.len(),
            terms = index.len(),
            "built search index"
        );

        state.generation = Arc::new(Generation {
            id,
            corpus,
            texts,
            index: Arc::new(index),
            cache: Mutex::new(QueryCache::new()),
        });
    }

    /// Ranked results for a free-text query.
    ///
    /// Never fails: empty, whitespace-only and symbol-only queries return an
    /// empty list. Repeating a query within one generation returns the same
    /// `Arc` (check with `Arc::ptr_eq`).
    pub fn search(&self, query: &str) -> SharedResults {
        let key = normalize_query(query);
        if key.is_empty() {
            return Arc::from(Vec::new());
        }

        let (config, generation) = self.snapshot();
        if let Some(hit) = generation.cache.lock().get(&key) {
            trace!(query = %key, generation = generation.id, "query cache hit");
            return hit;
        }

        let results: SharedResults = self.rank(&key, &config, &generation).into();
        contracts::check_results(&results, generation.corpus.len());

        let mut cache = generation.cache.lock();
        // Another reader may have computed the same query meanwhile; keep theirs
        // so every caller in this generation sees one allocation.
        if let Some(existing) = cache.get(&key) {
            return existing;
        }
        if let Some(evicted) = cache.insert(key, Arc::clone(&results)) {
            trace!(evicted = %evicted, "query cache full, evicted oldest entry");
        }
        results
    }

    fn rank(&self, query: &str, config: &SearchConfig, generation: &Generation) -> Vec<SearchResult> {
        let words = tokenize(query);
        if words.is_empty() {
            return Vec::new();
        }

        let index = &generation.index;
        let fuzzy_distance = config
            .enable_fuzzy_search
            .then_some(config.max_fuzzy_distance as usize);
        let mut board = ScoreBoard::new();

        for word in &words {
            let key = if config.enable_stemming {
                self.stemmer.stem(word)
            } else {
                word.clone()
            };

            // Exact postings first, then fuzzy postings, each position once
            let mut seen: HashSet<usize> = HashSet::new();
            let mut candidates: Vec<usize> = Vec::new();
            let exact = index.postings(&key).iter();
            let fuzzy = fuzzy_distance
                .map(|max| fuzzy_terms(index, &key, max))
                .unwrap_or_default();
            let fuzzy_postings = fuzzy.iter().flat_map(|term| index.postings(term));
            for &position in exact.chain(fuzzy_postings) {
                if seen.insert(position) {
                    candidates.push(position);
                }
            }

            let term = QueryTerm::new(word);
            for position in candidates {
                let scores = score_fields(&term, &generation.texts[position], &config.boost_factors);
                board.add(position, scores);
            }
        }

        trace!(query, words = words.len(), candidates = board.len(), "scored query");

        let highlighter = Highlighter::new(&words);
        board
            .into_ranked()
            .into_iter()
            .map(|candidate| {
                let document = Arc::clone(&generation.corpus[candidate.position]);
                let highlighted_text = highlighter.highlight_document(&document);
                SearchResult {
                    document,
                    position: candidate.position,
                    score: candidate.score,
                    matched_fields: candidate.matched_fields,
                    highlighted_text,
                }
            })
            .collect()
    }

    /// Up to `limit` vocabulary keys for a typeahead prefix.
    ///
    /// Prefix matches first, then fuzzy matches if fuzzy search is enabled.
    /// Prefixes shorter than two chars return nothing.
    pub fn suggestions(&self, prefix: &str, limit: usize) -> Vec<String> {
        let (config, generation) = self.snapshot();
        let fuzzy_distance = config
            .enable_fuzzy_search
            .then_some(config.max_fuzzy_distance as usize);
        let found = suggest::suggestions(&generation.index, prefix, limit, fuzzy_distance);
        contracts::check_suggestions(&found, limit);
        found
    }

    /// Merge a partial config. Invalid updates are rejected whole.
    ///
    /// Clears the query cache. Stemming and synonym changes only affect the
    /// index at the next `build_index`; query-side stemming follows the new
    /// setting immediately.
    pub fn update_config(&self, update: SearchConfigUpdate) -> Result<(), ConfigError> {
        let mut state = self.state.write();
        let next = match update.apply_to(&state.config) {
            Ok(next) => next,
            Err(err) => {
                warn!(error = %err, "rejected search config update");
                return Err(err);
            }
        };
        debug!(?next, "search config updated");
        state.config = next;
        state.generation = Arc::new(state.generation.with_fresh_cache());
        Ok(())
    }

    /// Drop every cached query. The index and stem memo are untouched.
    pub fn clear_cache(&self) {
        let mut state = self.state.write();
        state.generation = Arc::new(state.generation.with_fresh_cache());
        trace!("query cache cleared");
    }

    pub fn stats(&self) -> SearchStats {
        let (_, generation) = self.snapshot();
        let index_size = generation.index.len();
        let total_diseases = generation.corpus.len();
        let average_words_per_disease = if total_diseases == 0 {
            0.0
        } else {
            index_size as f64 / total_diseases as f64
        };
        let cache_size = generation.cache.lock().len();
        SearchStats {
            index_size,
            cache_size,
            total_diseases,
            average_words_per_disease,
        }
    }

    /// Current config.
    pub fn config(&self) -> SearchConfig {
        self.state.read().config
    }

    /// The indexed corpus, in position order.
    pub fn documents(&self) -> Arc<[Arc<Document>]> {
        Arc::clone(&self.state.read().generation.corpus)
    }

    /// Number of successful `build_index` calls so far.
    pub fn generation(&self) -> u64 {
        self.state.read().generation.id
    }

    /// Number of words in the stem memo.
    pub fn stem_cache_len(&self) -> usize {
        self.stemmer.cache_len()
    }

    fn snapshot(&self) -> (SearchConfig, Arc<Generation>) {
        let state = self.state.read();
        (state.config, Arc::clone(&state.generation))
    }
}
