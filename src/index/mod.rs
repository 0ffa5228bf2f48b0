// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index construction.
//!
//! Maps each index key (a stemmed token, or the raw token when stemming is off)
//! to the ascending list of corpus positions that contain it. Built wholesale
//! from a corpus snapshot; there is no way to patch an index in place.
//!
//! # INVARIANTS
//!
//! 1. **POSTINGS_SORTED**: each posting list is strictly ascending (sorted, no duplicates)
//! 2. **POSTINGS_IN_BOUNDS**: every position is `< doc_count`
//! 3. **NON_EMPTY**: every key has at least one posting
//! 4. **VOCABULARY_ORDER**: `terms()` yields keys in first-insertion order, which
//!    is corpus order then token order. Suggestions depend on this being stable.

use crate::text::{synonym_group, tokenize, Stemmer};
use crate::types::Document;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::borrow::Borrow;
use std::collections::HashMap;

/// Which text-processing stages contribute keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOptions {
    pub stemming: bool,
    pub synonyms: bool,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            stemming: true,
            synonyms: true,
        }
    }
}

/// Key → postings, with the vocabulary kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    slots: HashMap<String, usize>,
    terms: Vec<String>,
    postings: Vec<Vec<usize>>,
    doc_count: usize,
}

impl InvertedIndex {
    /// An index over no documents.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an index over `docs`. A document's key is its position in the slice.
    ///
    /// Key extraction runs per document (in parallel with the `parallel` feature);
    /// merging is sequential in corpus order, so both paths produce the same index.
    pub fn build<D>(docs: &[D], stemmer: &Stemmer, options: IndexOptions) -> Self
    where
        D: Borrow<Document> + Sync,
    {
        // MAP PHASE: per-document keys
        #[cfg(feature = "parallel")]
        let per_doc_keys: Vec<Vec<String>> = docs
            .par_iter()
            .map(|doc| document_keys(doc.borrow(), stemmer, options))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let per_doc_keys: Vec<Vec<String>> = docs
            .iter()
            .map(|doc| document_keys(doc.borrow(), stemmer, options))
            .collect();

        // REDUCE PHASE: merge in corpus order
        let mut index = Self {
            doc_count: docs.len(),
            ..Self::default()
        };
        for (position, keys) in per_doc_keys.into_iter().enumerate() {
            for key in keys {
                index.insert(key, position);
            }
        }
        index
    }

    /// Record `position` under `key`. Positions arrive in ascending order, so
    /// checking the tail is enough to keep each list duplicate-free.
    fn insert(&mut self, key: String, position: usize) {
        let slot = match self.slots.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.terms.len();
                self.slots.insert(key.clone(), slot);
                self.terms.push(key);
                self.postings.push(Vec::new());
                slot
            }
        };
        let list = &mut self.postings[slot];
        if list.last() != Some(&position) {
            list.push(position);
        }
    }

    /// Positions of documents containing `key`, ascending. Empty for unknown keys.
    pub fn postings(&self, key: &str) -> &[usize] {
        self.slots
            .get(key)
            .map_or(&[][..], |&slot| self.postings[slot].as_slice())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    /// Vocabulary in insertion order.
    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.terms.iter().map(String::as_str)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of documents the index was built over.
    pub fn doc_count(&self) -> usize {
        self.doc_count
    }
}

/// Every key a document contributes, in token order. May repeat.
fn document_keys(doc: &Document, stemmer: &Stemmer, options: IndexOptions) -> Vec<String> {
    let key_for = |word: &str| {
        if options.stemming {
            stemmer.stem(word)
        } else {
            word.to_string()
        }
    };

    let mut keys = Vec::new();
    for token in tokenize(&doc.searchable_text()) {
        keys.push(key_for(&token));
        if options.synonyms {
            if let Some(group) = synonym_group(&token) {
                keys.extend(group.iter().map(|synonym| key_for(*synonym)));
            }
        }
    }
    keys
}
