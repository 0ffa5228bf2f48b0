// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! A linear scan over the vocabulary. Every key is compared against the query
//! term, so a query costs O(|vocabulary| × key length). That is fine for a
//! reference corpus of a few hundred entries and wrong for anything much larger.

mod levenshtein;

pub use levenshtein::*;

use crate::index::InvertedIndex;

/// Vocabulary keys within `max_distance` edits of `term`, excluding `term` itself.
///
/// Distance 0 is an exact match, which the caller already looked up. Keys come
/// back in vocabulary order.
pub fn fuzzy_terms<'a>(index: &'a InvertedIndex, term: &str, max_distance: usize) -> Vec<&'a str> {
    if max_distance == 0 {
        return Vec::new();
    }
    index
        .terms()
        .filter(|key| matches!(distance_within(term, key, max_distance), Some(d) if d > 0))
        .collect()
}
