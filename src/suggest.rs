// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typeahead suggestions straight from the index vocabulary.
//!
//! Two phases: vocabulary keys that start with the lowercased prefix, then (if
//! there is room and fuzzy search is on) keys within edit distance of the prefix
//! exactly as typed. Suggestions
//! are index keys, so they come back stemmed. Order is vocabulary order within
//! each phase; nothing is ranked.

use crate::fuzzy::fuzzy_terms;
use crate::index::InvertedIndex;

/// Prefixes shorter than this produce no suggestions.
pub const MIN_PREFIX_CHARS: usize = 2;

/// Up to `limit` vocabulary keys for `prefix`.
///
/// `fuzzy_distance` is `None` when fuzzy search is disabled.
pub fn suggestions(
    index: &InvertedIndex,
    prefix: &str,
    limit: usize,
    fuzzy_distance: Option<usize>,
) -> Vec<String> {
    if prefix.chars().count() < MIN_PREFIX_CHARS || limit == 0 {
        return Vec::new();
    }
    let lowered = prefix.to_lowercase();

    let mut found: Vec<String> = index
        .terms()
        .filter(|term| term.starts_with(&lowered))
        .take(limit)
        .map(String::from)
        .collect();

    if found.len() < limit {
        if let Some(max_distance) = fuzzy_distance {
            let room = limit - found.len();
            // Keys are lowercase, so an uppercase typo rarely lands within range
            let extra: Vec<String> = fuzzy_terms(index, prefix, max_distance)
                .into_iter()
                .filter(|term| !found.iter().any(|existing| existing == term))
                .take(room)
                .map(String::from)
                .collect();
            found.extend(extra);
        }
    }

    found
}
