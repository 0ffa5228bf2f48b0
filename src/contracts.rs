// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the index, the ranker and suggestions.
//!
//! Debug-mode assertions, compiled to nothing in release builds. They fail early
//! during development when an invariant slips.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Invariant |
//! |----------------------------|-----------|
//! | `check_index_well_formed`  | postings strictly ascending, in bounds, non-empty |
//! | `check_results`            | scores finite and non-negative, sorted descending |
//! | `check_suggestions`        | at most `limit` suggestions, no duplicates |
//! | compile-time block         | default tags boost outranks a best-case description hit |
//!
//! # Usage
//!
//! ```ignore
//! use herdsearch::contracts::*;
//!
//! // In debug builds, this panics if the invariant is violated
//! check_results(&results, corpus.len());
//!
//! // In release builds, this is a no-op
//! ```

use crate::index::InvertedIndex;
use crate::scoring::{MAX_FIELD_SCORE, SUBSTRING_SCORE};
use crate::types::SearchResult;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// A bare substring hit in tags beats a perfect hit in the description under
/// default boosts. Ranking tests rely on this ordering.
const _: () = {
    const TAGS_BOOST: f64 = 2.5;
    const DESCRIPTION_BOOST: f64 = 1.0;

    const WORST_TAGS: f64 = SUBSTRING_SCORE * TAGS_BOOST;
    const BEST_DESCRIPTION: f64 = MAX_FIELD_SCORE * DESCRIPTION_BOOST;
    assert!(WORST_TAGS > BEST_DESCRIPTION); // 2.5 > 1.8
};

// ============================================================================
// INDEX CONTRACTS
// ============================================================================

/// Check that every posting list is strictly ascending, non-empty and in bounds.
///
/// # Panics (debug builds only)
/// Panics on the first key that breaks any of the three.
#[inline]
pub fn check_index_well_formed(index: &InvertedIndex) {
    if !cfg!(debug_assertions) {
        return;
    }
    for key in index.terms() {
        let postings = index.postings(key);
        debug_assert!(
            !postings.is_empty(),
            "Contract violation: key '{}' has no postings",
            key
        );
        debug_assert!(
            postings.windows(2).all(|pair| pair[0] < pair[1]),
            "Contract violation: postings for '{}' not strictly ascending: {:?}",
            key,
            postings
        );
        if let Some(&last) = postings.last() {
            debug_assert!(
                last < index.doc_count(),
                "Contract violation: posting {} for '{}' >= doc_count {}",
                last,
                key,
                index.doc_count()
            );
        }
    }
}

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Check a ranked result list.
///
/// - every score is finite and `>= 0`
/// - scores never increase down the list
/// - positions are in bounds and unique
/// - a non-empty `matched_fields` implies a positive score
#[inline]
pub fn check_results(results: &[SearchResult], corpus_len: usize) {
    if !cfg!(debug_assertions) {
        return;
    }
    for (rank, result) in results.iter().enumerate() {
        debug_assert!(
            result.score.is_finite() && result.score >= 0.0,
            "Contract violation: result {} has score {}",
            rank,
            result.score
        );
        debug_assert!(
            result.position < corpus_len,
            "Contract violation: result {} position {} >= corpus len {}",
            rank,
            result.position,
            corpus_len
        );
        debug_assert!(
            result.matched_fields.is_empty() || result.score > 0.0,
            "Contract violation: result {} matched {:?} with zero score",
            rank,
            result.matched_fields
        );
    }
    for (rank, pair) in results.windows(2).enumerate() {
        debug_assert!(
            pair[0].score >= pair[1].score,
            "Contract violation: results not sorted at rank {}: {} < {}",
            rank,
            pair[0].score,
            pair[1].score
        );
    }
    let mut positions: Vec<usize> = results.iter().map(|r| r.position).collect();
    positions.sort_unstable();
    positions.dedup();
    debug_assert_eq!(
        positions.len(),
        results.len(),
        "Contract violation: duplicate document in results"
    );
}

// ============================================================================
// SUGGESTION CONTRACTS
// ============================================================================

#[inline]
pub fn check_suggestions(suggestions: &[String], limit: usize) {
    debug_assert!(
        suggestions.len() <= limit,
        "Contract violation: {} suggestions for limit {}",
        suggestions.len(),
        limit
    );
    if cfg!(debug_assertions) {
        for (i, suggestion) in suggestions.iter().enumerate() {
            debug_assert!(
                !suggestions[..i].contains(suggestion),
                "Contract violation: duplicate suggestion '{}'",
                suggestion
            );
        }
    }
}
