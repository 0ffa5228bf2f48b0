// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Heuristic suffix stripping.
//!
//! Not Porter, not Snowball. A fixed list of suffixes tried in order; the first
//! one that fits is removed. Crude, but deterministic and enumerable, and good
//! enough to fold "swallowing" and "swallowed" onto one key.

use parking_lot::Mutex;
use std::collections::HashMap;

/// Suffixes in the order they are tried.
pub const SUFFIXES: [&str; 9] = ["ing", "ed", "er", "est", "ly", "tion", "sion", "ness", "ment"];

/// Stem a single word without memoization.
///
/// Strips the first suffix the word ends with, provided the remaining stem is
/// longer than `suffix length + 2` chars. Words that fit no suffix come back unchanged.
pub fn stem_word(word: &str) -> String {
    let word_chars = word.chars().count();
    for suffix in SUFFIXES {
        if !word.ends_with(suffix) {
            continue;
        }
        // Suffixes are ASCII, so byte length equals char length
        let stem_chars = word_chars - suffix.len();
        if stem_chars > suffix.len() + 2 {
            return word[..word.len() - suffix.len()].to_string();
        }
    }
    word.to_string()
}

/// Memoizing stemmer.
///
/// The memo lives as long as the stemmer and is never invalidated: stemming is a
/// pure function of the word, so re-indexing or changing config cannot make an
/// entry stale.
#[derive(Debug, Default)]
pub struct Stemmer {
    cache: Mutex<HashMap<String, String>>,
}

impl Stemmer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stem `word`, consulting the memo first.
    pub fn stem(&self, word: &str) -> String {
        if let Some(stem) = self.cache.lock().get(word) {
            return stem.clone();
        }
        let stem = stem_word(word);
        self.cache.lock().insert(word.to_string(), stem.clone());
        stem
    }

    /// Number of memoized words.
    pub fn cache_len(&self) -> usize {
        self.cache.lock().len()
    }
}
