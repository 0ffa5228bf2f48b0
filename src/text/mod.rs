// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text processing: turning raw strings into index keys.
//!
//! Three stages, applied in this order at index time and at query time:
//! tokenize (this module), stem (`stem`), expand synonyms (`synonyms`, index time only).

pub mod stem;
pub mod synonyms;

pub use stem::{stem_word, Stemmer, SUFFIXES};
pub use synonyms::{synonym_group, synonym_groups};

/// Tokens of this many chars or fewer are dropped.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Word characters: letters, digits, underscore. Everything else separates words.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Normalize a query for cache lookup: lowercase and trim.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Split text into lowercase word tokens.
///
/// Non-word characters become separators, and tokens of two chars or fewer
/// ("a", "of", "in") are dropped. Order and duplicates are preserved.
///
/// ```
/// use herdsearch::tokenize;
///
/// assert_eq!(tokenize("Avian Flu (H5N1)!"), vec!["avian", "flu", "h5n1"]);
/// assert!(tokenize("a, b; of").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|token| token.chars().count() > MIN_TOKEN_CHARS)
        .map(String::from)
        .collect()
}
