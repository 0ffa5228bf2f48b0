// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Static synonym groups for the veterinary domain.
//!
//! Groups are symmetric: every member maps to the whole group, itself included.
//! The table is built once on first use and never derived from the corpus.

use std::collections::HashMap;
use std::sync::LazyLock;

/// The groups themselves. Words are lowercase and longer than two chars, so they
/// survive tokenization unchanged.
const GROUPS: &[&[&str]] = &[
    &["bird", "poultry", "fowl", "chicken", "avian"],
    &["cattle", "cow", "bovine", "calf", "livestock"],
    &["pig", "swine", "hog", "porcine", "piglet"],
    &["sheep", "ovine", "lamb", "ewe"],
    &["goat", "caprine", "kid"],
    &["horse", "equine", "pony", "foal"],
    &["dog", "canine", "puppy"],
    &["cat", "feline", "kitten"],
    &["fever", "pyrexia", "temperature"],
    &["diarrhea", "diarrhoea", "scours"],
    &["cough", "coughing"],
    &["lameness", "limping", "lame"],
    &["virus", "viral"],
    &["bacteria", "bacterial"],
    &["parasite", "parasitic", "worms"],
];

static SYNONYMS: LazyLock<HashMap<&'static str, &'static [&'static str]>> = LazyLock::new(|| {
    let mut table = HashMap::new();
    for group in GROUPS {
        for word in group.iter() {
            table.insert(*word, *group);
        }
    }
    table
});

/// The synonym group `word` belongs to, including `word` itself.
///
/// Lookup is case-sensitive against the lowercase table; callers pass tokens,
/// which are already lowercase.
pub fn synonym_group(word: &str) -> Option<&'static [&'static str]> {
    SYNONYMS.get(word).copied()
}

/// Every group in the table.
pub fn synonym_groups() -> &'static [&'static [&'static str]] {
    GROUPS
}
