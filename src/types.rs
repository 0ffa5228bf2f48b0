// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search engine.
//!
//! A `Document` is what the content provider hands us. A `SearchResult` is what
//! the presentation layer gets back. `Field` names the five parts of a document
//! that carry their own weight in scoring.
//!
//! # Invariants
//!
//! - **SearchResult.score**: finite and `>= 0`. Boost factors are validated at
//!   the config boundary, so nothing downstream can produce a negative or NaN score.
//!
//! - **SearchResult.matched_fields**: only fields whose own score was `> 0`.
//!
//! - **SearchResult.position**: an index into the corpus snapshot of the generation
//!   that produced the result. Meaningless against any other generation.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

// =============================================================================
// DOCUMENT
// =============================================================================

/// One disease entry, as supplied by the content provider.
///
/// Every field except `id` defaults to empty, so a sparse JSON record still loads.
/// The engine never validates documents; missing text is simply unsearchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    pub id: String,
    pub name: String,
    pub description: String,
    pub symptoms: Vec<String>,
    pub causes: Vec<String>,
    pub tags: Vec<String>,
    /// Indexed as plain text, never scored on its own.
    pub category: Option<String>,
    /// Indexed as plain text, never scored on its own.
    pub severity: Option<String>,
    /// Affected species. Indexed as plain text, never scored on its own.
    pub species: Vec<String>,
}

impl Document {
    /// Raw text of a scorable field. List fields are joined with a single space.
    pub fn field_text(&self, field: Field) -> String {
        match field {
            Field::Name => self.name.clone(),
            Field::Description => self.description.clone(),
            Field::Symptoms => self.symptoms.join(" "),
            Field::Causes => self.causes.join(" "),
            Field::Tags => self.tags.join(" "),
        }
    }

    /// Every piece of text the index sees, scorable or not, as one blob.
    pub fn searchable_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(
            2 + self.symptoms.len()
                + self.causes.len()
                + self.tags.len()
                + self.species.len()
                + 2,
        );
        parts.push(&self.name);
        parts.push(&self.description);
        parts.extend(self.symptoms.iter().map(String::as_str));
        parts.extend(self.causes.iter().map(String::as_str));
        parts.extend(self.tags.iter().map(String::as_str));
        if let Some(category) = &self.category {
            parts.push(category);
        }
        if let Some(severity) = &self.severity {
            parts.push(severity);
        }
        parts.extend(self.species.iter().map(String::as_str));
        parts.join(" ")
    }
}

// =============================================================================
// FIELDS
// =============================================================================

/// The scorable fields of a document.
///
/// Ordering is declaration order, which is also the order fields are scored in
/// and the order they appear in `matched_fields`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Description,
    Symptoms,
    Causes,
    Tags,
}

impl Field {
    /// All scorable fields.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Description,
        Field::Symptoms,
        Field::Causes,
        Field::Tags,
    ];

    /// Fields that get highlighted text. Causes and tags are scored but never highlighted.
    pub const HIGHLIGHTED: [Field; 3] = [Field::Name, Field::Description, Field::Symptoms];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Symptoms => "symptoms",
            Field::Causes => "causes",
            Field::Tags => "tags",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// A ranked hit.
///
/// `document` is shared with the corpus snapshot, so cloning a result never
/// copies document text.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub document: Arc<Document>,
    /// Position of the document in the indexed corpus.
    pub position: usize,
    pub score: f64,
    pub matched_fields: BTreeSet<Field>,
    /// Name, description and symptoms text with query occurrences wrapped in
    /// `<mark>` tags. Always holds all three; unmatched fields are plain text.
    pub highlighted_text: BTreeMap<Field, String>,
}

/// Snapshot of engine size, for diagnostics screens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    /// Number of distinct keys in the inverted index.
    pub index_size: usize,
    /// Number of cached queries in the current generation.
    pub cache_size: usize,
    /// Number of documents in the current corpus.
    pub total_diseases: usize,
    /// `index_size / total_diseases`. A vocabulary-density figure, not a token count.
    pub average_words_per_disease: f64,
}
