// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: accumulating per-word scores and sorting.
//!
//! Candidates are kept in first-seen order. The final sort is stable and by
//! score only, so equal scores keep that order. There is no further tiebreak.

use crate::types::Field;
use std::collections::{BTreeSet, HashMap};

/// A document's running total for one query.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub position: usize,
    pub score: f64,
    pub matched_fields: BTreeSet<Field>,
}

/// Accumulates field scores per document across query words.
#[derive(Debug, Default)]
pub struct ScoreBoard {
    slots: HashMap<usize, usize>,
    candidates: Vec<Candidate>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one word's field scores (in `Field::ALL` order) to a document.
    ///
    /// The document becomes a candidate even when every score is 0.
    pub fn add(&mut self, position: usize, field_scores: [f64; 5]) {
        let slot = *self.slots.entry(position).or_insert_with(|| {
            self.candidates.push(Candidate {
                position,
                score: 0.0,
                matched_fields: BTreeSet::new(),
            });
            self.candidates.len() - 1
        });

        let candidate = &mut self.candidates[slot];
        for (field, score) in Field::ALL.into_iter().zip(field_scores) {
            candidate.score += score;
            if score > 0.0 {
                candidate.matched_fields.insert(field);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidates sorted by descending score, ties in first-seen order.
    pub fn into_ranked(self) -> Vec<Candidate> {
        let mut ranked = self.candidates;
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }
}
