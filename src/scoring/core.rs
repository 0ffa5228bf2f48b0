// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Per field, per query word:
//!
//! ```text
//! score = 0
//! if text contains word:             score += 1.0
//! if word sits on word boundaries:   score += 0.5
//! score += max(0, 1 - pos/len) * 0.3
//! score *= boost[field]
//! ```
//!
//! Scoring always uses the literal query word against unstemmed field text,
//! even though candidates were found through stemmed and fuzzy keys. A document
//! that only fuzzy-matched can therefore score 0. That is deliberate: the index
//! casts a wide net and scoring stays precise.
//!
//! # Constants
//!
//! | Component      | Value | Notes |
//! |----------------|-------|-------|
//! | Substring      | 1.0   | Word appears anywhere in the field |
//! | Word boundary  | 0.5   | Word appears as a whole word |
//! | Max position   | 0.3   | Match at char 0; decays linearly to 0 at the end |
//!
//! The largest unboosted field score is therefore 1.8.

use crate::config::BoostFactors;
use crate::types::{Document, Field};
use regex::Regex;

/// Score for the query word appearing anywhere in the field.
pub const SUBSTRING_SCORE: f64 = 1.0;

/// Extra score when the occurrence is a whole word.
pub const WORD_BOUNDARY_BONUS: f64 = 0.5;

/// Maximum position bonus (match at the very start of the field).
pub const MAX_POSITION_BONUS: f64 = 0.3;

/// Largest score a single field can give a single word before boosting.
pub const MAX_FIELD_SCORE: f64 = SUBSTRING_SCORE + WORD_BOUNDARY_BONUS + MAX_POSITION_BONUS;

/// Position bonus: matches near the start of the field score slightly higher.
///
/// Both arguments are char counts. Range is `[0, MAX_POSITION_BONUS]`.
pub fn position_bonus(position: usize, text_len: usize) -> f64 {
    if text_len == 0 {
        return 0.0;
    }
    (1.0 - position as f64 / text_len as f64).max(0.0) * MAX_POSITION_BONUS
}

/// A query word prepared for scoring.
#[derive(Debug, Clone)]
pub struct QueryTerm {
    word: String,
    whole_word: Option<Regex>,
}

impl QueryTerm {
    /// `word` must already be lowercase (it comes out of the tokenizer).
    pub fn new(word: &str) -> Self {
        // An escaped literal only fails to compile past the regex size limit;
        // such a word then simply never earns the boundary bonus.
        let whole_word = Regex::new(&format!(r"\b{}\b", regex::escape(word))).ok();
        Self {
            word: word.to_string(),
            whole_word,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Unboosted score of this word against one lowercase field text.
    pub fn raw_score(&self, text: &str) -> f64 {
        let Some(byte_pos) = text.find(&self.word) else {
            return 0.0;
        };

        let mut score = SUBSTRING_SCORE;
        if self
            .whole_word
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(text))
        {
            score += WORD_BOUNDARY_BONUS;
        }

        let position = text[..byte_pos].chars().count();
        score + position_bonus(position, text.chars().count())
    }
}

/// Lowercased text of the five scorable fields, computed once per index build.
#[derive(Debug, Clone, Default)]
pub struct FieldTexts {
    texts: [String; 5],
}

impl FieldTexts {
    pub fn new(doc: &Document) -> Self {
        Self {
            texts: Field::ALL.map(|field| doc.field_text(field).to_lowercase()),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        &self.texts[field as usize]
    }
}

/// Boosted per-field scores for one word against one document, in `Field::ALL` order.
pub fn score_fields(term: &QueryTerm, texts: &FieldTexts, boosts: &BoostFactors) -> [f64; 5] {
    Field::ALL.map(|field| term.raw_score(texts.get(field)) * boosts.get(field))
}
