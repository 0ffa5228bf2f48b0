// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlighting: wrap query words in `<mark>` tags for display.
//!
//! Only `name`, `description` and `symptoms` are highlighted. Causes and tags
//! contribute to the score but never to the highlighted text. Every result
//! carries all three highlighted fields, copied unmarked when nothing matched.
//!
//! All query words go into one case-insensitive alternation, longest first, so a
//! single left-to-right pass marks every occurrence without nesting markers
//! (a query for "mark" cannot match inside an inserted `<mark>`).

use crate::types::{Document, Field};
use regex::{Regex, RegexBuilder};
use std::collections::BTreeMap;

pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

/// Separator used when highlighting the symptoms list.
const SYMPTOM_SEPARATOR: &str = ", ";

/// Marks occurrences of a fixed set of query words.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    pub fn new<S: AsRef<str>>(words: &[S]) -> Self {
        let mut words: Vec<&str> = words
            .iter()
            .map(|word| word.as_ref())
            .filter(|word| !word.is_empty())
            .collect();
        words.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        words.dedup();

        if words.is_empty() {
            return Self { pattern: None };
        }

        let alternation = words
            .iter()
            .map(|word| regex::escape(word))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = RegexBuilder::new(&alternation)
            .case_insensitive(true)
            .build()
            .ok();
        Self { pattern }
    }

    /// `text` with every occurrence wrapped, or `None` if nothing matched.
    pub fn highlight(&self, text: &str) -> Option<String> {
        let pattern = self.pattern.as_ref()?;
        let mut out = String::with_capacity(text.len() + 16);
        let mut last = 0;
        let mut matched = false;
        for found in pattern.find_iter(text) {
            matched = true;
            out.push_str(&text[last..found.start()]);
            out.push_str(MARK_OPEN);
            out.push_str(found.as_str());
            out.push_str(MARK_CLOSE);
            last = found.end();
        }
        if !matched {
            return None;
        }
        out.push_str(&text[last..]);
        Some(out)
    }

    /// Text of every highlightable field, marked where query words occur.
    pub fn highlight_document(&self, doc: &Document) -> BTreeMap<Field, String> {
        Field::HIGHLIGHTED
            .into_iter()
            .map(|field| {
                let text = match field {
                    Field::Symptoms => doc.symptoms.join(SYMPTOM_SEPARATOR),
                    _ => doc.field_text(field),
                };
                let marked = self.highlight(&text).unwrap_or(text);
                (field, marked)
            })
            .collect()
    }
}
