// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance, full and bounded.
//!
//! The key insight for the bounded form: `|len(a) - len(b)|` is a lower bound on
//! edit distance, and so is the minimum of any DP row. Either one exceeding the
//! bound means we can stop without finishing the O(nm) table.

/// Classic Levenshtein distance: unit-cost insertion, deletion, substitution.
///
/// Counts chars, not bytes.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &bc) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ac != bc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
        }
    }

    row[b_chars.len()]
}

/// Edit distance between `a` and `b` if it is at most `max`, otherwise `None`.
///
/// Agrees with `edit_distance` whenever it returns `Some`; the early exits only
/// ever skip work for pairs that are provably too far apart.
pub fn distance_within(a: &str, b: &str, max: usize) -> Option<usize> {
    let a_len = a.chars().count();
    let b_chars: Vec<char> = b.chars().collect();

    // Length difference is a lower bound on edit distance
    if a_len.abs_diff(b_chars.len()) > max {
        return None;
    }

    let mut row: Vec<usize> = (0..=b_chars.len()).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        let mut row_min = row[0];

        for (j, &bc) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ac != bc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
            row_min = row_min.min(row[j + 1]);
        }

        // Row minimum never decreases in later rows
        if row_min > max {
            return None;
        }
    }

    let distance = row[b_chars.len()];
    (distance <= max).then_some(distance)
}
