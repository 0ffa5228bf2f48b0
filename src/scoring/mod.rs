// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Field boosts dominate. With default boosts a name hit is worth three
//! description hits, and a tags hit beats a description hit even when the
//! description hit sits at position 0.

mod core;
pub mod highlight;
pub mod ranking;

pub use self::core::*;
pub use highlight::Highlighter;
pub use ranking::{Candidate, ScoreBoard};
