// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the herdsearch CLI.
//!
//! OneDark for dark terminals, One Light for light ones. The theme comes from
//! `HERDSEARCH_THEME` if set, then `COLORFGBG`, then defaults to dark. Respects
//! `NO_COLOR` and plain output for pipelines.
//!
//! Highlight markers from the engine (`<mark>`) are rendered as bold yellow
//! when colors are on and as `[...]` brackets otherwise.

use herdsearch::scoring::highlight::{MARK_CLOSE, MARK_OPEN};
use herdsearch::{Field, SearchResult, SearchStats};
use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("HERDSEARCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; background 7 and up (except 8) is light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            match theme() {
                Theme::Dark => rgb(onedark::$name),
                Theme::Light => rgb(onelight::$name),
            }
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors on stdout unless `NO_COLOR` is set or stdout is not a TTY.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, excluding ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Cut to at most `max` visible chars, ending in `…` when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Border color and reset, both empty when colors are off.
fn border() -> (String, &'static str) {
    if use_colors() {
        (GRAY(), RESET)
    } else {
        (String::new(), "")
    }
}

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let (border, reset) = border();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}│{}{}{}{}│{}", border, reset, content, " ".repeat(pad), border, reset);
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let (border, reset) = border();
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset,
        label_part,
        border,
        "─".repeat(remaining),
        reset
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    let (border, reset) = border();
    println!("{}└{}┘{}", border, "─".repeat(BOX_WIDTH), reset);
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded score. Thresholds follow the default boosts: 5+ is a strong
/// name or tags hit, 2+ a solid single-field hit.
pub fn score_value(score: f64) -> String {
    let text = format!("{:>6.2}", score);
    if score >= 5.0 {
        themed(BRIGHT_GREEN, &[BOLD], &text)
    } else if score >= 2.0 {
        themed(GREEN, &[], &text)
    } else if score > 0.0 {
        themed(YELLOW, &[], &text)
    } else {
        themed(GRAY, &[], &text)
    }
}

/// Color-coded field label
pub fn field_label(field: Field) -> String {
    let color: fn() -> String = match field {
        Field::Name => BRIGHT_GREEN,
        Field::Tags => MAGENTA,
        Field::Symptoms => BLUE,
        Field::Causes => CYAN,
        Field::Description => GRAY,
    };
    themed(color, &[], field.as_str())
}

/// Replace `<mark>` markers with terminal styling.
pub fn render_marks(text: &str) -> String {
    if use_colors() {
        let open = format!("{}{}", BOLD, YELLOW());
        text.replace(MARK_OPEN, &open).replace(MARK_CLOSE, RESET)
    } else {
        text.replace(MARK_OPEN, "[").replace(MARK_CLOSE, "]")
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORTS
// ═══════════════════════════════════════════════════════════════════════════

/// Ranked results, `shown` out of `total` matches.
pub fn print_results(query: &str, shown: &[SearchResult], total: usize) {
    section_top(&format!("SEARCH \"{}\"", truncate(query, 40)));
    if shown.is_empty() {
        row(&themed(GRAY, &[], "  no matches"));
        section_bot();
        return;
    }

    for (rank, result) in shown.iter().enumerate() {
        let doc = &result.document;
        let name = result
            .highlighted_text
            .get(&Field::Name)
            .map_or_else(String::new, |marked| render_marks(marked));
        row(&format!(
            " {:>2}. {}  {}  {}",
            rank + 1,
            score_value(result.score),
            name,
            themed(GRAY, &[], &format!("({})", doc.id))
        ));

        if !result.matched_fields.is_empty() {
            let fields: Vec<String> = result.matched_fields.iter().map(|f| field_label(*f)).collect();
            row(&format!("            matched: {}", fields.join(", ")));
        }
        for field in [Field::Symptoms, Field::Description] {
            // Unmarked fields are plain copies; only show the ones that matched
            if let Some(marked) = result.highlighted_text.get(&field).filter(|t| t.contains(MARK_OPEN)) {
                row(&format!("            {}: {}", field, render_marks(marked)));
            }
        }
    }

    if total > shown.len() {
        row(&themed(GRAY, &[], &format!("  … {} more", total - shown.len())));
    }
    section_bot();
}

/// Suggestion list for a prefix.
pub fn print_suggestions(prefix: &str, suggestions: &[String]) {
    section_top(&format!("SUGGEST \"{}\"", truncate(prefix, 40)));
    if suggestions.is_empty() {
        row(&themed(GRAY, &[], "  no suggestions"));
    }
    for suggestion in suggestions {
        row(&format!("  {}", themed(GREEN, &[], suggestion)));
    }
    section_bot();
}

pub fn print_stats(stats: &SearchStats) {
    section_top("INDEX");
    let line = |label: &str, value: String| {
        row(&format!("  {} {}", pad_right(&themed(GRAY, &[], label), 26), value));
    };
    line("diseases", stats.total_diseases.to_string());
    line("index keys", stats.index_size.to_string());
    line("keys per disease", format!("{:.2}", stats.average_words_per_disease));
    line("cached queries", stats.cache_size.to_string());
    section_bot();
}
