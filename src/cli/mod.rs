// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the herdsearch command-line interface.
//!
//! Three subcommands over a JSON corpus file: `search` for ranked results,
//! `suggest` for typeahead completions, and `stats` for index size. Each run
//! builds a fresh engine; nothing is persisted between invocations.

pub mod display;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use herdsearch::{Document, SearchConfigUpdate, SearchEngine};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "herdsearch",
    about = "Fuzzy search over a veterinary disease reference",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a corpus and display ranked results
    Search {
        /// Path to a JSON array of disease documents
        corpus: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to display
        #[arg(short, long, default_value = "10")]
        limit: usize,

        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Typeahead suggestions for a prefix
    Suggest {
        /// Path to a JSON array of disease documents
        corpus: PathBuf,

        /// Prefix to complete (at least two characters)
        prefix: String,

        /// Maximum number of suggestions
        #[arg(short, long, default_value = "5")]
        limit: usize,

        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Show index statistics for a corpus
    Stats {
        /// Path to a JSON array of disease documents
        corpus: PathBuf,

        #[command(flatten)]
        engine: EngineArgs,
    },
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// JSON file with a partial search config (camelCase keys)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable fuzzy matching regardless of the config file
    #[arg(long)]
    pub no_fuzzy: bool,

    /// Print machine-readable JSON instead of formatted output
    #[arg(long)]
    pub json: bool,
}

/// Read a corpus file: a JSON array of documents.
pub fn load_corpus(path: &Path) -> Result<Vec<Document>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read corpus {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse corpus {}", path.display()))
}

/// Read a partial config file.
pub fn load_config(path: &Path) -> Result<SearchConfigUpdate> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse config {}", path.display()))
}

/// Build an engine over `corpus` with the requested config.
///
/// Config is applied before indexing so the stemming and synonym settings shape
/// the index.
pub fn open_engine(corpus: &Path, args: &EngineArgs) -> Result<SearchEngine> {
    let engine = SearchEngine::new();

    if let Some(path) = &args.config {
        let update = load_config(path)?;
        engine
            .update_config(update)
            .with_context(|| format!("invalid config {}", path.display()))?;
    }
    if args.no_fuzzy {
        engine.update_config(SearchConfigUpdate {
            enable_fuzzy_search: Some(false),
            ..Default::default()
        })?;
    }

    engine.build_index(load_corpus(corpus)?);
    Ok(engine)
}
