//! In-memory fuzzy search over a veterinary disease reference.
//!
//! Documents (diseases) are tokenized, stemmed and synonym-expanded into an
//! inverted index. Queries go through the same text pipeline, pick up nearby
//! vocabulary by edit distance, and are ranked by field-weighted substring
//! scoring. Results carry `<mark>` highlights and are memoized per query.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   text/     │────▶│   index/     │────▶│   fuzzy/     │
//! │ (tokenize,  │     │ (key → doc   │     │ (edit        │
//! │  stem, syn) │     │  positions)  │     │  distance)   │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     engine.rs                        │
//! │  (SearchEngine: RwLock'd config + generation with    │
//! │   corpus, index and FIFO query cache)               │
//! └─────────────────────────────────────────────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  scoring/   │     │  suggest.rs  │     │  cache.rs    │
//! │ (boosts,    │     │ (prefix +    │     │ (FIFO, 100   │
//! │  highlight) │     │  fuzzy fill) │     │  entries)    │
//! └─────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use herdsearch::{Document, SearchEngine};
//!
//! let engine = SearchEngine::new();
//! engine.build_index(vec![Document {
//!     id: "d1".into(),
//!     name: "Newcastle Disease".into(),
//!     description: "viral disease".into(),
//!     symptoms: vec!["fever".into()],
//!     tags: vec!["viral".into()],
//!     ..Document::default()
//! }]);
//!
//! let results = engine.search("newcastle");
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].document.id, "d1");
//! ```

// Module declarations
pub mod cache;
pub mod config;
pub mod contracts;
mod engine;
pub mod fuzzy;
pub mod index;
pub mod scoring;
pub mod suggest;
pub mod testing;
pub mod text;
mod types;

// Re-exports for public API
pub use cache::{QueryCache, SharedResults};
pub use config::{BoostFactors, BoostUpdate, ConfigError, SearchConfig, SearchConfigUpdate};
pub use engine::SearchEngine;
pub use fuzzy::{distance_within, edit_distance, fuzzy_terms};
pub use index::{IndexOptions, InvertedIndex};
pub use scoring::Highlighter;
pub use suggest::suggestions;
pub use text::{normalize_query, stem_word, synonym_group, tokenize, Stemmer};
pub use types::{Document, Field, SearchResult, SearchStats};
