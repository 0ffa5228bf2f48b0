// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded query → results memo with FIFO eviction.
//!
//! When full, the oldest *inserted* entry goes, regardless of how recently it was
//! read. A `HashMap` holds the entries and a `VecDeque` remembers insertion order.
//!
//! Results are stored as `Arc<[SearchResult]>` and handed out by cloning the
//! `Arc`, so two hits on the same entry are pointer-equal. Callers can use
//! `Arc::ptr_eq` to tell a cached answer from a recomputed one.

use crate::types::SearchResult;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

/// Default number of cached queries.
pub const DEFAULT_CAPACITY: usize = 100;

/// Shared, immutable result list.
pub type SharedResults = Arc<[SearchResult]>;

#[derive(Debug)]
pub struct QueryCache {
    entries: HashMap<String, SharedResults>,
    order: VecDeque<String>,
    capacity: usize,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Cached results for a normalized query. Does not affect eviction order.
    pub fn get(&self, key: &str) -> Option<SharedResults> {
        self.entries.get(key).cloned()
    }

    /// Store results, evicting the oldest entry if the cache is full.
    ///
    /// Re-inserting an existing key replaces its results but keeps its original
    /// place in the eviction queue. Returns the evicted key, if any.
    pub fn insert(&mut self, key: String, results: SharedResults) -> Option<String> {
        if self.capacity == 0 {
            return None;
        }
        if let Some(existing) = self.entries.get_mut(&key) {
            *existing = results;
            return None;
        }

        let mut evicted = None;
        if self.entries.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
                evicted = Some(oldest);
            }
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, results);
        evicted
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}
