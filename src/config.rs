// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration and its validation.
//!
//! `SearchConfig` is always valid: the only way to change it is through
//! `SearchConfigUpdate::apply_to`, which checks the merged result before anything
//! is committed. A rejected update leaves the old config untouched.

use crate::index::IndexOptions;
use crate::types::Field;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-field score multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoostFactors {
    pub name: f64,
    pub symptoms: f64,
    pub description: f64,
    pub causes: f64,
    pub tags: f64,
}

impl Default for BoostFactors {
    fn default() -> Self {
        Self {
            name: 3.0,
            symptoms: 2.0,
            description: 1.0,
            causes: 1.5,
            tags: 2.5,
        }
    }
}

impl BoostFactors {
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Name => self.name,
            Field::Description => self.description,
            Field::Symptoms => self.symptoms,
            Field::Causes => self.causes,
            Field::Tags => self.tags,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for field in Field::ALL {
            let value = self.get(field);
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteBoost { field, value });
            }
            if value < 0.0 {
                return Err(ConfigError::NegativeBoost { field, value });
            }
        }
        Ok(())
    }
}

/// Engine behavior knobs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    pub enable_fuzzy_search: bool,
    pub max_fuzzy_distance: u32,
    pub enable_stemming: bool,
    pub enable_synonyms: bool,
    pub boost_factors: BoostFactors,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            enable_fuzzy_search: true,
            max_fuzzy_distance: 2,
            enable_stemming: true,
            enable_synonyms: true,
            boost_factors: BoostFactors::default(),
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.boost_factors.validate()
    }

    /// The subset of config the index builder cares about.
    pub fn index_options(&self) -> IndexOptions {
        IndexOptions {
            stemming: self.enable_stemming,
            synonyms: self.enable_synonyms,
        }
    }
}

/// Partial boost factors. Unset fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoostUpdate {
    pub name: Option<f64>,
    pub symptoms: Option<f64>,
    pub description: Option<f64>,
    pub causes: Option<f64>,
    pub tags: Option<f64>,
}

/// Partial config, merged into the current one by `SearchEngine::update_config`.
///
/// `max_fuzzy_distance` is signed here so that a negative value coming from a
/// host application is reported instead of failing to deserialize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfigUpdate {
    pub enable_fuzzy_search: Option<bool>,
    pub max_fuzzy_distance: Option<i64>,
    pub enable_stemming: Option<bool>,
    pub enable_synonyms: Option<bool>,
    pub boost_factors: Option<BoostUpdate>,
}

impl SearchConfigUpdate {
    /// Merge into `current`, returning the new config if it is valid.
    pub fn apply_to(&self, current: &SearchConfig) -> Result<SearchConfig, ConfigError> {
        let mut next = *current;

        if let Some(enabled) = self.enable_fuzzy_search {
            next.enable_fuzzy_search = enabled;
        }
        if let Some(distance) = self.max_fuzzy_distance {
            next.max_fuzzy_distance = u32::try_from(distance)
                .map_err(|_| ConfigError::InvalidFuzzyDistance(distance))?;
        }
        if let Some(enabled) = self.enable_stemming {
            next.enable_stemming = enabled;
        }
        if let Some(enabled) = self.enable_synonyms {
            next.enable_synonyms = enabled;
        }
        if let Some(boosts) = self.boost_factors {
            let target = &mut next.boost_factors;
            if let Some(value) = boosts.name {
                target.name = value;
            }
            if let Some(value) = boosts.symptoms {
                target.symptoms = value;
            }
            if let Some(value) = boosts.description {
                target.description = value;
            }
            if let Some(value) = boosts.causes {
                target.causes = value;
            }
            if let Some(value) = boosts.tags {
                target.tags = value;
            }
        }

        next.validate()?;
        Ok(next)
    }
}

/// A configuration the engine refuses to run with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("boost factor for {field} must not be negative (got {value})")]
    NegativeBoost { field: Field, value: f64 },
    #[error("boost factor for {field} must be finite (got {value})")]
    NonFiniteBoost { field: Field, value: f64 },
    #[error("max fuzzy distance must be a non-negative 32-bit integer (got {0})")]
    InvalidFuzzyDistance(i64),
}
