// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scorer weights, with defaults that reproduce the dashboard's ranking.
//!
//! A config file is plain JSON. Every key is optional:
//!
//! ```json
//! { "keywordWeight": 0.5, "semanticWeight": 0.5, "semanticScale": 10.0, "locationBonus": 1.5 }
//! ```

use crate::error::{Error, Result};
use crate::scoring::{
    DEFAULT_KEYWORD_WEIGHT, DEFAULT_SEMANTIC_WEIGHT, LOCATION_BONUS, SEMANTIC_SCALE,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Upper bound for every config value.
///
/// A keyword score is at most the number of distinct query terms plus the
/// location bonus, and a cosine is at most 1. Capping each factor here keeps
/// every product far below `f64::MAX`, so a validated config can never
/// score `inf`.
pub const MAX_CONFIG_VALUE: f64 = 1e6;

/// Environment variable naming a config file, used when no path is given.
pub const CONFIG_ENV_VAR: &str = "HIRESCORE_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScorerConfig {
    /// Weight of the keyword score in `both` mode.
    pub keyword_weight: f64,
    /// Weight of the scaled semantic score in `both` mode.
    pub semantic_weight: f64,
    /// Multiplier that lifts cosine similarity (0..=1) onto the keyword scale.
    pub semantic_scale: f64,
    /// Added to the keyword score when a location filter hits.
    pub location_bonus: f64,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            keyword_weight: DEFAULT_KEYWORD_WEIGHT,
            semantic_weight: DEFAULT_SEMANTIC_WEIGHT,
            semantic_scale: SEMANTIC_SCALE,
            location_bonus: LOCATION_BONUS,
        }
    }
}

impl ScorerConfig {
    /// Reject weights that would break `score >= 0` or overflow a score.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("keywordWeight", self.keyword_weight),
            ("semanticWeight", self.semantic_weight),
            ("semanticScale", self.semantic_scale),
            ("locationBonus", self.location_bonus),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{} must be a finite, non-negative number (got {})",
                    name, value
                )));
            }
            if value > MAX_CONFIG_VALUE {
                return Err(Error::InvalidConfig(format!(
                    "{} must be at most {} (got {})",
                    name, MAX_CONFIG_VALUE, value
                )));
            }
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&content).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::info!(path = %path.display(), ?config, "loaded scorer config");
        Ok(config)
    }

    /// Explicit path first, then `$HIRESCORE_CONFIG`, then defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::load(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }
}
