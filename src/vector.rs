// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sparse term-frequency vectors and cosine similarity.
//!
//! A `TermVector` maps each token to how often it occurs. Dimensions that are
//! absent are zero, so dot products only walk the shorter vector.

use crate::tokenize::tokenize;
use std::collections::HashMap;

/// Token → occurrence count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermVector {
    counts: HashMap<String, u32>,
}

impl TermVector {
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut counts: HashMap<String, u32> = HashMap::with_capacity(tokens.len());
        for token in tokens {
            *counts.entry(token.as_ref().to_string()).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn from_text(text: &str) -> Self {
        Self::from_tokens(&tokenize(text))
    }

    /// Count for a term (0 if absent).
    pub fn get(&self, term: &str) -> u32 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.counts.contains_key(term)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.counts
            .values()
            .map(|&c| f64::from(c) * f64::from(c))
            .sum::<f64>()
            .sqrt()
    }

    /// Dot product over shared dimensions.
    pub fn dot(&self, other: &TermVector) -> f64 {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .counts
            .iter()
            .map(|(term, &count)| f64::from(count) * f64::from(large.get(term)))
            .sum()
    }
}

/// Cosine similarity in `[0, 1]`. Zero when either vector is empty.
///
/// Counts are non-negative, so the result can't go below zero. It's clamped
/// to 1.0 to absorb floating-point overshoot on identical vectors.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (a.dot(b) / (norm_a * norm_b)).min(1.0)
}
