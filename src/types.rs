// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a candidate search.
//!
//! Candidates come from the caller and are never mutated here. A search takes
//! a `SearchQuery` (free text, filters, mode) and produces `ScoredResult`s that
//! borrow the candidates they describe.
//!
//! # Invariants
//!
//! - **ScoredResult**: `score >= 0`, `keyword_score >= 0`, `0 <= semantic_score <= 1`.
//!   Every matched term is a token of both the query and the candidate text.
//!
//! - **ScoredResult.index**: position of the candidate in the input slice. It is
//!   the final tiebreaker, so equal scores always come back in input order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// CANDIDATE
// =============================================================================

/// A person in the talent pool.
///
/// Only `id` and `name` are required when deserializing. Everything else
/// defaults to empty, which the scorer treats the same as "no data".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_company: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub past_companies: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schools: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
}

// =============================================================================
// QUERY
// =============================================================================

/// How the keyword and semantic sub-scores combine into the final score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Distinct query-term overlap, plus the location bonus.
    Keyword,
    /// Cosine similarity of term-frequency vectors, scaled.
    Semantic,
    /// Weighted blend of both.
    #[default]
    Both,
}

impl SearchMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchMode::Keyword => "keyword",
            SearchMode::Semantic => "semantic",
            SearchMode::Both => "both",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "keyword" => Ok(SearchMode::Keyword),
            "semantic" => Ok(SearchMode::Semantic),
            "both" => Ok(SearchMode::Both),
            other => Err(format!(
                "unknown search mode '{}' (expected keyword, semantic or both)",
                other
            )),
        }
    }
}

/// Structured filters. Each field is a set of user-entered strings.
///
/// Across categories filters are conjunctive. Within a category they are
/// disjunctive, except `skills_include` where every entry must match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSet {
    /// Candidate location must contain one of these (substring).
    pub locations: Vec<String>,
    /// Candidate must have every one of these skills (exact).
    pub skills_include: Vec<String>,
    /// Candidate must have none of these skills (exact).
    pub skills_exclude: Vec<String>,
    /// Current company must contain one of these (substring).
    pub current_companies: Vec<String>,
    /// Some past company must contain one of these (substring).
    pub past_companies: Vec<String>,
    /// Some school must contain one of these (substring).
    pub schools: Vec<String>,
}

/// A full search request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchQuery {
    pub text: String,
    pub filters: FilterSet,
    pub mode: SearchMode,
    /// Keep at most this many results after sorting. `None` keeps all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl SearchQuery {
    /// Free-text query in the default mode with no filters.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_filters(mut self, filters: FilterSet) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// Sub-scores for one candidate, before filtering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CandidateScore {
    pub score: f64,
    pub keyword_score: f64,
    pub semantic_score: f64,
    pub matched_terms: BTreeSet<String>,
}

/// One hit. Borrows the candidate from the caller's collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResult<'a> {
    pub candidate: &'a Candidate,
    /// Position of the candidate in the searched slice.
    pub index: usize,
    pub score: f64,
    pub keyword_score: f64,
    pub semantic_score: f64,
    pub matched_terms: BTreeSet<String>,
}

impl<'a> ScoredResult<'a> {
    pub fn new(candidate: &'a Candidate, index: usize, scored: CandidateScore) -> Self {
        Self {
            candidate,
            index,
            score: scored.score,
            keyword_score: scored.keyword_score,
            semantic_score: scored.semantic_score,
            matched_terms: scored.matched_terms,
        }
    }
}
