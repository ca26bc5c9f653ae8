// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind candidate ranking.
//!
//! ```text
//! keyword  = |distinct query terms ∩ candidate terms| + (location hit ? 1.5 : 0)
//! semantic = cos(tf(query), tf(candidate))                    ∈ [0, 1]
//!
//! keyword mode:  score = keyword
//! semantic mode: score = semantic × 10
//! both mode:     score = 0.5 × keyword + 0.5 × (semantic × 10)
//! ```
//!
//! The ×10 scale puts a perfect semantic match on the same footing as ten
//! shared keywords, so neither signal drowns the other in `both` mode.
//!
//! # Invariant: scores are non-negative
//!
//! Every term above is a count, a cosine of non-negative vectors, or a
//! non-negative weight. `ScorerConfig::validate` keeps the weights that way.

use crate::config::ScorerConfig;
use crate::tokenize::{candidate_tokens, tokenize};
use crate::types::{Candidate, CandidateScore, SearchMode};
use crate::vector::{cosine_similarity, TermVector};
use std::collections::BTreeSet;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Flat keyword bonus when a location filter is a substring of the candidate's location.
pub const LOCATION_BONUS: f64 = 1.5;

/// Cosine similarity is multiplied by this before blending.
pub const SEMANTIC_SCALE: f64 = 10.0;

/// Keyword share of the `both` blend.
pub const DEFAULT_KEYWORD_WEIGHT: f64 = 0.5;

/// Semantic share of the `both` blend.
pub const DEFAULT_SEMANTIC_WEIGHT: f64 = 0.5;

/// A query tokenized once and reused for every candidate.
#[derive(Debug, Clone, Default)]
pub struct PreparedQuery {
    pub vector: TermVector,
    /// Location filters, lowercased. Drive the location bonus.
    pub locations: Vec<String>,
    pub mode: SearchMode,
}

impl PreparedQuery {
    pub fn new<S: AsRef<str>>(text: &str, locations: &[S], mode: SearchMode) -> Self {
        Self {
            vector: TermVector::from_tokens(&tokenize(text)),
            locations: locations
                .iter()
                .map(|l| l.as_ref().to_lowercase())
                .collect(),
            mode,
        }
    }

    /// True when the text produced no tokens at all.
    pub fn has_terms(&self) -> bool {
        !self.vector.is_empty()
    }
}

/// Does any (lowercased) location filter occur in the candidate's location?
pub fn location_hit(location: &str, lowered_filters: &[String]) -> bool {
    if lowered_filters.is_empty() {
        return false;
    }
    let location = location.to_lowercase();
    lowered_filters.iter().any(|f| location.contains(f.as_str()))
}

/// Keyword score and the terms that produced it.
///
/// Each distinct query term counts once no matter how often it repeats on
/// either side.
pub fn keyword_score(
    query: &TermVector,
    candidate: &TermVector,
    location: &str,
    lowered_location_filters: &[String],
    location_bonus: f64,
) -> (f64, BTreeSet<String>) {
    let matched: BTreeSet<String> = query
        .terms()
        .filter(|term| candidate.contains(term))
        .map(str::to_string)
        .collect();

    let mut score = matched.len() as f64;
    if location_hit(location, lowered_location_filters) {
        score += location_bonus;
    }
    (score, matched)
}

/// Blend the sub-scores according to the mode.
pub fn combined_score(
    mode: SearchMode,
    keyword: f64,
    semantic: f64,
    config: &ScorerConfig,
) -> f64 {
    let scaled_semantic = semantic * config.semantic_scale;
    match mode {
        SearchMode::Keyword => keyword,
        SearchMode::Semantic => scaled_semantic,
        SearchMode::Both => config.keyword_weight * keyword + config.semantic_weight * scaled_semantic,
    }
}

/// Score one candidate against a prepared query. Does not filter.
pub fn score_candidate(
    candidate: &Candidate,
    query: &PreparedQuery,
    config: &ScorerConfig,
) -> CandidateScore {
    let candidate_vector = TermVector::from_tokens(&candidate_tokens(candidate));

    let (keyword, matched_terms) = keyword_score(
        &query.vector,
        &candidate_vector,
        &candidate.location,
        &query.locations,
        config.location_bonus,
    );
    let semantic = cosine_similarity(&query.vector, &candidate_vector);
    let score = combined_score(query.mode, keyword, semantic, config);

    CandidateScore {
        score,
        keyword_score: keyword,
        semantic_score: semantic,
        matched_terms,
    }
}
