// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search pipeline: score → filter → sort → limit.
//!
//! ```text
//! candidates ──▶ score_all ──▶ filters.matches ──▶ rank ──▶ truncate(limit)
//!                 (tf/cosine)   (+ score > 0 when      (score desc,
//!                               no filter is active)    index asc)
//! ```
//!
//! Nothing is cached between calls. Re-running the same query over the same
//! slice yields the same results in the same order.

#[cfg(feature = "parallel")]
mod parallel;

use crate::config::ScorerConfig;
use crate::contracts::{check_results_ranked, check_score_valid};
use crate::scoring::ranking::rank;
use crate::scoring::{score_candidate, PreparedQuery};
use crate::types::{Candidate, CandidateScore, ScoredResult, SearchQuery};

/// Collections at least this large are scored on the rayon pool.
#[cfg(feature = "parallel")]
pub const PARALLEL_THRESHOLD: usize = 2048;

/// Search with the default weights.
///
/// An empty (or whitespace-only) query with no active filters means "no
/// search performed" and returns nothing, not every candidate.
pub fn search<'a>(candidates: &'a [Candidate], query: &SearchQuery) -> Vec<ScoredResult<'a>> {
    search_with_config(candidates, query, &ScorerConfig::default())
}

/// Search with explicit weights.
pub fn search_with_config<'a>(
    candidates: &'a [Candidate],
    query: &SearchQuery,
    config: &ScorerConfig,
) -> Vec<ScoredResult<'a>> {
    let filters = query.filters.normalized();
    let filters_active = filters.is_active();

    if query.text.trim().is_empty() && !filters_active {
        tracing::debug!("empty query and no filters; skipping search");
        return Vec::new();
    }

    let prepared = PreparedQuery::new(&query.text, &filters.locations, query.mode);
    let scores = score_all(candidates, &prepared, config);

    let mut results: Vec<ScoredResult<'a>> = candidates
        .iter()
        .zip(scores)
        .enumerate()
        .filter(|(_, (candidate, scored))| {
            filters.matches(candidate) && (filters_active || scored.score > 0.0)
        })
        .map(|(index, (candidate, scored))| ScoredResult::new(candidate, index, scored))
        .collect();

    let matched = results.len();
    rank(&mut results);
    if let Some(limit) = query.limit {
        results.truncate(limit);
    }

    check_results_ranked(&results);

    tracing::debug!(
        mode = %query.mode,
        candidates = candidates.len(),
        query_terms = prepared.vector.len(),
        active_filters = filters.active_count(),
        matched,
        returned = results.len(),
        "candidate search finished"
    );

    results
}

/// Score every candidate, in input order.
pub fn score_all(
    candidates: &[Candidate],
    query: &PreparedQuery,
    config: &ScorerConfig,
) -> Vec<CandidateScore> {
    #[cfg(feature = "parallel")]
    if candidates.len() >= PARALLEL_THRESHOLD {
        return parallel::score_all(candidates, query, config);
    }

    candidates
        .iter()
        .map(|candidate| {
            let scored = score_candidate(candidate, query, config);
            check_score_valid(&scored);
            scored
        })
        .collect()
}
