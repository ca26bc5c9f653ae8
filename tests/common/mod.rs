//! Shared test utilities and fixtures.

#![allow(dead_code)]

use hirescore::{load_candidates, Candidate, FilterSet, ScoredResult};
use std::sync::LazyLock;

// Re-export canonical test utilities from hirescore::testing
pub use hirescore::testing::{make_candidate, sample_candidates, sarah_chen};

// ============================================================================
// FIXTURES
// ============================================================================

/// Candidate file checked into the repository.
pub const SAMPLE_DATASET: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/candidates.json");

/// `data/candidates.json`, loaded once per test binary.
pub static DATASET: LazyLock<Vec<Candidate>> = LazyLock::new(|| {
    load_candidates(SAMPLE_DATASET).expect("data/candidates.json should load")
});

/// A filter set built by mutating the default.
pub fn filters_with(f: impl FnOnce(&mut FilterSet)) -> FilterSet {
    let mut filters = FilterSet::default();
    f(&mut filters);
    filters
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Candidate ids in result order.
pub fn ids<'a>(results: &[ScoredResult<'a>]) -> Vec<&'a str> {
    results.iter().map(|r| r.candidate.id.as_str()).collect()
}

/// Score descending, then input order.
pub fn assert_ranked(results: &[ScoredResult<'_>]) {
    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.score > b.score || (a.score == b.score && a.index < b.index),
            "results out of order: {} ({}, #{}) before {} ({}, #{})",
            a.candidate.id,
            a.score,
            a.index,
            b.candidate.id,
            b.score,
            b.index
        );
    }
}
