//! Runtime contracts for the scoring invariants.
//!
//! Debug-mode assertions that catch a broken score before it reaches a
//! recruiter's screen. They compile to nothing in release builds.
//!
//! | Contract Function         | Property                                     |
//! |---------------------------|----------------------------------------------|
//! | `check_score_valid`       | sub-scores finite, `score >= 0`, cos ∈ [0,1] |
//! | `check_results_ranked`    | score desc, then index asc                   |
//!
//! # Usage
//!
//! ```ignore
//! let scored = score_candidate(&candidate, &query, &config);
//! check_score_valid(&scored);
//! ```

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// The default weights must keep every score non-negative and the semantic
/// scale must be large enough that a perfect cosine match outweighs a single
/// shared keyword in `both` mode.
const _: () = {
    use crate::scoring::{
        DEFAULT_KEYWORD_WEIGHT, DEFAULT_SEMANTIC_WEIGHT, LOCATION_BONUS, SEMANTIC_SCALE,
    };

    assert!(DEFAULT_KEYWORD_WEIGHT >= 0.0);
    assert!(DEFAULT_SEMANTIC_WEIGHT >= 0.0);
    assert!(LOCATION_BONUS >= 0.0);
    assert!(DEFAULT_SEMANTIC_WEIGHT * SEMANTIC_SCALE > DEFAULT_KEYWORD_WEIGHT * 1.0);

    // Defaults must themselves pass `ScorerConfig::validate`.
    use crate::config::MAX_CONFIG_VALUE;
    assert!(DEFAULT_KEYWORD_WEIGHT <= MAX_CONFIG_VALUE);
    assert!(DEFAULT_SEMANTIC_WEIGHT <= MAX_CONFIG_VALUE);
    assert!(SEMANTIC_SCALE <= MAX_CONFIG_VALUE);
    assert!(LOCATION_BONUS <= MAX_CONFIG_VALUE);
};

use crate::types::{CandidateScore, ScoredResult};

/// Check that a candidate score is well-formed.
///
/// # Panics (debug builds only)
/// Panics on NaN/infinite scores, negative scores, or a cosine outside `[0, 1]`.
#[inline]
pub fn check_score_valid(scored: &CandidateScore) {
    debug_assert!(
        scored.score.is_finite() && scored.score >= 0.0,
        "Contract violation: score must be finite and non-negative, got {}",
        scored.score
    );
    debug_assert!(
        scored.keyword_score.is_finite() && scored.keyword_score >= 0.0,
        "Contract violation: keyword score must be finite and non-negative, got {}",
        scored.keyword_score
    );
    debug_assert!(
        (0.0..=1.0).contains(&scored.semantic_score),
        "Contract violation: cosine similarity outside [0, 1]: {}",
        scored.semantic_score
    );
}

/// Check that results are in final ranking order.
///
/// # Panics (debug builds only)
/// Panics if a higher score follows a lower one, or equal scores are out of
/// input order.
#[inline]
pub fn check_results_ranked(results: &[ScoredResult<'_>]) {
    #[cfg(debug_assertions)]
    for (i, pair) in results.windows(2).enumerate() {
        let (a, b) = (&pair[0], &pair[1]);
        debug_assert!(
            a.score > b.score || (a.score == b.score && a.index < b.index),
            "Contract violation: results not ranked at position {}: ({}, #{}) before ({}, #{})",
            i,
            a.score,
            a.index,
            b.score,
            b.index
        );
    }
    #[cfg(not(debug_assertions))]
    let _ = results;
}
