// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored candidates get sorted.
//!
//! Sort order:
//! 1. **Score** - descending
//! 2. **Index** - ascending position in the input collection
//!
//! The index tiebreaker makes the order total, so the result never depends
//! on sort stability or on how scoring was parallelized.

use crate::types::ScoredResult;
use std::cmp::Ordering;

/// Compare two results for ranking. `Less` means `a` ranks first.
///
/// Scores are never NaN (see `contracts`), but `total_cmp` keeps the order
/// total even if one slips through.
pub fn compare_results(a: &ScoredResult<'_>, b: &ScoredResult<'_>) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.index.cmp(&b.index))
}

/// Sort results into final ranking order.
pub fn rank(results: &mut [ScoredResult<'_>]) {
    results.sort_unstable_by(compare_results);
}
