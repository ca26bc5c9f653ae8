// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel scoring for large candidate pools.
//!
//! Scoring one candidate never looks at another, so this is a plain
//! `par_iter().map()`. Rayon's indexed `collect` keeps input order, which is
//! what lets the ranking tiebreaker stay "position in the input".

use rayon::prelude::*;

use crate::config::ScorerConfig;
use crate::contracts::check_score_valid;
use crate::scoring::{score_candidate, PreparedQuery};
use crate::types::{Candidate, CandidateScore};

pub(super) fn score_all(
    candidates: &[Candidate],
    query: &PreparedQuery,
    config: &ScorerConfig,
) -> Vec<CandidateScore> {
    candidates
        .par_iter()
        .map(|candidate| {
            let scored = score_candidate(candidate, query, config);
            check_score_valid(&scored);
            scored
        })
        .collect()
}
