// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Arbitrary query text, mode, filters and limit over the sample talent pool.
//! The search must never panic and must always return a ranked, filtered,
//! limit-respecting list.

#![no_main]

use arbitrary::Arbitrary;
use hirescore::testing::sample_candidates;
use hirescore::{search, Candidate, FilterSet, SearchMode, SearchQuery};
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    mode: u8,
    locations: Vec<String>,
    skills_include: Vec<String>,
    skills_exclude: Vec<String>,
    companies: Vec<String>,
    limit: Option<u8>,
    /// Extra candidate built from fuzzed fields, appended to the pool.
    extra: Option<(String, String, String, Vec<String>)>,
}

fuzz_target!(|input: Input| {
    static POOL: OnceLock<Vec<Candidate>> = OnceLock::new();
    let base = POOL.get_or_init(sample_candidates);

    let mut pool = base.clone();
    if let Some((name, title, location, skills)) = input.extra {
        pool.push(Candidate {
            id: "fuzz".into(),
            name,
            title,
            location,
            skills,
            ..Candidate::default()
        });
    }

    let mode = match input.mode % 3 {
        0 => SearchMode::Keyword,
        1 => SearchMode::Semantic,
        _ => SearchMode::Both,
    };
    let query = SearchQuery {
        text: input.text,
        filters: FilterSet {
            locations: input.locations,
            skills_include: input.skills_include,
            skills_exclude: input.skills_exclude,
            current_companies: input.companies,
            ..FilterSet::default()
        },
        mode,
        limit: input.limit.map(usize::from),
    };

    // INVARIANT 1: search() should never panic
    let results = search(&pool, &query);

    // INVARIANT 2: limit is respected
    if let Some(limit) = query.limit {
        assert!(results.len() <= limit, "{} results over limit {}", results.len(), limit);
    }

    // INVARIANT 3: every result passes the (normalized) filters
    let filters = query.filters.normalized();
    for result in &results {
        assert!(filters.matches(result.candidate));
        assert!(std::ptr::eq(result.candidate, &pool[result.index]));
    }

    // INVARIANT 4: scores in range, sorted descending, ties by index
    for result in &results {
        assert!(result.score.is_finite() && result.score >= 0.0);
        assert!((0.0..=1.0).contains(&result.semantic_score));
    }
    for pair in results.windows(2) {
        assert!(
            pair[0].score > pair[1].score
                || (pair[0].score == pair[1].score && pair[0].index < pair[1].index),
            "results out of order"
        );
    }

    // INVARIANT 5: nothing in, nothing out
    if query.text.trim().is_empty() && !filters.is_active() {
        assert!(results.is_empty());
    }
});
