//! Ranking order across modes.
//!
//! Expected orders are worked out by hand from term counts. Each sample
//! profile has only distinct tokens, so cosine similarity is
//! `shared / (sqrt(query_terms) * sqrt(profile_terms))`.

use super::common::{assert_ranked, filters_with, ids, sample_candidates, strings, DATASET};
use hirescore::{search, search_with_config, ScorerConfig, SearchMode, SearchQuery};

#[test]
fn test_both_mode_order() {
    let candidates = sample_candidates();
    let results = search(&candidates, &SearchQuery::text("python engineer"));

    // David and Tom tie exactly (2 shared terms, 10-token profiles),
    // so input order decides.
    assert_eq!(ids(&results), ["6", "8", "1", "3", "7", "4"]);
    assert_eq!(results[0].score, results[1].score);
    assert_ranked(&results);
}

#[test]
fn test_semantic_mode_prefers_shorter_profiles() {
    let candidates = sample_candidates();
    let query = SearchQuery::text("python").with_mode(SearchMode::Semantic);
    let results = search(&candidates, &query);

    // 9-token Priya > 10-token David = Tom > 13-token Sarah
    assert_eq!(ids(&results), ["3", "6", "8", "1"]);
    assert!((results[0].score - 10.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_keyword_mode_ignores_cosine() {
    let candidates = sample_candidates();
    let query = SearchQuery::text("python engineer").with_mode(SearchMode::Keyword);
    let results = search(&candidates, &query);

    // Three candidates share both terms; keyword mode can't tell them apart.
    assert_eq!(ids(&results)[..3], ["1", "6", "8"]);
    for result in &results {
        assert_eq!(result.score, result.keyword_score);
    }
}

#[test]
fn test_location_bonus_ranks_filtered_hits() {
    let candidates = sample_candidates();
    let query = SearchQuery::text("python")
        .with_mode(SearchMode::Keyword)
        .with_filters(filters_with(|f| f.locations = strings(&["Boston"])));
    let results = search(&candidates, &query);

    assert_eq!(ids(&results), ["3", "6"]);
    for result in &results {
        assert_eq!(result.keyword_score, 2.5);
    }
}

#[test]
fn test_filter_only_search_scores_bonus() {
    let candidates = sample_candidates();
    let query =
        SearchQuery::default().with_filters(filters_with(|f| f.locations = strings(&["Boston"])));
    let results = search(&candidates, &query);

    assert_eq!(ids(&results), ["3", "6"]);
    assert!(results.iter().all(|r| r.score == 0.75));
    assert!(results.iter().all(|r| r.semantic_score == 0.0));
}

#[test]
fn test_limit_applies_after_sorting() {
    let candidates = sample_candidates();
    let query = SearchQuery::text("python engineer").with_limit(2);
    assert_eq!(ids(&search(&candidates, &query)), ["6", "8"]);

    let query = SearchQuery::text("python engineer").with_limit(0);
    assert!(search(&candidates, &query).is_empty());

    let query = SearchQuery::text("python engineer").with_limit(100);
    assert_eq!(search(&candidates, &query).len(), 6);
}

#[test]
fn test_custom_weights_change_blend() {
    let candidates = sample_candidates();
    let keyword_only = ScorerConfig {
        keyword_weight: 1.0,
        semantic_weight: 0.0,
        ..ScorerConfig::default()
    };
    let results = search_with_config(
        &candidates,
        &SearchQuery::text("python engineer"),
        &keyword_only,
    );

    // Same as keyword mode: ties broken by position.
    assert_eq!(ids(&results)[..3], ["1", "6", "8"]);
}

#[test]
fn test_results_stable_across_runs() {
    let query = SearchQuery::text("senior engineer react");
    let first = search(&DATASET, &query);
    for _ in 0..5 {
        assert_eq!(search(&DATASET, &query), first);
    }
}
