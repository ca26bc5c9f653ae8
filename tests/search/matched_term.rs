//! The `matched_terms` set on each result.

use super::common::{sample_candidates, sarah_chen};
use hirescore::{highlight, search, SearchQuery};

fn terms<'a>(result: &'a hirescore::ScoredResult<'_>) -> Vec<&'a str> {
    result.matched_terms.iter().map(String::as_str).collect()
}

#[test]
fn test_matched_terms_are_shared_query_tokens() {
    let candidates = vec![sarah_chen()];
    let results = search(&candidates, &SearchQuery::text("Python Engineer Rust"));

    assert_eq!(results.len(), 1);
    assert_eq!(terms(&results[0]), ["engineer", "python"]);
    assert_eq!(results[0].keyword_score, 2.0);
}

#[test]
fn test_matched_terms_are_normalized() {
    let candidates = sample_candidates();
    let results = search(&candidates, &SearchQuery::text("NODE.JS"));

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].candidate.id, "2");
    assert_eq!(terms(&results[0]), ["js", "node"]);
}

#[test]
fn test_repeated_query_words_count_once() {
    let candidates = sample_candidates();
    let once = search(&candidates, &SearchQuery::text("python"));
    let twice = search(&candidates, &SearchQuery::text("python python PYTHON"));

    // Cosine is scale-invariant and the keyword score counts distinct terms.
    assert_eq!(once, twice);
}

#[test]
fn test_filter_only_results_have_no_terms() {
    let candidates = sample_candidates();
    let mut query = SearchQuery::default();
    query.filters.schools = vec!["MIT".into()];

    for result in search(&candidates, &query) {
        assert!(result.matched_terms.is_empty());
    }
}

#[test]
fn test_matched_terms_drive_highlighting() {
    let candidates = sample_candidates();
    let results = search(&candidates, &SearchQuery::text("senior frontend"));
    let aisha = results
        .iter()
        .find(|r| r.candidate.id == "7")
        .expect("Aisha should match");

    let segments = highlight(&aisha.candidate.title, &aisha.matched_terms);
    let marked: Vec<&str> = segments
        .iter()
        .filter(|s| s.matched)
        .map(|s| s.text)
        .collect();
    assert_eq!(marked, ["Senior", "Frontend"]);
}
