//! Inputs at the edges: empty, blank, punctuation-only, odd candidates.

use super::common::{make_candidate, sample_candidates};
use hirescore::{search, Candidate, SearchMode, SearchQuery};

#[test]
fn test_empty_query_returns_nothing() {
    let candidates = sample_candidates();
    for mode in [SearchMode::Keyword, SearchMode::Semantic, SearchMode::Both] {
        let query = SearchQuery::text("").with_mode(mode);
        assert!(search(&candidates, &query).is_empty());
    }
}

#[test]
fn test_whitespace_query_is_empty() {
    let candidates = sample_candidates();
    assert!(search(&candidates, &SearchQuery::text(" \t\n ")).is_empty());
}

#[test]
fn test_query_without_tokens_returns_nothing() {
    // "C++" and "R" are single letters after cleaning.
    let candidates = sample_candidates();
    assert!(search(&candidates, &SearchQuery::text("C++ R !!")).is_empty());
}

#[test]
fn test_no_candidates() {
    let candidates: Vec<Candidate> = Vec::new();
    assert!(search(&candidates, &SearchQuery::text("python")).is_empty());
}

#[test]
fn test_unknown_terms_match_nothing() {
    let candidates = sample_candidates();
    assert!(search(&candidates, &SearchQuery::text("cobol mainframe")).is_empty());
}

#[test]
fn test_candidate_with_empty_fields() {
    let candidates = vec![
        Candidate {
            id: "x".into(),
            ..Candidate::default()
        },
        make_candidate("y", "Yan", "Rust Engineer", &[]),
    ];
    let results = search(&candidates, &SearchQuery::text("rust"));

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].candidate.id, "y");
    assert_eq!(results[0].index, 1);
}

#[test]
fn test_non_ascii_letters_are_dropped() {
    // "José" tokenizes to "jos"; the accented letter acts as a separator.
    let candidates = vec![make_candidate("1", "José Núñez", "Engineer", &[])];
    let results = search(&candidates, &SearchQuery::text("jos"));
    assert_eq!(results.len(), 1);
    assert_eq!(search(&candidates, &SearchQuery::text("josé")).len(), 1);
}

#[test]
fn test_companies_are_not_searchable_text() {
    // Stripe is Marcus's current company, but only filters look at companies.
    let candidates = sample_candidates();
    assert!(search(&candidates, &SearchQuery::text("stripe")).is_empty());
}

#[test]
fn test_duplicate_candidates_both_returned() {
    let sarah = make_candidate("1", "Sarah Chen", "Senior AI Engineer", &["Python"]);
    let candidates = vec![sarah.clone(), sarah];
    let results = search(&candidates, &SearchQuery::text("python"));

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].index, 0);
    assert_eq!(results[1].index, 1);
}
