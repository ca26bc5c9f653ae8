//! Structured filters over the sample talent pool.
//!
//! Every test uses an empty query unless noted, so the result set is exactly
//! the candidates the filters admit, in input order.

use super::common::{filters_with, ids, sample_candidates, strings};
use hirescore::{search, FilterDraft, FilterCategory, SearchQuery};

fn filtered(f: impl FnOnce(&mut hirescore::FilterSet)) -> Vec<String> {
    let candidates = sample_candidates();
    let query = SearchQuery::default().with_filters(filters_with(f));
    ids(&search(&candidates, &query))
        .into_iter()
        .map(str::to_string)
        .collect()
}

// ============================================================================
// SINGLE CATEGORY
// ============================================================================

#[test]
fn test_location_is_substring_match() {
    assert_eq!(filtered(|f| f.locations = strings(&["Boston"])), ["3", "6"]);
    assert_eq!(filtered(|f| f.locations = strings(&["new york"])), ["2"]);
}

#[test]
fn test_locations_are_disjunctive() {
    assert_eq!(
        filtered(|f| f.locations = strings(&["Boston", "Seattle"])),
        ["3", "4", "6"]
    );
}

#[test]
fn test_skills_include_requires_every_skill() {
    assert_eq!(
        filtered(|f| f.skills_include = strings(&["Python", "PyTorch"])),
        ["1", "6"]
    );
}

#[test]
fn test_skill_match_is_exact_not_substring() {
    // "Java" must not pick up "JavaScript"
    assert_eq!(filtered(|f| f.skills_include = strings(&["java"])), ["8"]);
}

#[test]
fn test_skills_exclude_removes_holders() {
    let candidates = sample_candidates();
    let query = SearchQuery::text("engineer")
        .with_filters(filters_with(|f| f.skills_exclude = strings(&["Python"])));
    let results = search(&candidates, &query);

    assert!(results
        .iter()
        .all(|r| !r.candidate.skills.iter().any(|s| s == "Python")));

    // An exclude filter is an active filter, so zero-score candidates stay.
    let mut got = ids(&results);
    got.sort_unstable();
    assert_eq!(got, ["2", "4", "5", "7"]);
}

#[test]
fn test_current_company_case_insensitive() {
    assert_eq!(
        filtered(|f| f.current_companies = strings(&["stripe"])),
        ["2"]
    );
}

#[test]
fn test_current_company_filter_rejects_unemployed() {
    // David Kim has no current company; "a" is in OpenAI but not Stripe
    let got = filtered(|f| f.current_companies = strings(&["a"]));
    assert!(!got.contains(&"6".to_string()));
    assert!(got.contains(&"1".to_string()));
    assert!(!got.contains(&"2".to_string()));
}

#[test]
fn test_past_companies_and_schools() {
    assert_eq!(filtered(|f| f.past_companies = strings(&["Google"])), ["1", "6"]);
    assert_eq!(filtered(|f| f.schools = strings(&["MIT"])), ["3", "6"]);
}

// ============================================================================
// COMBINATIONS
// ============================================================================

#[test]
fn test_categories_are_conjunctive() {
    assert_eq!(
        filtered(|f| {
            f.locations = strings(&["Boston"]);
            f.schools = strings(&["Carnegie"]);
        }),
        ["6"]
    );
}

#[test]
fn test_contradictory_filters_return_nothing() {
    assert!(filtered(|f| {
        f.skills_include = strings(&["Python"]);
        f.skills_exclude = strings(&["python"]);
    })
    .is_empty());
}

#[test]
fn test_blank_entries_are_ignored() {
    // Only blanks: no active filter, empty query, so no search at all.
    assert!(filtered(|f| f.locations = strings(&["", "   "])).is_empty());
    // Blank next to a real entry doesn't widen the match.
    assert_eq!(filtered(|f| f.locations = strings(&[" ", "Austin"])), ["5"]);
}

// ============================================================================
// DRAFT → APPLY
// ============================================================================

#[test]
fn test_draft_only_takes_effect_when_applied() {
    let candidates = sample_candidates();
    let mut applied = hirescore::FilterSet::default();

    let mut draft = FilterDraft::from_applied(&applied);
    assert!(draft.add(FilterCategory::Location, "Boston"));
    assert!(draft.add(FilterCategory::School, "MIT"));
    assert!(!draft.add(FilterCategory::School, "mit"));

    // Not applied yet: the empty search still returns nothing.
    let query = SearchQuery::default().with_filters(applied.clone());
    assert!(search(&candidates, &query).is_empty());

    applied = draft.apply();
    let query = SearchQuery::default().with_filters(applied.clone());
    assert_eq!(ids(&search(&candidates, &query)), ["3", "6"]);

    let mut draft = FilterDraft::from_applied(&applied);
    draft.reset();
    assert!(!draft.apply().is_active());
}
