//! Filters only ever narrow the result set.

use super::{filter_strategy, pool_strategy, text_strategy};
use hirescore::{search, FilterSet, SearchQuery};
use proptest::prelude::*;
use std::collections::HashSet;

fn indices(pool: &[hirescore::Candidate], query: &SearchQuery) -> HashSet<usize> {
    search(pool, query).into_iter().map(|r| r.index).collect()
}

proptest! {
    #[test]
    fn prop_normalized_is_idempotent(filters in filter_strategy()) {
        let once = filters.normalized();
        prop_assert_eq!(once.normalized(), once.clone());
        prop_assert!(once.active_count() <= filters.active_count());
    }

    #[test]
    fn prop_results_satisfy_filters(
        pool in pool_strategy(),
        text in text_strategy(4),
        filters in filter_strategy(),
    ) {
        let normalized = filters.normalized();
        let query = SearchQuery::text(text).with_filters(filters);
        for result in search(&pool, &query) {
            prop_assert!(normalized.matches(result.candidate));
        }
    }

    #[test]
    fn prop_adding_a_category_narrows(
        pool in pool_strategy(),
        filters in filter_strategy(),
    ) {
        // Start from a location-only set and add the rest.
        let base = FilterSet {
            locations: vec!["Boston".into(), "Seattle".into(), "Remote".into()],
            ..FilterSet::default()
        };
        let mut narrower = filters.clone();
        narrower.locations = base.locations.clone();

        let wide = indices(&pool, &SearchQuery::default().with_filters(base));
        let narrow = indices(&pool, &SearchQuery::default().with_filters(narrower));
        prop_assert!(narrow.is_subset(&wide));
    }

    #[test]
    fn prop_excluded_skills_never_returned(
        pool in pool_strategy(),
        text in text_strategy(4),
        filters in filter_strategy(),
    ) {
        let excluded: Vec<String> = filters
            .skills_exclude
            .iter()
            .map(|s| s.to_lowercase())
            .collect();
        let query = SearchQuery::text(text).with_filters(filters);
        for result in search(&pool, &query) {
            for skill in &result.candidate.skills {
                prop_assert!(!excluded.contains(&skill.to_lowercase()));
            }
        }
    }
}
