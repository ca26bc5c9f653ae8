// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structured filters: which candidates are allowed into the results at all.
//!
//! | Category            | Within category | Match rule                      |
//! |---------------------|-----------------|---------------------------------|
//! | `locations`         | any             | substring of location           |
//! | `skills_include`    | **all**         | equals a skill                  |
//! | `skills_exclude`    | none may match  | equals a skill                  |
//! | `current_companies` | any             | substring of current company    |
//! | `past_companies`    | any             | substring of some past company  |
//! | `schools`           | any             | substring of some school        |
//!
//! Every comparison is case-insensitive. Categories combine with AND, and an
//! empty category imposes nothing.

use crate::types::{Candidate, FilterSet};
use std::collections::HashSet;

impl FilterSet {
    /// True if any category has at least one entry.
    pub fn is_active(&self) -> bool {
        self.active_count() > 0
    }

    /// Number of non-empty categories (the filter badge count).
    pub fn active_count(&self) -> usize {
        self.categories().iter().filter(|c| !c.is_empty()).count()
    }

    fn categories(&self) -> [&Vec<String>; 6] {
        [
            &self.locations,
            &self.skills_include,
            &self.skills_exclude,
            &self.current_companies,
            &self.past_companies,
            &self.schools,
        ]
    }

    /// Trimmed copy with blanks and case-insensitive duplicates removed.
    ///
    /// A blank entry would be a substring of everything, so it must never
    /// reach the predicates.
    pub fn normalized(&self) -> FilterSet {
        FilterSet {
            locations: normalize_entries(&self.locations),
            skills_include: normalize_entries(&self.skills_include),
            skills_exclude: normalize_entries(&self.skills_exclude),
            current_companies: normalize_entries(&self.current_companies),
            past_companies: normalize_entries(&self.past_companies),
            schools: normalize_entries(&self.schools),
        }
    }

    /// Does the candidate pass every active category?
    pub fn matches(&self, candidate: &Candidate) -> bool {
        self.matches_skills(&candidate.skills)
            && self.matches_location(&candidate.location)
            && self.matches_current_company(candidate.current_company.as_deref())
            && any_contains(&self.past_companies, &candidate.past_companies)
            && any_contains(&self.schools, &candidate.schools)
    }

    /// Include-skills all present, exclude-skills all absent.
    pub fn matches_skills(&self, skills: &[String]) -> bool {
        let has = |wanted: &String| skills.iter().any(|s| same_ignoring_case(s, wanted));
        self.skills_include.iter().all(has) && !self.skills_exclude.iter().any(has)
    }

    pub fn matches_location(&self, location: &str) -> bool {
        self.locations.is_empty() || contains_any(location, &self.locations)
    }

    pub fn matches_current_company(&self, company: Option<&str>) -> bool {
        if self.current_companies.is_empty() {
            return true;
        }
        company.is_some_and(|c| contains_any(c, &self.current_companies))
    }
}

fn same_ignoring_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Case-insensitive: does `haystack` contain any of `needles`?
fn contains_any(haystack: &str, needles: &[String]) -> bool {
    let haystack = haystack.to_lowercase();
    needles
        .iter()
        .any(|n| haystack.contains(n.to_lowercase().as_str()))
}

/// Empty filter passes; otherwise some value must contain some filter entry.
fn any_contains(filters: &[String], values: &[String]) -> bool {
    filters.is_empty() || values.iter().any(|v| contains_any(v, filters))
}

fn normalize_entries(entries: &[String]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(entries.len());
    entries
        .iter()
        .map(|e| e.trim())
        .filter(|e| !e.is_empty())
        .filter(|e| seen.insert(e.to_lowercase()))
        .map(str::to_string)
        .collect()
}

// =============================================================================
// DRAFT FILTERS
// =============================================================================

/// Filter edits that haven't been applied yet.
///
/// The dashboard lets a recruiter build up filters in a side panel and only
/// re-runs the search on "Apply". The draft is a plain value; the applied
/// `FilterSet` is whatever `apply` last returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterDraft {
    draft: FilterSet,
}

/// Which category a draft edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterCategory {
    Location,
    SkillInclude,
    SkillExclude,
    CurrentCompany,
    PastCompany,
    School,
}

impl FilterDraft {
    /// Start editing from the currently applied filters.
    pub fn from_applied(applied: &FilterSet) -> Self {
        Self {
            draft: applied.clone(),
        }
    }

    fn slot(&mut self, category: FilterCategory) -> &mut Vec<String> {
        match category {
            FilterCategory::Location => &mut self.draft.locations,
            FilterCategory::SkillInclude => &mut self.draft.skills_include,
            FilterCategory::SkillExclude => &mut self.draft.skills_exclude,
            FilterCategory::CurrentCompany => &mut self.draft.current_companies,
            FilterCategory::PastCompany => &mut self.draft.past_companies,
            FilterCategory::School => &mut self.draft.schools,
        }
    }

    /// Add an entry. Blank and duplicate entries are ignored. Returns whether it was added.
    pub fn add(&mut self, category: FilterCategory, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }
        let slot = self.slot(category);
        if slot.iter().any(|v| same_ignoring_case(v, value)) {
            return false;
        }
        slot.push(value.to_string());
        true
    }

    /// Remove an entry (case-insensitive). Returns whether anything was removed.
    pub fn remove(&mut self, category: FilterCategory, value: &str) -> bool {
        let value = value.trim();
        let slot = self.slot(category);
        let before = slot.len();
        slot.retain(|v| !same_ignoring_case(v, value));
        slot.len() != before
    }

    pub fn reset(&mut self) {
        self.draft = FilterSet::default();
    }

    pub fn current(&self) -> &FilterSet {
        &self.draft
    }

    /// The normalized filters to search with.
    pub fn apply(&self) -> FilterSet {
        self.draft.normalized()
    }
}
