// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Candidate collections on disk.
//!
//! Two JSON shapes are accepted, because exports from the dashboard wrap the
//! list and hand-written fixtures usually don't:
//!
//! ```json
//! [ { "id": "1", "name": "Sarah Chen", ... } ]
//! { "candidates": [ { "id": "1", "name": "Sarah Chen", ... } ] }
//! ```

use crate::error::{Error, Result};
use crate::types::Candidate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum CandidateFile {
    List(Vec<Candidate>),
    Wrapped { candidates: Vec<Candidate> },
}

impl From<CandidateFile> for Vec<Candidate> {
    fn from(file: CandidateFile) -> Self {
        match file {
            CandidateFile::List(list) => list,
            CandidateFile::Wrapped { candidates } => candidates,
        }
    }
}

/// Parse a candidate collection from a JSON string.
pub fn parse_candidates(json: &str) -> std::result::Result<Vec<Candidate>, serde_json::Error> {
    let file: CandidateFile = serde_json::from_str(json)?;
    let candidates: Vec<Candidate> = file.into();
    warn_duplicate_ids(&candidates);
    Ok(candidates)
}

/// Read a candidate collection from disk.
///
/// Duplicate ids are kept (the scorer doesn't care) but logged, since the
/// dashboard keys its cards on them.
pub fn load_candidates(path: impl AsRef<Path>) -> Result<Vec<Candidate>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let candidates = parse_candidates(&content).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), count = candidates.len(), "loaded candidates");
    Ok(candidates)
}

fn warn_duplicate_ids(candidates: &[Candidate]) {
    let mut seen = HashSet::with_capacity(candidates.len());
    for candidate in candidates {
        if !seen.insert(candidate.id.as_str()) {
            tracing::warn!(id = %candidate.id, name = %candidate.name, "duplicate candidate id");
        }
    }
}

// =============================================================================
// SUMMARY
// =============================================================================

/// What's in a talent pool, at a glance.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    pub candidate_count: usize,
    /// (skill, count), most common first, ties alphabetical.
    pub skills: Vec<(String, usize)>,
    /// (location, count), most common first, ties alphabetical.
    pub locations: Vec<(String, usize)>,
    pub without_skills: usize,
    pub without_current_company: usize,
    pub without_schools: usize,
    pub without_contact: usize,
}

/// Count skills, locations and missing fields.
///
/// Skills are grouped case-insensitively and reported in the spelling seen
/// first.
pub fn summarize(candidates: &[Candidate]) -> DatasetSummary {
    let mut skill_counts: BTreeMap<String, (String, usize)> = BTreeMap::new();
    let mut location_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut summary = DatasetSummary {
        candidate_count: candidates.len(),
        ..DatasetSummary::default()
    };

    for candidate in candidates {
        let mut counted = HashSet::new();
        for skill in &candidate.skills {
            let key = skill.trim().to_lowercase();
            if key.is_empty() || !counted.insert(key.clone()) {
                continue;
            }
            skill_counts
                .entry(key)
                .or_insert_with(|| (skill.trim().to_string(), 0))
                .1 += 1;
        }

        let location = candidate.location.trim();
        if !location.is_empty() {
            *location_counts.entry(location.to_string()).or_insert(0) += 1;
        }

        if candidate.skills.is_empty() {
            summary.without_skills += 1;
        }
        if candidate.current_company.as_deref().map_or(true, |c| c.trim().is_empty()) {
            summary.without_current_company += 1;
        }
        if candidate.schools.is_empty() {
            summary.without_schools += 1;
        }
        if candidate.email.is_none() && candidate.linkedin_url.is_none() {
            summary.without_contact += 1;
        }
    }

    summary.skills = by_frequency(skill_counts.into_values().collect());
    summary.locations = by_frequency(location_counts.into_iter().collect());
    summary
}

fn by_frequency(mut entries: Vec<(String, usize)>) -> Vec<(String, usize)> {
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}
