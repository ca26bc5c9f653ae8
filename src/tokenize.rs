// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tokenization: the one place text turns into terms.
//!
//! Query and candidate text go through exactly the same function, so a term
//! can only match if both sides produce it. The rules are deliberately blunt:
//!
//! 1. Lowercase
//! 2. Anything outside `[a-z0-9]` and whitespace becomes a space
//! 3. Split on whitespace runs
//! 4. Drop tokens of length 1
//!
//! Accented letters are not folded, so "José" tokenizes to `["jos"]`.
//! Tokens are always ASCII, which keeps byte length equal to char length.

use crate::types::Candidate;

/// Tokens shorter than this are dropped ("a", "c", "r" carry no signal).
pub const MIN_TOKEN_LEN: usize = 2;

/// Split text into search tokens, in order of appearance (duplicates kept).
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| token.len() >= MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}

/// The text a candidate is matched against: name, title, location, then skills.
///
/// Companies and schools are deliberately absent. They only participate
/// through filters.
pub fn searchable_text(candidate: &Candidate) -> String {
    let mut text = String::with_capacity(
        candidate.name.len() + candidate.title.len() + candidate.location.len() + 32,
    );
    text.push_str(&candidate.name);
    text.push(' ');
    text.push_str(&candidate.title);
    text.push(' ');
    text.push_str(&candidate.location);
    for skill in &candidate.skills {
        text.push(' ');
        text.push_str(skill);
    }
    text
}

/// Tokens of a candidate's searchable text.
pub fn candidate_tokens(candidate: &Candidate) -> Vec<String> {
    tokenize(&searchable_text(candidate))
}
