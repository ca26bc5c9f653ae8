// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match highlighting for display text.
//!
//! Results carry the set of matched terms. To bold them in a card, the UI
//! needs the original text split into plain and matched runs. A word is a
//! run of characters that lowercase to ASCII letters and digits, and it counts
//! as matched when its lowercase form is in the set. This mirrors tokenization:
//! "Python," highlights "Python" and leaves the comma plain, and the Kelvin
//! sign in "\u{212A}8s" highlights as "k8s".
//!
//! A character whose lowercase mixes ASCII with other code points (`İ`
//! lowercases to `i` plus a combining dot) is treated as a separator here,
//! while tokenization keeps its ASCII part.
//!
//! **Invariant**: concatenating the segment texts reproduces the input exactly.

use serde::Serialize;
use std::collections::BTreeSet;

/// A slice of display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment<'a> {
    pub text: &'a str,
    pub matched: bool,
}

/// Split `text` into alternating plain / matched segments.
///
/// Adjacent plain runs are merged, so two matched words separated by a space
/// produce three segments, not more.
pub fn highlight<'a>(text: &'a str, matched_terms: &BTreeSet<String>) -> Vec<Segment<'a>> {
    let mut segments: Vec<Segment<'a>> = Vec::new();
    if text.is_empty() {
        return segments;
    }

    let mut plain_start = 0;
    let mut word_start: Option<usize> = None;

    let close_word = |start: usize, end: usize, plain_start: &mut usize, segments: &mut Vec<Segment<'a>>| {
        let word = &text[start..end];
        if matched_terms.contains(&word.to_lowercase()) {
            if *plain_start < start {
                segments.push(Segment {
                    text: &text[*plain_start..start],
                    matched: false,
                });
            }
            segments.push(Segment {
                text: word,
                matched: true,
            });
            *plain_start = end;
        }
    };

    for (i, c) in text.char_indices() {
        let is_word_char = is_word_char(c);
        match (word_start, is_word_char) {
            (None, true) => word_start = Some(i),
            (Some(start), false) => {
                close_word(start, i, &mut plain_start, &mut segments);
                word_start = None;
            }
            _ => {}
        }
    }
    if let Some(start) = word_start {
        close_word(start, text.len(), &mut plain_start, &mut segments);
    }
    if plain_start < text.len() {
        segments.push(Segment {
            text: &text[plain_start..],
            matched: false,
        });
    }

    segments
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || (!c.is_ascii() && c.to_lowercase().all(|l| l.is_ascii_alphanumeric()))
}
