// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for tokenization and highlighting.
//!
//! Any UTF-8 text must tokenize to clean ASCII tokens, and highlighting it
//! with its own tokens must split it without losing or duplicating a byte.

#![no_main]

use hirescore::{highlight, tokenize, MIN_TOKEN_LEN};
use libfuzzer_sys::fuzz_target;
use std::collections::BTreeSet;

fuzz_target!(|text: &str| {
    let tokens = tokenize(text);
    for token in &tokens {
        assert!(token.len() >= MIN_TOKEN_LEN);
        assert!(token.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));
    }

    // Re-tokenizing the output is a no-op.
    assert_eq!(tokenize(&tokens.join(" ")), tokens);

    let terms: BTreeSet<String> = tokens.into_iter().collect();
    let segments = highlight(text, &terms);
    let joined: String = segments.iter().map(|s| s.text).collect();
    assert_eq!(joined, text);
});
