//! Tokenizer output shape.

use hirescore::{highlight, tokenize, MIN_TOKEN_LEN};
use proptest::prelude::*;
use std::collections::BTreeSet;

proptest! {
    #[test]
    fn prop_tokens_are_clean(text in "\\PC{0,60}") {
        for token in tokenize(&text) {
            prop_assert!(token.len() >= MIN_TOKEN_LEN);
            prop_assert!(token.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));
        }
    }

    #[test]
    fn prop_tokenize_idempotent(text in "\\PC{0,60}") {
        let once = tokenize(&text);
        let twice = tokenize(&once.join(" "));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_ascii_case_insensitive(text in "[ -~]{0,60}") {
        prop_assert_eq!(
            tokenize(&text.to_ascii_uppercase()),
            tokenize(&text.to_ascii_lowercase())
        );
    }

    #[test]
    fn prop_highlight_reassembles_input(
        text in "[ -~]{0,60}",
        terms in prop::collection::btree_set("[a-z]{2,4}", 0..4),
    ) {
        let segments = highlight(&text, &terms);
        let joined: String = segments.iter().map(|s| s.text).collect();
        prop_assert_eq!(joined, text);
    }

    #[test]
    fn prop_highlight_marks_only_matched_terms(text in "\\PC{0,60}") {
        let terms: BTreeSet<String> = tokenize(&text).into_iter().take(2).collect();
        for segment in highlight(&text, &terms) {
            if segment.matched {
                prop_assert!(terms.contains(&segment.text.to_lowercase()));
            }
        }
    }
}
