//! Property tests: tokenizer output shape, window count formula, pattern
//! consistency between coarse and precise sides.

use proptest::prelude::*;

use valence_core::models::feature::Feature;
use valence_text::pattern::MatchPattern;
use valence_text::tokenize::{trigram_windows, word_tokens};

proptest! {
    #[test]
    fn prop_tokens_are_never_empty(text in ".{0,200}") {
        for token in word_tokens(&text) {
            prop_assert!(!token.is_empty());
        }
    }

    #[test]
    fn prop_tokens_are_lowercase(text in "[a-zA-Z !?.,]{0,120}") {
        for token in word_tokens(&text) {
            prop_assert_eq!(token.to_lowercase(), token);
        }
    }

    #[test]
    fn prop_window_count_formula(words in prop::collection::vec("[a-z]{1,8}", 0..20)) {
        let text = words.join(" ");
        let tokens = word_tokens(&text);
        let l = tokens.len();
        let expected = if l > 2 { 2 + (l - 2) } else { 0 };
        prop_assert_eq!(trigram_windows(&text, None).len(), expected);
    }

    #[test]
    fn prop_every_window_of_a_doc_matches_that_doc(
        words in prop::collection::vec("[a-z]{1,8}", 3..15)
    ) {
        let text = words.join(" ");
        for feature in trigram_windows(&text, None) {
            let pattern = MatchPattern::new(feature);
            prop_assert!(pattern.matches(&text));
        }
    }

    #[test]
    fn prop_word_feature_of_a_doc_matches_that_doc(
        words in prop::collection::vec("[a-z]{1,8}", 1..15)
    ) {
        let text = words.join(" ");
        for token in word_tokens(&text) {
            let pattern = MatchPattern::new(Feature::word(token));
            prop_assert!(pattern.matches(&text));
        }
    }
}
