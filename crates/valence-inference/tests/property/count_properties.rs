//! Property tests: the count-set invariant holds for any generated corpus
//! and any feature drawn from it.

use std::sync::Arc;

use proptest::prelude::*;

use valence_core::models::counts::CountsOutcome;
use valence_core::models::document::{CorpusSet, Document};
use valence_core::models::polarity::Polarity;
use valence_inference::counts::counts_for;
use valence_storage::CorpusStore;
use valence_text::pattern::MatchPattern;
use valence_text::tokenize::{trigram_windows, word_tokens};

fn arb_doc() -> impl Strategy<Value = (String, Polarity)> {
    (
        prop::collection::vec("[a-d]{1,3}", 1..8).prop_map(|w| w.join(" ")),
        prop_oneof![Just(Polarity::Plus), Just(Polarity::Minus)],
    )
}

fn seeded_store(docs: &[(String, Polarity)]) -> CorpusStore {
    let store = CorpusStore::open_in_memory().unwrap();
    for (i, (text, polarity)) in docs.iter().enumerate() {
        let id = i.to_string();
        store
            .insert(&Document::new(id.clone(), text.clone(), CorpusSet::Training))
            .unwrap();
        store.set_polarity(&id, *polarity).unwrap();
    }
    store
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_word_count_sets_are_valid(
        docs in prop::collection::vec(arb_doc(), 1..12),
        pick in 0usize..64,
    ) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let store = seeded_store(&docs);
            let (text, _) = &docs[pick % docs.len()];
            let tokens = word_tokens(text);
            let token = &tokens[pick % tokens.len()];
            let pattern = MatchPattern::new(
                valence_core::models::feature::Feature::word(token.clone()),
            );

            for polarity in Polarity::ALL {
                match counts_for(&store, polarity, &pattern).await.unwrap() {
                    CountsOutcome::NoEvidence => {}
                    CountsOutcome::Counts(c) => {
                        assert!(c.is_valid(), "invalid count set: {c:?}");
                        assert_eq!(c.all_docs, docs.len() as u64);
                    }
                }
            }
        });
    }

    #[test]
    fn prop_trigram_count_sets_are_valid(
        docs in prop::collection::vec(arb_doc(), 1..10),
        pick in 0usize..64,
    ) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let store = seeded_store(&docs);
            let (text, _) = &docs[pick % docs.len()];
            let windows = trigram_windows(text, None);
            if windows.is_empty() {
                return;
            }
            let pattern = MatchPattern::new(windows[pick % windows.len()].clone());

            for polarity in Polarity::ALL {
                match counts_for(&store, polarity, &pattern).await.unwrap() {
                    CountsOutcome::NoEvidence => {}
                    CountsOutcome::Counts(c) => {
                        assert!(c.is_valid(), "invalid count set: {c:?}");
                    }
                }
            }
        });
    }
}
