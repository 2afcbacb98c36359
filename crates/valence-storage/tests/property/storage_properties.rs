//! Property tests: count-query consistency over generated corpora.

use proptest::prelude::*;

use valence_core::models::document::{CorpusSet, Document};
use valence_core::models::polarity::Polarity;
use valence_core::traits::ICorpusReader;
use valence_storage::CorpusStore;

/// A generated corpus entry: text plus an optional label.
fn arb_entry() -> impl Strategy<Value = (String, Option<Polarity>)> {
    (
        prop::collection::vec("[a-z]{1,6}", 1..8).prop_map(|w| w.join(" ")),
        prop_oneof![
            Just(None),
            Just(Some(Polarity::Plus)),
            Just(Some(Polarity::Minus)),
        ],
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_polarity_counts_partition_labeled_total(
        entries in prop::collection::vec(arb_entry(), 0..25)
    ) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let store = CorpusStore::open_in_memory().unwrap();
            for (i, (text, label)) in entries.iter().enumerate() {
                let id = i.to_string();
                store
                    .insert(&Document::new(id.clone(), text.clone(), CorpusSet::Training))
                    .unwrap();
                if let Some(p) = label {
                    store.set_polarity(&id, *p).unwrap();
                }
            }

            let all = store.count_labeled().await.unwrap();
            let plus = store.count_by_polarity(Polarity::Plus).await.unwrap();
            let minus = store.count_by_polarity(Polarity::Minus).await.unwrap();
            assert_eq!(plus + minus, all);

            // Any matching subset is bounded by the labeled total.
            let matching = store.texts_matching("% a %").await.unwrap();
            assert!(matching.len() as u64 <= all);
        });
    }
}
