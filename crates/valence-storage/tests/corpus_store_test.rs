//! Integration tests for the corpus store: CRUD, labeling visibility,
//! count-query scoping, LIKE escaping.

use valence_core::models::document::{CorpusSet, Document};
use valence_core::models::polarity::Polarity;
use valence_core::traits::ICorpusReader;
use valence_storage::CorpusStore;

fn store() -> CorpusStore {
    CorpusStore::open_in_memory().expect("open in-memory store")
}

fn doc(id: &str, text: &str, corpus: CorpusSet) -> Document {
    Document::new(id, text, corpus)
}

#[test]
fn insert_ignores_duplicate_doc_id_per_corpus() {
    let s = store();
    assert!(s.insert(&doc("1", "first text", CorpusSet::Training)).unwrap());
    assert!(!s.insert(&doc("1", "other text", CorpusSet::Training)).unwrap());
    // Same id in the other corpus is a distinct row.
    assert!(s.insert(&doc("1", "first text", CorpusSet::Working)).unwrap());
}

#[test]
fn set_polarity_targets_training_only() {
    let s = store();
    s.insert(&doc("1", "a text", CorpusSet::Training)).unwrap();
    s.insert(&doc("2", "a text", CorpusSet::Working)).unwrap();

    assert_eq!(s.set_polarity("1", Polarity::Plus).unwrap(), 1);
    assert_eq!(s.set_polarity("2", Polarity::Plus).unwrap(), 0);
    assert_eq!(s.set_polarity("missing", Polarity::Plus).unwrap(), 0);
}

#[test]
fn untrained_shrinks_as_labels_land() {
    let s = store();
    for i in 0..4 {
        s.insert(&doc(&i.to_string(), "text here", CorpusSet::Training))
            .unwrap();
    }
    assert_eq!(s.untrained(None).unwrap().len(), 4);

    s.set_polarity("0", Polarity::Plus).unwrap();
    s.set_polarity("1", Polarity::Minus).unwrap();
    assert_eq!(s.untrained(None).unwrap().len(), 2);
    assert_eq!(s.untrained(Some(1)).unwrap().len(), 1);
}

#[test]
fn purge_drops_working_rows_present_in_training() {
    let s = store();
    s.insert(&doc("1", "shared", CorpusSet::Training)).unwrap();
    s.insert(&doc("1", "shared", CorpusSet::Working)).unwrap();
    s.insert(&doc("2", "only working", CorpusSet::Working)).unwrap();

    assert_eq!(s.purge_working_duplicates().unwrap(), 1);
    let working = s.working_set().unwrap();
    assert_eq!(working.len(), 1);
    assert_eq!(working[0].doc_id, "2");
}

#[tokio::test]
async fn count_queries_see_only_labeled_training_rows() {
    let s = store();
    s.insert(&doc("1", "the word here", CorpusSet::Training)).unwrap();
    s.insert(&doc("2", "the word here", CorpusSet::Training)).unwrap();
    s.insert(&doc("3", "the word here", CorpusSet::Working)).unwrap();

    // Nothing labeled yet: all counts empty.
    assert_eq!(s.count_labeled().await.unwrap(), 0);
    assert!(s.texts_matching("% word %").await.unwrap().is_empty());

    // Label one; it becomes visible immediately (read-after-write).
    s.set_polarity("1", Polarity::Minus).unwrap();
    assert_eq!(s.count_labeled().await.unwrap(), 1);
    assert_eq!(s.count_by_polarity(Polarity::Minus).await.unwrap(), 1);
    assert_eq!(s.count_by_polarity(Polarity::Plus).await.unwrap(), 0);
    assert_eq!(s.texts_matching("% word %").await.unwrap().len(), 1);
    assert_eq!(
        s.texts_by_polarity_matching(Polarity::Minus, "% word %")
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn like_is_case_insensitive_for_ascii() {
    let s = store();
    s.insert(&doc("1", "that was Bad indeed", CorpusSet::Training)).unwrap();
    s.set_polarity("1", Polarity::Minus).unwrap();

    assert_eq!(s.texts_matching("% bad %").await.unwrap().len(), 1);
}

#[tokio::test]
async fn escaped_percent_matches_literally() {
    let s = store();
    s.insert(&doc("1", "gave 100% today ok", CorpusSet::Training)).unwrap();
    s.insert(&doc("2", "gave 100 today ok", CorpusSet::Training)).unwrap();
    s.set_polarity("1", Polarity::Plus).unwrap();
    s.set_polarity("2", Polarity::Plus).unwrap();

    // An escaped % is a literal character, not a wildcard: only the document
    // that really contains "100%" matches. Unescaped, the same pattern would
    // match both rows.
    let escaped = s.texts_matching("% 100\\% %").await.unwrap();
    assert_eq!(escaped, vec!["gave 100% today ok".to_string()]);

    let unescaped = s.texts_matching("% 100% %").await.unwrap();
    assert_eq!(unescaped.len(), 2);
}

#[tokio::test]
async fn file_backed_read_pool_sees_fresh_labels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corpus.sqlite");
    let s = CorpusStore::open(&path, 2).unwrap();

    s.insert(&doc("1", "the word here", CorpusSet::Training)).unwrap();
    s.set_polarity("1", Polarity::Plus).unwrap();

    // Reads go through the read-only pool in file-backed mode; the label
    // written above must already be visible there.
    assert_eq!(s.count_labeled().await.unwrap(), 1);
    assert_eq!(s.count_by_polarity(Polarity::Plus).await.unwrap(), 1);
}

#[test]
fn stats_reflect_labels_and_partitions() {
    let s = store();
    s.insert(&doc("1", "t", CorpusSet::Training)).unwrap();
    s.insert(&doc("2", "t", CorpusSet::Training)).unwrap();
    s.insert(&doc("3", "t", CorpusSet::Training)).unwrap();
    s.insert(&doc("4", "w", CorpusSet::Working)).unwrap();
    s.set_polarity("1", Polarity::Plus).unwrap();
    s.set_polarity("2", Polarity::Minus).unwrap();

    let stats = s.stats().unwrap();
    assert_eq!(stats.training_total, 3);
    assert_eq!(stats.working_total, 1);
    assert_eq!(stats.labeled_plus, 1);
    assert_eq!(stats.labeled_minus, 1);
    assert_eq!(stats.untrained, 1);
}
