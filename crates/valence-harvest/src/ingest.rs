//! Pool-file ingestion into the corpus.

use std::path::Path;

use tracing::info;

use valence_core::errors::ValenceResult;
use valence_core::models::document::{CorpusSet, Document};
use valence_storage::CorpusStore;

use crate::pool_files;

/// What an ingestion run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Rows added to the training partition.
    pub training: u64,
    /// Rows added to the working partition.
    pub working: u64,
    /// Entries skipped as duplicates.
    pub skipped: u64,
    /// Working rows purged for also being in training.
    pub purged: u64,
}

/// Load every pool file in `dir` into the store. Every third entry joins the
/// training partition, the rest the working partition; duplicate ids within a
/// partition are skipped, and working rows shadowed by training are purged at
/// the end.
pub fn ingest_dir(store: &CorpusStore, dir: &Path) -> ValenceResult<IngestReport> {
    let mut report = IngestReport::default();

    for file in pool_files::scan_pool_files(dir)? {
        let entries = pool_files::read_pool_file(&file)?;
        for (idx, entry) in entries.iter().enumerate() {
            let corpus = if idx % 3 == 0 {
                CorpusSet::Training
            } else {
                CorpusSet::Working
            };
            let inserted =
                store.insert(&Document::new(entry.id_str.clone(), entry.text.clone(), corpus))?;
            match (inserted, corpus) {
                (true, CorpusSet::Training) => report.training += 1,
                (true, CorpusSet::Working) => report.working += 1,
                (false, _) => report.skipped += 1,
            }
        }
        info!(file = %file.display(), "pool file ingested");
    }

    report.purged = store.purge_working_duplicates()? as u64;
    Ok(report)
}
