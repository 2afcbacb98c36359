pub mod harvest;
pub mod ingest;
pub mod inspect;
pub mod label;
pub mod stats;

use anyhow::Result;

use valence_core::ValenceConfig;
use valence_storage::CorpusStore;

/// Open the store configured for this invocation.
pub(crate) fn open_store(config: &ValenceConfig) -> Result<CorpusStore> {
    Ok(CorpusStore::open(
        &config.storage.db_path,
        config.storage.read_pool_size,
    )?)
}
