//! CorpusStore — owns the ConnectionPool, exposes CRUD for the plumbing
//! (ingestion, labeling, inspection tools) and implements `ICorpusReader`
//! for the inference core.

use std::path::Path;
use std::sync::Arc;

use rusqlite::Connection;

use valence_core::errors::{StorageError, ValenceResult};
use valence_core::models::document::{CorpusSet, Document};
use valence_core::models::polarity::Polarity;
use valence_core::traits::ICorpusReader;

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{corpus_counts, corpus_crud};

/// Corpus totals for the `stats` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusStats {
    pub training_total: u64,
    pub working_total: u64,
    pub labeled_plus: u64,
    pub labeled_minus: u64,
    pub untrained: u64,
}

/// The main storage engine. Owns the connection pool.
#[derive(Clone)]
pub struct CorpusStore {
    pool: Arc<ConnectionPool>,
    /// When true, reads go to the read pool (file-backed mode). When false,
    /// reads route through the writer (in-memory mode, where read pool
    /// connections would be isolated databases).
    use_read_pool: bool,
}

impl CorpusStore {
    /// Open a store backed by a file on disk.
    pub fn open(path: &Path, read_pool_size: usize) -> ValenceResult<Self> {
        let pool = ConnectionPool::open(path, read_pool_size)?;
        let store = Self {
            pool: Arc::new(pool),
            use_read_pool: true,
        };
        store.initialize()?;
        Ok(store)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> ValenceResult<Self> {
        let pool = ConnectionPool::open_in_memory()?;
        let store = Self {
            pool: Arc::new(pool),
            use_read_pool: false,
        };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> ValenceResult<()> {
        self.pool.writer.with_conn_sync(migrations::run_migrations)
    }

    /// Execute a read-only query on the best available connection.
    fn with_reader<F, T>(&self, f: F) -> ValenceResult<T>
    where
        F: FnOnce(&Connection) -> ValenceResult<T>,
    {
        if self.use_read_pool {
            self.pool.readers.with_conn(f)
        } else {
            self.pool.writer.with_conn_sync(f)
        }
    }

    /// Run a read-only query on the blocking pool, for async callers.
    async fn read_task<F, T>(&self, f: F) -> ValenceResult<T>
    where
        F: FnOnce(&Connection) -> ValenceResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.with_reader(f))
            .await
            .map_err(|e| StorageError::TaskFailed {
                message: e.to_string(),
            })?
    }

    // -- CRUD for the plumbing ------------------------------------------------

    /// Insert a document; duplicates of (doc_id, corpus) are ignored.
    pub fn insert(&self, doc: &Document) -> ValenceResult<bool> {
        self.pool
            .writer
            .with_conn_sync(|conn| corpus_crud::insert_document(conn, doc))
    }

    /// Record a human label for a training document.
    pub fn set_polarity(&self, doc_id: &str, polarity: Polarity) -> ValenceResult<usize> {
        self.pool
            .writer
            .with_conn_sync(|conn| corpus_crud::set_polarity(conn, doc_id, polarity))
    }

    /// Training documents with no label yet.
    pub fn untrained(&self, limit: Option<usize>) -> ValenceResult<Vec<Document>> {
        self.with_reader(|conn| corpus_crud::untrained(conn, limit))
    }

    /// Training documents, optionally one polarity only.
    pub fn training_set(&self, polarity: Option<Polarity>) -> ValenceResult<Vec<Document>> {
        self.with_reader(|conn| corpus_crud::training_set(conn, polarity))
    }

    /// The whole working set.
    pub fn working_set(&self) -> ValenceResult<Vec<Document>> {
        self.with_reader(corpus_crud::working_set)
    }

    /// Remove working documents that also exist in training.
    pub fn purge_working_duplicates(&self) -> ValenceResult<usize> {
        self.pool
            .writer
            .with_conn_sync(corpus_crud::purge_working_duplicates)
    }

    /// Corpus totals.
    pub fn stats(&self) -> ValenceResult<CorpusStats> {
        self.with_reader(|conn| {
            Ok(CorpusStats {
                training_total: corpus_crud::count_corpus(conn, CorpusSet::Training)?,
                working_total: corpus_crud::count_corpus(conn, CorpusSet::Working)?,
                labeled_plus: corpus_counts::count_by_polarity(conn, Polarity::Plus)?,
                labeled_minus: corpus_counts::count_by_polarity(conn, Polarity::Minus)?,
                untrained: corpus_crud::count_untrained(conn)?,
            })
        })
    }
}

impl ICorpusReader for CorpusStore {
    async fn texts_matching(&self, like: &str) -> ValenceResult<Vec<String>> {
        let like = like.to_string();
        self.read_task(move |conn| corpus_counts::texts_matching(conn, &like))
            .await
    }

    async fn count_labeled(&self) -> ValenceResult<u64> {
        self.read_task(corpus_counts::count_labeled).await
    }

    async fn count_by_polarity(&self, polarity: Polarity) -> ValenceResult<u64> {
        self.read_task(move |conn| corpus_counts::count_by_polarity(conn, polarity))
            .await
    }

    async fn texts_by_polarity_matching(
        &self,
        polarity: Polarity,
        like: &str,
    ) -> ValenceResult<Vec<String>> {
        let like = like.to_string();
        self.read_task(move |conn| corpus_counts::texts_by_polarity_matching(conn, polarity, &like))
            .await
    }
}
