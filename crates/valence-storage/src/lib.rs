//! # valence-storage
//!
//! SQLite persistence for the document corpus. One `documents` table holds
//! both the training and working partitions; a single write connection and a
//! small pool of read-only connections share the file through WAL, so reads
//! see labels as soon as the writer commits them.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::{CorpusStats, CorpusStore};

use valence_core::errors::{StorageError, ValenceError};

/// Shorthand for wrapping driver messages into the storage error type.
pub(crate) fn to_storage_err(message: impl Into<String>) -> ValenceError {
    StorageError::SqliteError {
        message: message.into(),
    }
    .into()
}
