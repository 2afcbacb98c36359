//! The single write connection, shared behind a mutex.

use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use valence_core::errors::{StorageError, ValenceResult};

use super::pragmas::apply_write_pragmas;
use crate::to_storage_err;

/// Owns the one connection allowed to write. Cheap to clone; clones share
/// the underlying connection.
#[derive(Clone)]
pub struct WriteConnection {
    conn: Arc<Mutex<Connection>>,
}

impl WriteConnection {
    /// Open the write connection for the given database file.
    pub fn open(path: &Path) -> ValenceResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_write_pragmas(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory write connection (for testing).
    pub fn open_in_memory() -> ValenceResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        // In-memory databases have no WAL; skip journal pragmas.
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Execute a closure with the write connection, synchronously.
    pub fn with_conn_sync<F, T>(&self, f: F) -> ValenceResult<T>
    where
        F: FnOnce(&Connection) -> ValenceResult<T>,
    {
        let guard = self.conn.lock().map_err(|e| StorageError::LockPoisoned {
            message: e.to_string(),
        })?;
        f(&guard)
    }

    /// Execute a closure with the write connection on the blocking pool.
    pub async fn with_conn<F, T>(&self, f: F) -> ValenceResult<T>
    where
        F: FnOnce(&Connection) -> ValenceResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let this = self.clone();
        tokio::task::spawn_blocking(move || this.with_conn_sync(f))
            .await
            .map_err(|e| StorageError::TaskFailed {
                message: e.to_string(),
            })?
    }
}
