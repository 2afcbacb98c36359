//! Pragma configuration applied at connection open.

use rusqlite::Connection;

use valence_core::errors::ValenceResult;

use crate::to_storage_err;

/// Pragmas for the write connection: WAL so readers are never blocked,
/// NORMAL sync (WAL makes FULL unnecessary), and a busy timeout so the
/// writer waits out checkpoint contention instead of erroring.
pub fn apply_write_pragmas(conn: &Connection) -> ValenceResult<()> {
    conn.execute_batch(
        "PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;
         PRAGMA foreign_keys = ON;
         PRAGMA busy_timeout = 5000;",
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Pragmas for read connections.
pub fn apply_read_pragmas(conn: &Connection) -> ValenceResult<()> {
    conn.execute_batch(
        "PRAGMA query_only = ON;
         PRAGMA busy_timeout = 5000;",
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
