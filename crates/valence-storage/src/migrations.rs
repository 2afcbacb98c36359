//! Versioned schema migrations, applied at open.

use rusqlite::Connection;

use valence_core::errors::{StorageError, ValenceResult};

use crate::to_storage_err;

/// Ordered migrations. Each runs once, inside a transaction, and bumps
/// `user_version`.
const MIGRATIONS: &[(u32, &str)] = &[(
    1,
    "CREATE TABLE IF NOT EXISTS documents (
         id INTEGER PRIMARY KEY,
         doc_id TEXT NOT NULL,
         text TEXT NOT NULL,
         polarity TEXT CHECK (polarity IN ('+', '-')),
         corpus TEXT NOT NULL CHECK (corpus IN ('training', 'working')),
         fetched_at TEXT NOT NULL,
         UNIQUE (doc_id, corpus)
     );
     CREATE INDEX IF NOT EXISTS idx_documents_corpus ON documents (corpus);
     CREATE INDEX IF NOT EXISTS idx_documents_polarity
         ON documents (polarity) WHERE polarity IS NOT NULL;",
)];

/// Bring the database up to the latest schema version.
pub fn run_migrations(conn: &Connection) -> ValenceResult<()> {
    let current: u32 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;

    for (version, sql) in MIGRATIONS {
        if *version <= current {
            continue;
        }
        let apply = || -> rusqlite::Result<()> {
            conn.execute_batch("BEGIN")?;
            conn.execute_batch(sql)?;
            conn.execute_batch(&format!("PRAGMA user_version = {version}"))?;
            conn.execute_batch("COMMIT")?;
            Ok(())
        };
        apply().map_err(|e| {
            let _ = conn.execute_batch("ROLLBACK");
            StorageError::MigrationFailed {
                version: *version,
                reason: e.to_string(),
            }
        })?;
        tracing::debug!(version, "applied schema migration");
    }

    Ok(())
}
