//! The aggregate count queries behind `ICorpusReader`.
//!
//! Everything here is scoped to *labeled training documents*: the corpus the
//! probabilities are derived from. Empty results are valid results; only
//! driver failures error.

use rusqlite::{params, Connection};

use valence_core::errors::ValenceResult;
use valence_core::models::polarity::Polarity;

use crate::to_storage_err;

/// Texts of labeled documents (any polarity) whose text matches the LIKE
/// pattern. Patterns are escaped with `\` by the caller.
pub fn texts_matching(conn: &Connection, like: &str) -> ValenceResult<Vec<String>> {
    collect_texts(
        conn,
        "SELECT text FROM documents
         WHERE corpus = 'training' AND polarity IS NOT NULL
           AND text LIKE ?1 ESCAPE '\\'",
        params![like],
    )
}

/// Total labeled document count.
pub fn count_labeled(conn: &Connection) -> ValenceResult<u64> {
    conn.query_row(
        "SELECT count(*) FROM documents WHERE corpus = 'training' AND polarity IS NOT NULL",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Labeled document count for one polarity.
pub fn count_by_polarity(conn: &Connection, polarity: Polarity) -> ValenceResult<u64> {
    conn.query_row(
        "SELECT count(*) FROM documents WHERE corpus = 'training' AND polarity = ?1",
        params![polarity.as_str()],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Texts of labeled documents of one polarity matching the LIKE pattern.
pub fn texts_by_polarity_matching(
    conn: &Connection,
    polarity: Polarity,
    like: &str,
) -> ValenceResult<Vec<String>> {
    collect_texts(
        conn,
        "SELECT text FROM documents
         WHERE corpus = 'training' AND polarity = ?1
           AND text LIKE ?2 ESCAPE '\\'",
        params![polarity.as_str(), like],
    )
}

fn collect_texts(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
) -> ValenceResult<Vec<String>> {
    let mut stmt = conn.prepare(sql).map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params, |row| row.get::<_, String>(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let mut texts = Vec::new();
    for row in rows {
        texts.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }
    Ok(texts)
}
