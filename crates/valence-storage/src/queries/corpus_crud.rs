//! Document CRUD: ingestion inserts, labeling updates, set retrieval,
//! duplicate purging.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};

use valence_core::models::document::{CorpusSet, Document};
use valence_core::models::polarity::Polarity;
use valence_core::errors::ValenceResult;

use crate::to_storage_err;

/// Insert a document, ignoring duplicates of (doc_id, corpus).
/// Returns whether a row was actually written.
pub fn insert_document(conn: &Connection, doc: &Document) -> ValenceResult<bool> {
    let changed = conn
        .execute(
            "INSERT OR IGNORE INTO documents (doc_id, text, polarity, corpus, fetched_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                doc.doc_id,
                doc.text,
                doc.polarity.map(|p| p.as_str()),
                doc.corpus.as_str(),
                doc.fetched_at.to_rfc3339(),
            ],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(changed > 0)
}

/// Record a human label for a training document. Returns the number of rows
/// updated (zero when the doc_id is unknown).
pub fn set_polarity(conn: &Connection, doc_id: &str, polarity: Polarity) -> ValenceResult<usize> {
    conn.execute(
        "UPDATE documents SET polarity = ?1 WHERE doc_id = ?2 AND corpus = 'training'",
        params![polarity.as_str(), doc_id],
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Training documents still waiting for a label, oldest first.
pub fn untrained(conn: &Connection, limit: Option<usize>) -> ValenceResult<Vec<Document>> {
    let sql = match limit {
        Some(n) => format!(
            "SELECT doc_id, text, polarity, corpus, fetched_at FROM documents
             WHERE corpus = 'training' AND polarity IS NULL ORDER BY id LIMIT {n}"
        ),
        None => "SELECT doc_id, text, polarity, corpus, fetched_at FROM documents
                 WHERE corpus = 'training' AND polarity IS NULL ORDER BY id"
            .to_string(),
    };
    collect_documents(conn, &sql, &[])
}

/// Training documents, optionally restricted to one polarity.
pub fn training_set(conn: &Connection, polarity: Option<Polarity>) -> ValenceResult<Vec<Document>> {
    match polarity {
        Some(p) => collect_documents(
            conn,
            "SELECT doc_id, text, polarity, corpus, fetched_at FROM documents
             WHERE corpus = 'training' AND polarity = ?1 ORDER BY id",
            &[&p.as_str()],
        ),
        None => collect_documents(
            conn,
            "SELECT doc_id, text, polarity, corpus, fetched_at FROM documents
             WHERE corpus = 'training' ORDER BY id",
            &[],
        ),
    }
}

/// The whole working set.
pub fn working_set(conn: &Connection) -> ValenceResult<Vec<Document>> {
    collect_documents(
        conn,
        "SELECT doc_id, text, polarity, corpus, fetched_at FROM documents
         WHERE corpus = 'working' ORDER BY id",
        &[],
    )
}

/// Drop working documents that also exist in the training set, so nothing is
/// both learned from and inspected. Returns the number of rows removed.
pub fn purge_working_duplicates(conn: &Connection) -> ValenceResult<usize> {
    conn.execute(
        "DELETE FROM documents
         WHERE corpus = 'working'
           AND doc_id IN (SELECT doc_id FROM documents WHERE corpus = 'training')",
        [],
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Row count for one corpus partition.
pub fn count_corpus(conn: &Connection, corpus: CorpusSet) -> ValenceResult<u64> {
    conn.query_row(
        "SELECT count(*) FROM documents WHERE corpus = ?1",
        params![corpus.as_str()],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Unlabeled training rows.
pub fn count_untrained(conn: &Connection) -> ValenceResult<u64> {
    conn.query_row(
        "SELECT count(*) FROM documents WHERE corpus = 'training' AND polarity IS NULL",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

fn collect_documents(
    conn: &Connection,
    sql: &str,
    params: &[&dyn rusqlite::ToSql],
) -> ValenceResult<Vec<Document>> {
    let mut stmt = conn.prepare(sql).map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params, document_from_row)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let mut docs = Vec::new();
    for row in rows {
        docs.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }
    Ok(docs)
}

fn document_from_row(row: &Row<'_>) -> rusqlite::Result<Document> {
    let polarity: Option<String> = row.get(2)?;
    let corpus: String = row.get(3)?;
    let fetched_at: String = row.get(4)?;
    Ok(Document {
        doc_id: row.get(0)?,
        text: row.get(1)?,
        polarity: polarity.and_then(|p| p.parse().ok()),
        corpus: if corpus == "working" {
            CorpusSet::Working
        } else {
            CorpusSet::Training
        },
        fetched_at: fetched_at
            .parse::<DateTime<Utc>>()
            .unwrap_or_else(|_| Utc::now()),
    })
}
