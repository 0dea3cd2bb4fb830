//! Read/write operations on the `foods` table.
//!
//! Each row holds the raw JSON document plus the three fields the re-embedding
//! pass writes back: `text_content`, `embedding`, and `embedding_updated_at`.

use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use super::embedding_to_bytes;

/// Insert a new food document. Fails if the id already exists.
pub fn insert_food(conn: &Connection, id: &str, doc: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO foods (id, doc) VALUES (?1, ?2)",
        params![id, doc],
    )
    .with_context(|| format!("failed to insert food {id}"))?;
    Ok(())
}

/// Check whether a document with this id exists.
pub fn food_exists(conn: &Connection, id: &str) -> Result<bool> {
    let exists: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM foods WHERE id = ?1",
        params![id],
        |row| row.get(0),
    )?;
    Ok(exists)
}

/// Fetch every document as `(id, raw JSON)`, in rowid order.
pub fn fetch_all(conn: &Connection) -> Result<Vec<(String, String)>> {
    let mut stmt = conn.prepare("SELECT id, doc FROM foods ORDER BY rowid")?;
    let rows = stmt
        .query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Fetch one document's raw JSON by id.
pub fn fetch_doc(conn: &Connection, id: &str) -> Result<Option<String>> {
    let doc = conn
        .query_row("SELECT doc FROM foods WHERE id = ?1", params![id], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(doc)
}

/// Total number of documents.
pub fn count_foods(conn: &Connection) -> Result<u64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM foods", [], |row| row.get(0))?;
    Ok(count as u64)
}

/// Number of documents that already carry an embedding.
pub fn count_embedded(conn: &Connection) -> Result<u64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM foods WHERE embedding IS NOT NULL",
        [],
        |row| row.get(0),
    )?;
    Ok(count as u64)
}

/// Write the canonical text and embedding for one document, stamping
/// `embedding_updated_at` with the current UTC time.
pub fn update_embedding(
    conn: &Connection,
    id: &str,
    text_content: &str,
    embedding: &[f32],
) -> Result<()> {
    let updated = conn.execute(
        "UPDATE foods
         SET text_content = ?2, embedding = ?3, embedding_updated_at = ?4
         WHERE id = ?1",
        params![
            id,
            text_content,
            embedding_to_bytes(embedding),
            Utc::now().to_rfc3339()
        ],
    )?;
    anyhow::ensure!(updated == 1, "no food document with id {id}");
    Ok(())
}
