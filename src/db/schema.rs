//! SQL DDL for the food document store.
//!
//! One table of JSON documents plus the embedding columns the re-embedding
//! pass writes, and a `schema_meta` key/value table. All DDL uses
//! `IF NOT EXISTS` for idempotent initialization.

use rusqlite::Connection;

const SCHEMA_SQL: &str = r#"
-- Food documents with their derived embedding state
CREATE TABLE IF NOT EXISTS foods (
    id TEXT PRIMARY KEY,
    doc TEXT NOT NULL,
    text_content TEXT,
    embedding BLOB,
    embedding_updated_at TEXT
);

CREATE INDEX IF NOT EXISTS idx_foods_embedding_updated
    ON foods(embedding_updated_at);

-- Key/value metadata (embedding model identifier, etc.)
CREATE TABLE IF NOT EXISTS schema_meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

/// Create all tables and indexes. Safe to call on every open.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        init_schema(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM foods", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
