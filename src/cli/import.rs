//! CLI `import` command — load food documents from a JSON export file.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

use crate::config::FoodembedConfig;
use crate::food::store;

/// Import food documents from a JSON file containing an array of documents.
///
/// Each document's identity comes from its `_id` (or `id`) field. Documents
/// whose id already exists are skipped; documents without a usable id are
/// counted as errors. Embeddings are not computed here — run
/// `foodembed run` afterwards.
pub fn import(config: &FoodembedConfig, file: &Path) -> Result<()> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read import file: {}", file.display()))?;

    let docs: Vec<Value> =
        serde_json::from_str(&json).context("import file must be a JSON array of documents")?;

    let db_path = config.resolved_db_path();
    let conn = crate::db::open_database(&db_path)?;

    let mut imported = 0u64;
    let mut skipped = 0u64;
    let mut errors = 0u64;

    println!("Importing {} documents...", docs.len());

    for doc in &docs {
        let Some(id) = document_id(doc) else {
            errors += 1;
            tracing::warn!("document without string _id/id field, skipping");
            continue;
        };

        if store::food_exists(&conn, id)? {
            skipped += 1;
            continue;
        }

        store::insert_food(&conn, id, &doc.to_string())?;
        imported += 1;
    }

    println!("Import complete:");
    println!("  Imported: {imported}");
    println!("  Skipped:  {skipped} (already exist)");
    if errors > 0 {
        println!("  Errors:   {errors} (missing id)");
    }

    Ok(())
}

/// Extract the document id: `_id` preferred (the upstream export's key),
/// falling back to `id`.
fn document_id(doc: &Value) -> Option<&str> {
    doc.get("_id")
        .or_else(|| doc.get("id"))
        .and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_id_prefers_underscore_id() {
        let doc: Value =
            serde_json::from_str(r#"{"_id": "abc", "id": "other", "name": "X"}"#).unwrap();
        assert_eq!(document_id(&doc), Some("abc"));
    }

    #[test]
    fn document_id_falls_back_to_id() {
        let doc: Value = serde_json::from_str(r#"{"id": "xyz"}"#).unwrap();
        assert_eq!(document_id(&doc), Some("xyz"));
    }

    #[test]
    fn non_string_id_is_rejected() {
        let doc: Value = serde_json::from_str(r#"{"_id": 42}"#).unwrap();
        assert_eq!(document_id(&doc), None);
        let doc: Value = serde_json::from_str(r#"{"name": "no id"}"#).unwrap();
        assert_eq!(document_id(&doc), None);
    }
}
