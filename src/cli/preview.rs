//! CLI `preview` command — show the canonical text a document would embed.

use anyhow::Result;

use crate::config::FoodembedConfig;
use crate::food::canonical::create_embedding_text;
use crate::food::store;
use crate::food::types::FoodRecord;

/// Print the canonical embedding text for one document, or for all documents
/// when no id is given. Malformed documents are reported inline rather than
/// aborting the listing.
pub fn preview(config: &FoodembedConfig, id: Option<&str>) -> Result<()> {
    let db_path = config.resolved_db_path();
    let conn = crate::db::open_database(&db_path)?;

    let docs: Vec<(String, String)> = match id {
        Some(id) => match store::fetch_doc(&conn, id)? {
            Some(doc) => vec![(id.to_string(), doc)],
            None => {
                anyhow::bail!("no food document with id {id}");
            }
        },
        None => store::fetch_all(&conn)?,
    };

    for (id, doc) in &docs {
        match FoodRecord::from_json(doc) {
            Ok(record) => {
                println!("{id}: {}", create_embedding_text(&record));
            }
            Err(e) => {
                println!("{id}: <invalid document: {e}>");
            }
        }
    }

    Ok(())
}
