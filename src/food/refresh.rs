//! The iterate-embed-update driver.
//!
//! Walks every document in the store, rebuilds its canonical text, embeds it,
//! and writes the result back. Records are processed strictly one at a time;
//! a failing record is logged with its id and counted, and the loop moves on.
//! One bad document must never block the rest of the pass.

use anyhow::{Context, Result};
use rusqlite::Connection;
use tracing::{info, warn};

use super::canonical::create_embedding_text;
use super::store;
use super::types::FoodRecord;
use crate::embedding::EmbeddingProvider;

/// Running counts for one re-embedding pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RefreshOutcome {
    pub updated: u64,
    pub errors: u64,
}

/// Re-embed every document in the store.
///
/// `on_progress` is called once per record (success or failure) with the
/// number of records handled so far.
pub fn refresh_embeddings(
    conn: &Connection,
    provider: &dyn EmbeddingProvider,
    mut on_progress: impl FnMut(u64),
) -> Result<RefreshOutcome> {
    let foods = store::fetch_all(conn).context("failed to fetch food documents")?;
    let total = foods.len() as u64;

    let mut outcome = RefreshOutcome::default();

    for (handled, (id, doc)) in foods.iter().enumerate() {
        match refresh_one(conn, provider, id, doc) {
            Ok(()) => {
                outcome.updated += 1;
                if outcome.updated % 10 == 0 {
                    info!(processed = outcome.updated, total, "re-embedding progress");
                }
            }
            Err(e) => {
                outcome.errors += 1;
                warn!(id = %id, error = %e, "failed to process food document");
            }
        }
        on_progress(handled as u64 + 1);
    }

    Ok(outcome)
}

fn refresh_one(
    conn: &Connection,
    provider: &dyn EmbeddingProvider,
    id: &str,
    doc: &str,
) -> Result<()> {
    let record = FoodRecord::from_json(doc).context("invalid document JSON")?;
    let text_content = create_embedding_text(&record);
    let embedding = provider
        .embed(&text_content)
        .context("embedding model failed")?;
    store::update_embedding(conn, id, &text_content, &embedding)
}
