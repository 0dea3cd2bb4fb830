//! CLI `run` command — re-compute every stored embedding.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;

use crate::config::FoodembedConfig;
use crate::db;
use crate::embedding;
use crate::food::refresh::refresh_embeddings;
use crate::food::store;

/// Re-embed all food documents with the currently configured model.
pub async fn run(config: &FoodembedConfig) -> Result<()> {
    let db_path = config.resolved_db_path();
    let conn = db::open_database(&db_path).context("failed to open database")?;

    let total = store::count_foods(&conn)?;
    if total == 0 {
        println!("No food documents to re-embed.");
        return Ok(());
    }

    // Load embedding provider
    let provider: Arc<dyn embedding::EmbeddingProvider> = Arc::from(
        embedding::create_provider(&config.embedding)
            .context("failed to create embedding provider")?,
    );

    println!(
        "Re-embedding {total} food documents with model '{}'...",
        config.embedding.model
    );

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  {bar:40.cyan/blue} {pos}/{len} ({eta})")
            .expect("valid template")
            .progress_chars("##-"),
    );

    // Model inference is CPU-bound; keep it off the async runtime.
    let outcome = {
        let provider = Arc::clone(&provider);
        let pb = pb.clone();
        tokio::task::spawn_blocking(move || {
            refresh_embeddings(&conn, provider.as_ref(), |handled| pb.set_position(handled))
                .map(|outcome| (conn, outcome))
        })
        .await?
    };
    let (conn, outcome) = outcome.context("re-embedding pass failed")?;

    pb.finish_and_clear();

    // Record which model produced the stored vectors
    db::set_embedding_model(&conn, &config.embedding.model)?;

    println!("Re-embedding complete.");
    println!("  Updated: {}", outcome.updated);
    println!("  Errors:  {}", outcome.errors);

    Ok(())
}
