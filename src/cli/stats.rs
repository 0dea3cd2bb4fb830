//! CLI `stats` command — document and embedding counts.

use anyhow::Result;

use crate::config::FoodembedConfig;
use crate::food::store;

/// Display store statistics in the terminal.
pub fn stats(config: &FoodembedConfig) -> Result<()> {
    let db_path = config.resolved_db_path();
    let conn = crate::db::open_database(&db_path)?;

    let total = store::count_foods(&conn)?;
    let embedded = store::count_embedded(&conn)?;
    let model = crate::db::get_embedding_model(&conn)?;
    let db_size = std::fs::metadata(&db_path).map(|m| m.len()).unwrap_or(0);

    println!("Food Store Statistics");
    println!("{}", "=".repeat(40));
    println!("  Documents:        {total}");
    println!("  With embedding:   {embedded}");
    println!("  Pending:          {}", total.saturating_sub(embedded));
    println!(
        "  Embedding model:  {}",
        model.as_deref().unwrap_or("(none recorded)")
    );
    println!("  Database size:    {db_size} bytes");

    Ok(())
}
