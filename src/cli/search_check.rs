//! CLI `search-check` command — one-off smoke test for the web-search helper.
//!
//! Not part of the embedding pipeline. Runs a single query and reports
//! whether the results look plausible (a query term appears in the output).

use anyhow::{Context, Result};

use crate::config::FoodembedConfig;
use crate::websearch::WebSearchTool;

const DEFAULT_QUERY: &str = "health benefits of kale";

/// Run one web search and print pass/fail.
pub async fn search_check(config: &FoodembedConfig, query: Option<&str>) -> Result<()> {
    let query = query.unwrap_or(DEFAULT_QUERY);
    let tool = WebSearchTool::new(&config.search).context("failed to build search client")?;

    println!("Testing web search with query: {query:?}...");

    let results = tool
        .search(query, config.search.max_results)
        .await
        .context("web search failed")?;

    println!("Results:\n{results}");

    let lower = results.to_lowercase();
    let passed = query
        .split_whitespace()
        .any(|term| lower.contains(&term.to_lowercase()));

    if passed {
        println!("Smoke check passed: results mention the query.");
    } else {
        anyhow::bail!("smoke check failed: no query term found in results");
    }

    Ok(())
}
