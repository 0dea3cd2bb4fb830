mod cli;
mod config;
mod db;
mod embedding;
mod food;
mod websearch;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "foodembed",
    version,
    about = "Batch re-computation of vector embeddings for food documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Re-compute the embedding for every stored food document
    Run,
    /// Import food documents from a JSON export file
    Import {
        /// Path to a JSON file containing an array of food documents
        file: PathBuf,
    },
    /// Print the canonical embedding text for one or all documents
    Preview {
        /// Document id (omit to preview every document)
        id: Option<String>,
    },
    /// Show document and embedding counts
    Stats,
    /// Manage the embedding model
    Model {
        #[command(subcommand)]
        action: ModelAction,
    },
    /// Smoke-test the web search helper
    SearchCheck {
        /// Query to search for (defaults to a canned query)
        query: Option<String>,
    },
}

#[derive(Subcommand)]
enum ModelAction {
    /// Download the embedding model to ~/.foodembed/models/
    Download,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level)
    let config = config::FoodembedConfig::load()?;

    // Initialize tracing with the configured log level.
    // Log to stderr so stdout stays clean for command output.
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Run => {
            cli::re_embed::run(&config).await?;
        }
        Command::Import { file } => {
            cli::import::import(&config, &file)?;
        }
        Command::Preview { id } => {
            cli::preview::preview(&config, id.as_deref())?;
        }
        Command::Stats => {
            cli::stats::stats(&config)?;
        }
        Command::Model { action } => match action {
            ModelAction::Download => {
                cli::model_download(&config.embedding).await?;
            }
        },
        Command::SearchCheck { query } => {
            cli::search_check::search_check(&config, query.as_deref()).await?;
        }
    }

    Ok(())
}
