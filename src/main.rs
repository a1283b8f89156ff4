//! # Document Q&A Client CLI (`dqa`)
//!
//! The `dqa` binary drives the three client workflows against a running
//! Q&A backend.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `dqa upload <file>` | Upload a PDF or JSON document for ingestion |
//! | `dqa search "<query>"` | Run a ranked similarity search over ingested chunks |
//! | `dqa chunks <journal_id>` | List all chunks belonging to one source document |
//!
//! ## Examples
//!
//! ```bash
//! # Upload a document
//! dqa upload ./briefs/extension_brief_mucuna.pdf
//!
//! # Top-5 search with a stricter score floor
//! dqa search "nitrogen fixation" --k 5 --min-score 0.4
//!
//! # Every chunk of one journal
//! dqa chunks extension_brief_mucuna.pdf
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use docqa_client::api::ApiClient;
use docqa_client::config;
use docqa_client::search;
use docqa_client::shell::{Shell, Workflow};
use docqa_client::workflow::Phase;

/// Document Q&A client — upload documents, search ingested chunks, and look
/// up chunks by journal identifier.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file with the backend address. A missing file falls back to the default
/// backend at `http://127.0.0.1:8000`.
#[derive(Parser)]
#[command(
    name = "dqa",
    about = "Document Q&A client — upload, similarity search, and chunk lookup",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/dqa.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Upload a document for ingestion.
    ///
    /// Only PDF and JSON documents are accepted; anything else is rejected
    /// before any request is sent. On success, prints the number of chunks
    /// the backend created from the file.
    Upload {
        /// Path to the PDF or JSON file to upload.
        file: PathBuf,
    },

    /// Search ingested chunks by semantic similarity.
    ///
    /// Results arrive ranked by descending relevance and are printed in
    /// that order, with scores shown as percentages.
    Search {
        /// The search query string.
        query: String,

        /// Number of results to return, clamped to [1, 20].
        /// Invalid entries fall back to 3.
        #[arg(long, default_value = "3")]
        k: String,

        /// Minimum relevance score, clamped to [0, 1].
        /// Invalid entries fall back to 0.2.
        #[arg(long = "min-score", default_value = "0.2")]
        min_score: String,
    },

    /// List all chunks belonging to one journal (source document).
    ///
    /// A journal with zero chunks is reported as an empty result, not an
    /// error.
    Chunks {
        /// Journal identifier (e.g. the original filename).
        journal_id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let cfg = config::load_or_default(&cli.config)?;
    let api = ApiClient::new(cfg.backend.base_url.clone());
    let mut shell = Shell::new();

    match cli.command {
        Commands::Upload { file } => {
            shell.open_upload();
            if let Err(e) = shell.upload.select_file(&file) {
                eprintln!("Error: {}", e.message());
                std::process::exit(1);
            }

            shell.upload.submit(&api).await;
            match &shell.upload.phase {
                Phase::Failed(message) => {
                    eprintln!("Error: {}", message);
                    std::process::exit(1);
                }
                _ => {
                    if let Some(status) = shell.upload.status_line() {
                        println!("{}", status);
                    }
                }
            }
            shell.close_upload();
        }

        Commands::Search {
            query,
            k,
            min_score,
        } => {
            shell.activate(Workflow::SimilaritySearch);
            shell.search.query = query;
            shell.search.k = search::k_from_input(&k);
            shell.search.min_score = search::min_score_from_input(&min_score);

            if !shell.search.can_submit() {
                eprintln!("Error: query must not be empty");
                std::process::exit(1);
            }

            shell.search.submit(&api).await;
            match &shell.search.phase {
                Phase::Failed(message) => {
                    eprintln!("Error: {}", message);
                    std::process::exit(1);
                }
                _ => println!("{}", shell.search.render()),
            }
        }

        Commands::Chunks { journal_id } => {
            shell.activate(Workflow::ChunkLookup);
            shell.lookup.journal_id = journal_id;

            if !shell.lookup.can_submit() {
                eprintln!("Error: journal id must not be empty");
                std::process::exit(1);
            }

            shell.lookup.submit(&api).await;
            match &shell.lookup.phase {
                Phase::Failed(message) => {
                    eprintln!("Error: {}", message);
                    std::process::exit(1);
                }
                _ => println!("{}", shell.lookup.render()),
            }
        }
    }

    Ok(())
}
