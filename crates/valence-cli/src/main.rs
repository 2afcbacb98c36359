//! Valence CLI - harvest, ingest, label, inspect.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use valence_core::ValenceConfig;

#[derive(Parser)]
#[command(name = "valence")]
#[command(version, about = "Polarity classification over a labeled short-text corpus", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (TOML); defaults apply when absent
    #[arg(short, long, global = true, default_value = "valence.toml")]
    config: PathBuf,

    /// Database file (overrides the config)
    #[arg(long, global = true)]
    db: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch pages from the search API into raw/pool file pairs
    Harvest {
        /// Number of pages to fetch
        #[arg(short, long, default_value = "1")]
        pages: usize,

        /// Directory for the raw/pool files
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },

    /// Load pool files from a directory into the corpus
    Ingest {
        /// Directory holding poolNNNNN.json files
        dir: PathBuf,
    },

    /// Interactively label untrained training documents
    Label {
        /// Stop after this many documents
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Score working-set documents against the labeled corpus
    Inspect {
        /// Use trigram context features instead of words
        #[arg(long)]
        trigrams: bool,

        /// How many working-set documents to score
        #[arg(short, long, default_value = "10")]
        sample: usize,
    },

    /// Show corpus totals
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = ValenceConfig::load(&cli.config)?;
    if let Some(db) = cli.db {
        config.storage.db_path = db;
    }

    match cli.command {
        Commands::Harvest { pages, out } => commands::harvest::run(&config, pages, &out).await,
        Commands::Ingest { dir } => commands::ingest::run(&config, &dir),
        Commands::Label { limit } => commands::label::run(&config, limit),
        Commands::Inspect { trigrams, sample } => {
            commands::inspect::run(&config, trigrams, sample).await
        }
        Commands::Stats => commands::stats::run(&config),
    }
}
