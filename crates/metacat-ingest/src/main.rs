//! metacat ingest - feed generation and offline import tool

use anyhow::Result;
use clap::Parser;
use metacat_common::logging::{init_logging, LogConfig, LogLevel};
use metacat_ingest::{commands, generate_feed, write_feed};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "metacat-ingest")]
#[command(author, version, about = "metacat feed tooling")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Parser, Debug)]
enum Command {
    /// Generate a sample feed
    Generate {
        /// Number of documents
        #[arg(short = 'n', long = "count", default_value_t = 50)]
        count: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Output file
        #[arg(short, long, default_value = "data/documents.xml")]
        output: PathBuf,
    },

    /// Validate a local feed file
    Check {
        /// Feed file
        file: PathBuf,
    },

    /// Import a local feed file into the catalog
    Import {
        /// Feed file
        file: PathBuf,

        /// Database to import into
        #[arg(long, env = "DATABASE_URL", default_value = "sqlite://data/metadata.db?mode=rwc")]
        database_url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };

    let log_config = LogConfig::builder()
        .level(log_level)
        .log_file_prefix("metacat-ingest")
        .build()
        .with_env()?;

    init_logging(&log_config)?;

    match cli.command {
        Command::Generate {
            count,
            seed,
            output,
        } => {
            let feed = generate_feed(count, seed)?;
            write_feed(&output, &feed)?;
            println!("Generated {} documents -> {}", count, output.display());
        },
        Command::Check { file } => {
            let count = commands::check(&file).await?;
            println!("{}: {} valid documents", file.display(), count);
        },
        Command::Import { file, database_url } => {
            info!("Importing {}", file.display());
            let stats = commands::import(&file, &database_url).await?;
            println!(
                "Imported {} documents ({} new, {} updated)",
                stats.processed(),
                stats.inserted,
                stats.updated
            );
        },
    }

    Ok(())
}
