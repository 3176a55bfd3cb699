mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "nex")]
#[command(version, about = "Notion Expectations Engine CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a Notion database against an expectation suite
    Validate {
        /// Notion database id or full workspace URL
        #[arg(long)]
        db: String,

        /// Suite name (resolved in the suites directory) or path to a suite file
        #[arg(long)]
        suite: String,

        /// Run name shown in the report and Data Docs
        #[arg(long)]
        run_name: Option<String>,

        /// Directory holding named suite files
        #[arg(long, default_value = "suites")]
        suites_dir: String,

        /// Data Docs output directory
        #[arg(long, default_value = "data_docs")]
        docs_dir: String,

        /// Validate at most this many rows
        #[arg(long)]
        sample_size: Option<usize>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Check an expectation suite definition without fetching data
    Check {
        /// Path to the suite file (YAML or TOML)
        suite: String,
    },

    /// Generate a starter suite from a database's schema
    Init {
        /// Notion database id or full workspace URL
        #[arg(long)]
        db: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Suite owner recorded in the generated suite
        #[arg(long, default_value = "data-team")]
        owner: String,
    },

    /// Rebuild the Data Docs site from stored validation results
    Docs {
        /// Data Docs directory
        #[arg(long, default_value = "data_docs")]
        docs_dir: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Validate {
            db,
            suite,
            run_name,
            suites_dir,
            docs_dir,
            sample_size,
            format,
        } => {
            commands::validate::execute(
                &db,
                &suite,
                run_name.as_deref(),
                &suites_dir,
                &docs_dir,
                sample_size,
                &format,
            )
            .await
        }

        Commands::Check { suite } => commands::check::execute(&suite),

        Commands::Init { db, output, owner } => {
            commands::init::execute(&db, output.as_deref(), &owner).await
        }

        Commands::Docs { docs_dir } => commands::docs::execute(&docs_dir),
    }
}
