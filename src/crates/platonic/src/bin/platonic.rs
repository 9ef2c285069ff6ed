//! Platonic CLI - browse the registry and consult the Oracle
//!
//! Main entry point for the platonic command-line tool.

use clap::{Parser, Subcommand};
use oracle::OracleClient;
use platonic::cli::interactive::{self, ConsultSession};
use platonic::cli::{self as commands, OutputFormat};
use platonic::{load_config, logging, Catalog, StatusFilter};
use std::path::PathBuf;
use tracing_subscriber::prelude::*;
use tracing_subscriber::reload;

#[derive(Parser)]
#[command(name = "platonic")]
#[command(about = "Platonic - the registry of ideal consumer products", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Extra config file, applied over the user and project configs
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the ledger of categories
    List {
        /// Status to filter by: ALL, DECLARED, EMPTY, CANDIDATE, DEPRECATED, SPLIT_REQUIRED, REJECTED
        #[arg(short, long, default_value = "ALL")]
        status: StatusFilter,
        /// Output format: text (default), json
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
    /// Show one category in detail
    Show {
        /// Category ID, e.g. frying-pan
        id: String,
        /// Output format: text (default), json
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
    /// Show registry counts
    Stats,
    /// Search categories and models
    Search {
        /// Text to look for
        text: String,
    },
    /// Print the rulebook
    Rulebook,
    /// Ask the Oracle to judge a product
    Consult {
        /// Product description
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
        /// Output format: text (default), json
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
    /// Challenge a declared item with another product
    Challenge {
        /// Category ID of the declared item
        id: String,
        /// Challenger product
        #[arg(required = true, num_args = 1..)]
        challenger: Vec<String>,
    },
    /// Consult the Oracle line by line; only the latest reply is shown
    Interactive,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; the level is narrowed once config is loaded
    let (filter, reload_handle) = reload::Layer::new(logging::startup_level(cli.verbose));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();

    let config = load_config(cli.config.clone()).await?;

    let level = logging::configured_level(cli.verbose, &config.logging)?;
    reload_handle.modify(|filter| *filter = level)?;

    let catalog = Catalog::builtin();

    match cli.command {
        Commands::List { status, format } => {
            commands::catalog::handle_list(catalog, status, format)?;
        }
        Commands::Show { id, format } => {
            commands::catalog::handle_show(catalog, &id, format)?;
        }
        Commands::Stats => {
            commands::catalog::handle_stats(catalog)?;
        }
        Commands::Search { text } => {
            commands::catalog::handle_search(catalog, &text)?;
        }
        Commands::Rulebook => {
            commands::catalog::handle_rulebook()?;
        }
        Commands::Consult { query, format } => {
            let client = OracleClient::new(config.oracle_config())?;
            commands::oracle::handle_consult(&client, &query.join(" "), format).await?;
        }
        Commands::Challenge { id, challenger } => {
            let client = OracleClient::new(config.oracle_config())?;
            commands::oracle::handle_challenge(&client, catalog, &id, &challenger.join(" "))
                .await?;
        }
        Commands::Interactive => {
            let client = OracleClient::new(config.oracle_config())?;
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            interactive::run(ConsultSession::new(client), stdin).await?;
        }
    }

    Ok(())
}
