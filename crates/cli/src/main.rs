//! Cafe Catalog CLI - Database migrations and catalog tools.
//!
//! # Usage
//!
//! ```bash
//! # Create the catalog schema
//! cafe-cli migrate
//!
//! # Load entries from a YAML file, replacing what is there
//! cafe-cli seed fixtures/catalog.yaml --clear
//!
//! # Print every entry
//! cafe-cli list
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` - `PostgreSQL` connection string

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "cafe-cli")]
#[command(author, version, about = "Cafe catalog CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Insert catalog entries from a YAML file
    Seed {
        /// Path to the YAML file
        file: String,

        /// Delete every existing entry first
        #[arg(long)]
        clear: bool,
    },
    /// Print every catalog entry
    List,
}

#[tokio::main]
async fn main() {
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cafe_cli=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { file, clear } => {
            commands::seed::catalog(&file, clear).await?;
        }
        Commands::List => commands::list::run().await?,
    }
    Ok(())
}
