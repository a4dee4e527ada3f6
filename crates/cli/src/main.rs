//! AgriQ CLI - database migrations, demo data and statistics.
//!
//! # Usage
//!
//! ```bash
//! # Apply migrations
//! agriq migrate
//!
//! # Load the demo data set (refuses if products already exist)
//! agriq seed
//!
//! # Wipe inventory tables, then load the demo data set
//! agriq seed --reset
//!
//! # Print batch statistics
//! agriq stats
//! agriq stats --json
//! ```
//!
//! Connects with `AGRIQ_DATABASE_URL` (or `DATABASE_URL`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "agriq")]
#[command(author, version, about = "AgriQ command-line tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Insert the demo data set
    Seed {
        /// Truncate inventory tables first
        #[arg(long)]
        reset: bool,
    },
    /// Print batch count, inventory totals and low-stock count
    Stats {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await,
        Commands::Seed { reset } => commands::seed::run(reset).await,
        Commands::Stats { json } => commands::stats::run(json).await,
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_seed_reset() {
        let cli = Cli::try_parse_from(["agriq", "seed", "--reset"]);
        assert!(matches!(cli, Ok(Cli { command: Commands::Seed { reset: true } })));
    }
}
