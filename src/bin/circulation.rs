//! circulation CLI
//!
//! Reads books, members and borrow/return transactions (three blocks, each
//! closed by a `done` line) and prints the outcome of every transaction.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use circulation::{Console, Driver, InMemoryModelStore, LibraryConfig, ReturnPolicy};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "circulation")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Library circulation ledger: borrow limits, availability and fines")]
struct Cli {
    /// Input file. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Reject returns that would put more copies on the shelf than the library owns
    #[arg(long)]
    strict_returns: bool,

    /// List every book's availability after the summary
    #[arg(long)]
    inventory: bool,

    /// Log each applied record to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "circulation=debug"
    } else {
        "circulation=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let policy = if cli.strict_returns {
        ReturnPolicy::Strict
    } else {
        ReturnPolicy::Lenient
    };
    let config = LibraryConfig::new()
        .with_return_policy(policy)
        .with_inventory(cli.inventory);

    let store = InMemoryModelStore::new();
    let driver = Driver::new(store.clone(), Console::stdout(), &config);

    let result = match &cli.input {
        Some(path) => match File::open(path) {
            Ok(file) => driver.run(BufReader::new(file)),
            Err(e) => {
                tracing::error!("cannot open {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => driver.run(io::stdin().lock()),
    };

    match result {
        Ok(stats) => {
            match store.len() {
                Ok(records) => tracing::info!(?stats, records, "run complete"),
                Err(e) => tracing::warn!(?stats, "run complete, store unreadable: {}", e),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("failed to read input: {}", e);
            ExitCode::FAILURE
        }
    }
}
