//! spellcheck - look up every word of a text in a red-black tree dictionary
//!
//! Usage:
//!   spellcheck check --dictionary <file> [--config <yaml>] <text-file>...
//!   spellcheck tree [--config <yaml>] <key>...

mod check;
mod settings;
mod tree;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "spellcheck")]
#[command(about = "Spell-check text against a word list stored in a red-black tree")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check text files against a dictionary
    Check(check::CheckArgs),
    /// Insert keys and print the resulting tree in pre-order
    Tree(tree::TreeArgs),
}

/// Initialize tracing with the RBDICT_LOG environment variable.
///
/// Defaults to "info" level if RBDICT_LOG is not set.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("RBDICT_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => check::run(&args),
        Commands::Tree(args) => tree::run(&args),
    }
}
