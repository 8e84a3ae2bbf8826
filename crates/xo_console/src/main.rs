//! xo - play XO (tic-tac-toe) in the terminal.

#![warn(missing_docs)]

mod cli;
mod config;
mod console;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::ConsoleConfig;
use console::Finish;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = match &cli.log_level {
        Some(level) => EnvFilter::try_new(level)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = ConsoleConfig::load(cli.config.as_deref())?;
    if let Some(first) = cli.first {
        config = config.with_first_player(first);
    }

    let stdin = std::io::stdin();
    let finish = console::run(&config, stdin.lock(), std::io::stdout().lock())?;
    match finish {
        Finish::Completed(outcome) => info!(?outcome, "Game finished"),
        Finish::Abandoned => info!("Game abandoned"),
    }

    Ok(())
}
