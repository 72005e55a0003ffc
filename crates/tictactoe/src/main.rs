//! Tictactoe - terminal game and headless simulator.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe::GameConfig;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            delay_ms,
            seed,
        } => run_play(config, delay_ms, seed).await,
        Command::Simulate { games, seed, json } => run_simulate(games, seed, json),
    }
}

/// Run the terminal game
async fn run_play(
    config_path: std::path::PathBuf,
    delay_ms: Option<u64>,
    seed: Option<u64>,
) -> Result<()> {
    let config = GameConfig::load_or_default(&config_path)?.with_overrides(delay_ms, seed);
    tui::run(config).await
}

/// Run headless games and print the tally
#[instrument]
fn run_simulate(games: u32, seed: Option<u64>, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting headless simulation");
    let tally = tictactoe::simulate(games, seed)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!("{}", tally);
    }
    Ok(())
}
