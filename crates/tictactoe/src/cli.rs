//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};

/// Tic-tac-toe against a heuristic computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a heuristic opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to game config (TOML). Defaults apply if the file is missing.
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: std::path::PathBuf,

        /// Override the computer's reply delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed the opponent's random fallback
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play headless games against a random human and print the tally
    Simulate {
        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed both players' random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },
}
