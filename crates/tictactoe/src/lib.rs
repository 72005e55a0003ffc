//! Single-player tic-tac-toe against a heuristic computer opponent.
//!
//! # Architecture
//!
//! - **Coordinator**: sequences human taps and delayed computer replies
//! - **Config**: reply delay and RNG seed, from TOML
//! - **Simulate**: headless batches against a random human
//!
//! Board logic and the opponent live in [`tictactoe_core`].
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameConfig, TapResponse, TurnCoordinator};
//!
//! // Zero delay: the computer answers before the call returns.
//! let coordinator = TurnCoordinator::new(&GameConfig::headless(Some(1)))?;
//! assert_eq!(coordinator.on_cell_tapped(0), TapResponse::Placed);
//! assert_eq!(coordinator.snapshot().history.len(), 2);
//! # Ok::<(), tictactoe::CoordinatorError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod coordinator;
mod simulate;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Turn coordination
pub use coordinator::{
    CoordinatorError, IgnoreReason, Phase, Snapshot, TapResponse, TurnCoordinator,
};

// Crate-level exports - Headless play
pub use simulate::{Tally, simulate};

// Crate-level exports - Game types
pub use tictactoe_core::{Board, Indicator, Move, Outcome, Player, Position};
