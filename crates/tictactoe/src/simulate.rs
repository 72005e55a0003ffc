//! Headless games against a random human.
//!
//! Useful for checking the opponent's strength without a terminal.

use crate::config::GameConfig;
use crate::coordinator::{CoordinatorError, TapResponse, TurnCoordinator};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use serde::Serialize;
use tictactoe_core::Outcome;
use tracing::{debug, info, instrument, warn};

/// Outcome counts over a batch of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Games played.
    pub games: u32,
    /// Games the human won.
    pub human_wins: u32,
    /// Games the computer won.
    pub computer_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::HumanWin => self.human_wins += 1,
            Outcome::ComputerWin => self.computer_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: human {} / computer {} / draw {}",
            self.games, self.human_wins, self.computer_wins, self.draws
        )
    }
}

/// Plays `games` games with zero delay, the human tapping random free cells.
///
/// The same seed reproduces the same tally.
///
/// # Errors
///
/// Propagates [`CoordinatorError`] from building the coordinator.
#[instrument]
pub fn simulate(games: u32, seed: Option<u64>) -> Result<Tally, CoordinatorError> {
    let coordinator = TurnCoordinator::new(&GameConfig::headless(seed))?;
    let mut human = match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
        None => StdRng::from_os_rng(),
    };

    let mut tally = Tally::default();
    for game in 0..games {
        match play_one(&coordinator, &mut human) {
            Some(outcome) => {
                debug!(game, %outcome, "Simulated game finished");
                tally.record(outcome);
            }
            None => warn!(game, "Simulated game stalled"),
        }
        coordinator.on_reset_requested();
    }

    info!(%tally, "Simulation complete");
    Ok(tally)
}

fn play_one(coordinator: &TurnCoordinator, human: &mut StdRng) -> Option<Outcome> {
    // Each tap fills at least one cell, so nine taps always end the game.
    for _ in 0..9 {
        let snapshot = coordinator.snapshot();
        if let Some(outcome) = snapshot.outcome {
            return Some(outcome);
        }
        let position = *snapshot.board.empty_positions().choose(human)?;
        if coordinator.on_cell_tapped(position.to_index()) != TapResponse::Placed {
            return None;
        }
    }
    coordinator.snapshot().outcome
}
