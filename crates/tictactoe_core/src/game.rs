//! Game state: the board plus the moves that filled it.

use super::action::{Move, MoveError};
use super::rules;
use super::{Board, GameStatus};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// A game in any phase.
///
/// Owns the board and the ordered move history. Status is derived
/// from the board on demand and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a game with an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the moves in the order they were played.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the derived status.
    pub fn status(&self) -> GameStatus {
        rules::status(&self.board)
    }

    /// Places a move and evaluates the result for its player.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game already has an outcome.
    /// - [`MoveError::SquareOccupied`] if the cell is taken.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn place(&mut self, mov: Move) -> Result<GameStatus, MoveError> {
        if self.status().is_over() {
            return Err(MoveError::GameOver);
        }
        self.board.place(mov)?;
        self.history.push(mov);
        Ok(rules::evaluate_after(&self.board, mov.player))
    }

    /// Replaces the board with an empty one and clears history.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(moves = self.history.len(), "Resetting game");
        self.board = Board::new();
        self.history.clear();
    }

    /// Replays moves from an empty board.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] a move produces.
    #[instrument(skip(moves))]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for mov in moves {
            game.place(*mov)?;
        }
        Ok(game)
    }
}
