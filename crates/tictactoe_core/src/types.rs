//! Core domain types for tic-tac-toe.

use super::action::{Move, MoveError};
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Player {
    /// The person at the keyboard (moves first).
    Human,
    /// The heuristic opponent.
    Computer,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Glyph kind drawn for this player's marks.
    pub fn indicator(self) -> Indicator {
        match self {
            Player::Human => Indicator::Cross,
            Player::Computer => Indicator::Nought,
        }
    }
}

/// Glyph drawn in an occupied cell.
///
/// Purely presentational, a function of [`Player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Indicator {
    /// Cross, drawn for the human.
    #[strum(to_string = "X")]
    Cross,
    /// Nought, drawn for the computer.
    #[strum(to_string = "O")]
    Nought,
}

impl Indicator {
    /// Single-character symbol for text rendering.
    pub fn symbol(self) -> char {
        match self {
            Indicator::Cross => 'X',
            Indicator::Nought => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Slot `i` is either empty or holds the one move placed at index `i`.
/// Moves are only ever added; an empty board replaces the whole
/// thing on reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Slots in row-major order (0-8).
    slots: [Option<Move>; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self { slots: [None; 9] }
    }

    /// Builds a board by placing moves in order.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if two moves share a cell.
    #[instrument(skip(moves))]
    pub fn from_moves<'a>(moves: impl IntoIterator<Item = &'a Move>) -> Result<Self, MoveError> {
        let mut board = Self::new();
        for mov in moves {
            board.place(*mov)?;
        }
        Ok(board)
    }

    /// Gets the move in the given cell, if any.
    pub fn get(&self, pos: Position) -> Option<Move> {
        self.slots[pos.to_index()]
    }

    /// Checks if some move occupies the cell.
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    /// Checks if the cell is free.
    pub fn is_empty(&self, pos: Position) -> bool {
        !self.is_occupied(pos)
    }

    /// Places a move in its cell.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the cell already holds a move.
    #[instrument(skip(self))]
    pub fn place(&mut self, mov: Move) -> Result<(), MoveError> {
        let slot = &mut self.slots[mov.position.to_index()];
        if slot.is_some() {
            return Err(MoveError::SquareOccupied(mov.position));
        }
        *slot = Some(mov);
        Ok(())
    }

    /// Cells held by the given player.
    pub fn positions_of(&self, player: Player) -> BTreeSet<Position> {
        self.slots
            .iter()
            .flatten()
            .filter(|mov| mov.player == player)
            .map(|mov| mov.position)
            .collect()
    }

    /// Unoccupied cells in index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Returns all slots.
    pub fn slots(&self) -> &[Option<Move>; 9] {
        &self.slots
    }

    /// Formats the board as a text grid, empty cells shown as 1-9.
    pub fn render(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.slots[index] {
                    Some(mov) => result.push(mov.player.indicator().symbol()),
                    None => result.push_str(&(index + 1).to_string()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Terminal result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Outcome {
    /// The human completed a line.
    HumanWin,
    /// The computer completed a line.
    ComputerWin,
    /// The board filled with no line completed.
    Draw,
}

impl Outcome {
    /// Outcome for a win by the given player.
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::Human => Outcome::HumanWin,
            Player::Computer => Outcome::ComputerWin,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::HumanWin => Some(Player::Human),
            Outcome::ComputerWin => Some(Player::Computer),
            Outcome::Draw => None,
        }
    }

    /// Headline for the end-of-game notice.
    pub fn title(self) -> &'static str {
        match self {
            Outcome::HumanWin => "You Win!",
            Outcome::ComputerWin => "You Lost",
            Outcome::Draw => "Draw",
        }
    }

    /// Body text for the end-of-game notice.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::HumanWin => "Congratulations, AI is not going to take your job.",
            Outcome::ComputerWin => "AI is going to take your job.",
            Outcome::Draw => "You both are the best duo",
        }
    }

    /// Label of the action that dismisses the notice and resets.
    pub fn button_label(self) -> &'static str {
        match self {
            Outcome::HumanWin => "Win Again",
            Outcome::ComputerWin => "Rematch",
            Outcome::Draw => "Try Again",
        }
    }
}

/// Status of a game, derived from its board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves remain and nobody has won.
    Ongoing,
    /// The human completed a line.
    HumanWin,
    /// The computer completed a line.
    ComputerWin,
    /// The board is full with no line completed.
    Draw,
}

impl GameStatus {
    /// Terminal outcome, or `None` while the game is ongoing.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            GameStatus::Ongoing => None,
            GameStatus::HumanWin => Some(Outcome::HumanWin),
            GameStatus::ComputerWin => Some(Outcome::ComputerWin),
            GameStatus::Draw => Some(Outcome::Draw),
        }
    }

    /// True once the game has an outcome.
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

impl From<Outcome> for GameStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::HumanWin => GameStatus::HumanWin,
            Outcome::ComputerWin => GameStatus::ComputerWin,
            Outcome::Draw => GameStatus::Draw,
        }
    }
}
