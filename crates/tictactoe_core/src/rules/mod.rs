//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board. Rules are kept apart from
//! board storage so the opponent and the turn coordinator can share
//! them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_PATTERNS, has_won, winner};

use super::{Board, GameStatus, Outcome, Player};
use tracing::instrument;

/// Derives the status of a board.
#[instrument(skip(board))]
pub fn status(board: &Board) -> GameStatus {
    match winner(board) {
        Some(player) => Outcome::win_for(player).into(),
        None if is_full(board) => GameStatus::Draw,
        None => GameStatus::Ongoing,
    }
}

/// Evaluates a board right after `mover` placed a mark.
///
/// Only the mover can have just completed a line, so only the mover's
/// win is checked, before the draw.
#[instrument(skip(board))]
pub fn evaluate_after(board: &Board, mover: Player) -> GameStatus {
    if has_won(board, mover) {
        Outcome::win_for(mover).into()
    } else if is_draw(board) {
        GameStatus::Draw
    } else {
        GameStatus::Ongoing
    }
}
