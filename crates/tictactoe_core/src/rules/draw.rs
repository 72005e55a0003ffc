//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Player};
use super::win::has_won;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.occupied_count() == board.slots().len()
}

/// Checks if the board is a draw: full, with no line completed.
///
/// A full board can also be won; callers evaluating a fresh move check
/// the mover's win first.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !has_won(board, Player::Human) && !has_won(board, Player::Computer)
}
