//! Monotonic board invariant: cells never change once set.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: the board is exactly the history replayed from empty.
///
/// Replaying fails if any move lands on an occupied cell, so a board
/// that matches its replay was never overwritten.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        Board::from_moves(game.history()).is_ok_and(|replayed| replayed == *game.board())
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let game = GameState::replay(&[
            Move::new(Player::Human, Position::TopLeft),
            Move::new(Player::Computer, Position::Center),
            Move::new(Player::Human, Position::TopRight),
            Move::new(Player::Computer, Position::BottomLeft),
        ])
        .unwrap();
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_history_violates() {
        let mut game = GameState::replay(&[Move::new(Player::Human, Position::Center)]).unwrap();

        // History claims the center went to the computer too.
        game.history
            .push(Move::new(Player::Computer, Position::Center));

        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
