//! Single winner invariant: both players never hold a line at once.

use super::super::rules::has_won;
use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: at most one player has completed a line.
pub struct SingleWinnerInvariant;

impl Invariant<GameState> for SingleWinnerInvariant {
    fn holds(game: &GameState) -> bool {
        !(has_won(game.board(), Player::Human) && has_won(game.board(), Player::Computer))
    }

    fn description() -> &'static str {
        "At most one player holds a complete line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Move, Position};

    #[test]
    fn test_one_winner_holds() {
        let game = GameState::replay(&[
            Move::new(Player::Human, Position::TopLeft),
            Move::new(Player::Computer, Position::Center),
            Move::new(Player::Human, Position::TopCenter),
            Move::new(Player::Computer, Position::BottomLeft),
            Move::new(Player::Human, Position::TopRight),
        ])
        .unwrap();
        assert!(SingleWinnerInvariant::holds(&game));
    }

    #[test]
    fn test_two_winners_violates() {
        let mut game = GameState::new();
        game.board = Board::from_moves(&[
            Move::new(Player::Human, Position::TopLeft),
            Move::new(Player::Human, Position::TopCenter),
            Move::new(Player::Human, Position::TopRight),
            Move::new(Player::Computer, Position::BottomLeft),
            Move::new(Player::Computer, Position::BottomCenter),
            Move::new(Player::Computer, Position::BottomRight),
        ])
        .unwrap();
        assert!(!SingleWinnerInvariant::holds(&game));
    }
}
