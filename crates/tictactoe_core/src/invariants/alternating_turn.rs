//! Alternating turn invariant: human, computer, human, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: the human moves first and players alternate.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        if history.first().is_some_and(|mov| mov.player != Player::Human) {
            return false;
        }

        history
            .windows(2)
            .all(|pair| pair[0].player != pair[1].player)
    }

    fn description() -> &'static str {
        "Players alternate turns, human first"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Position};

    #[test]
    fn test_alternating_history_holds() {
        let game = GameState::replay(&[
            Move::new(Player::Human, Position::TopLeft),
            Move::new(Player::Computer, Position::Center),
            Move::new(Player::Human, Position::BottomRight),
        ])
        .unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_computer_first_violates() {
        let game = GameState::replay(&[Move::new(Player::Computer, Position::Center)]).unwrap();
        assert!(!AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_double_move_violates() {
        let game = GameState::replay(&[
            Move::new(Player::Human, Position::TopLeft),
            Move::new(Player::Human, Position::TopCenter),
        ])
        .unwrap();
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
