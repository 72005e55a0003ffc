//! Heuristic computer opponent.
//!
//! The computer picks its move by fixed priority: complete its own
//! line, block the human's line, take the center, otherwise pick a
//! random free cell. There is no lookahead, so a human fork beats it.

use super::rules::WIN_PATTERNS;
use super::{Board, Player, Position};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which priority tier produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Reason {
    /// Completes a computer line.
    Win,
    /// Denies a human line.
    Block,
    /// Takes the free center.
    Center,
    /// Uniform pick among free cells.
    Random,
}

/// A chosen cell and the tier that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Cell to play.
    pub position: Position,
    /// Tier that fired.
    pub reason: Reason,
}

/// Finds the free cell that would complete a line for `player`.
///
/// For each line in canonical order, removes the cells `player` already
/// holds. A line qualifies when exactly one cell is left and that cell
/// is unoccupied. The first qualifying line wins.
#[instrument(skip(board))]
pub fn completing_move(board: &Board, player: Player) -> Option<Position> {
    let held = board.positions_of(player);

    WIN_PATTERNS.iter().find_map(|line| {
        let mut missing = line.iter().filter(|pos| !held.contains(*pos));
        match (missing.next(), missing.next()) {
            (Some(&pos), None) if board.is_empty(pos) => Some(pos),
            _ => None,
        }
    })
}

/// Decides the computer's next move, reporting the tier used.
///
/// Returns `None` only when the board has no free cell.
#[instrument(skip(board, rng))]
pub fn decide<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Decision> {
    let decision = if let Some(position) = completing_move(board, Player::Computer) {
        Decision {
            position,
            reason: Reason::Win,
        }
    } else if let Some(position) = completing_move(board, Player::Human) {
        Decision {
            position,
            reason: Reason::Block,
        }
    } else if board.is_empty(Position::Center) {
        Decision {
            position: Position::Center,
            reason: Reason::Center,
        }
    } else {
        let position = *board.empty_positions().choose(rng)?;
        Decision {
            position,
            reason: Reason::Random,
        }
    };

    debug!(position = %decision.position, reason = %decision.reason, "Opponent decided");
    Some(decision)
}

/// Chooses the computer's next cell.
///
/// Returns `None` only when the board has no free cell.
pub fn choose_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    decide(board, rng).map(|decision| decision.position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Move;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board(moves: &[(Player, Position)]) -> Board {
        let mut board = Board::new();
        for (player, pos) in moves {
            board.place(Move::new(*player, *pos)).unwrap();
        }
        board
    }

    #[test]
    fn test_completing_move_skips_blocked_line() {
        // Computer holds both ends of the main diagonal, human holds the center.
        let board = board(&[
            (Player::Computer, Position::TopLeft),
            (Player::Computer, Position::BottomRight),
            (Player::Human, Position::Center),
        ]);
        assert_eq!(completing_move(&board, Player::Computer), None);
    }

    #[test]
    fn test_completing_move_uses_canonical_order() {
        // Computer threatens the top row (at 2) and the left column (at 6).
        let board = board(&[
            (Player::Computer, Position::TopLeft),
            (Player::Computer, Position::TopCenter),
            (Player::Computer, Position::MiddleLeft),
        ]);
        assert_eq!(
            completing_move(&board, Player::Computer),
            Some(Position::TopRight)
        );
    }

    #[test]
    fn test_full_line_is_not_a_completing_move() {
        let board = board(&[
            (Player::Human, Position::TopLeft),
            (Player::Human, Position::TopCenter),
            (Player::Human, Position::TopRight),
        ]);
        // Difference is empty for the top row; other rows need two cells.
        assert_eq!(completing_move(&board, Player::Human), None);
    }

    #[test]
    fn test_decide_on_full_board_is_none() {
        let mut full = Board::new();
        for (i, pos) in Position::ALL.iter().enumerate() {
            let player = if i % 2 == 0 {
                Player::Human
            } else {
                Player::Computer
            };
            full.place(Move::new(player, *pos)).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(decide(&full, &mut rng), None);
    }

    #[test]
    fn test_reason_reported_for_each_tier() {
        let mut rng = StdRng::seed_from_u64(3);

        let win = board(&[
            (Player::Computer, Position::MiddleLeft),
            (Player::Computer, Position::Center),
        ]);
        assert_eq!(decide(&win, &mut rng).map(|d| d.reason), Some(Reason::Win));

        let block = board(&[
            (Player::Human, Position::TopLeft),
            (Player::Human, Position::TopCenter),
            (Player::Computer, Position::Center),
        ]);
        assert_eq!(
            decide(&block, &mut rng),
            Some(Decision {
                position: Position::TopRight,
                reason: Reason::Block
            })
        );

        let center = board(&[(Player::Human, Position::BottomRight)]);
        assert_eq!(
            decide(&center, &mut rng).map(|d| d.reason),
            Some(Reason::Center)
        );

        let random = board(&[(Player::Human, Position::Center)]);
        assert_eq!(
            decide(&random, &mut rng).map(|d| d.reason),
            Some(Reason::Random)
        );
    }
}
