//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position};
use tracing::instrument;

/// The 8 lines that win: rows, then columns, then diagonals.
///
/// The order is canonical; the opponent scans lines in this order, so
/// it decides ties between equally good lines.
pub const WIN_PATTERNS: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether `player` holds every cell of some line.
#[instrument(skip(board))]
pub fn has_won(board: &Board, player: Player) -> bool {
    let held = board.positions_of(player);
    WIN_PATTERNS
        .iter()
        .any(|line| line.iter().all(|pos| held.contains(pos)))
}

/// Returns the player holding a complete line, if any.
///
/// Legitimate play never produces two winners; if it did, the human
/// is reported.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    [Player::Human, Player::Computer]
        .into_iter()
        .find(|player| has_won(board, *player))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Move;

    fn board_with(player: Player, cells: &[Position]) -> Board {
        let mut board = Board::new();
        for pos in cells {
            board.place(Move::new(player, *pos)).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!has_won(&board, Player::Human));
        assert!(!has_won(&board, Player::Computer));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in WIN_PATTERNS {
            let board = board_with(Player::Computer, &line);
            assert!(has_won(&board, Player::Computer), "line {:?}", line);
            assert!(!has_won(&board, Player::Human));
        }
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_with(
            Player::Human,
            &[Position::TopRight, Position::Center, Position::BottomLeft],
        );
        assert_eq!(winner(&board), Some(Player::Human));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Player::Human, &[Position::TopLeft, Position::TopCenter]);
        assert!(!has_won(&board, Player::Human));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = board_with(Player::Human, &[Position::TopLeft, Position::TopCenter]);
        board
            .place(Move::new(Player::Computer, Position::TopRight))
            .unwrap();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_win_with_extra_marks() {
        let board = board_with(
            Player::Human,
            &[
                Position::TopLeft,
                Position::MiddleRight,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
        );
        assert!(has_won(&board, Player::Human));
    }
}
