//! Tests for the heuristic opponent's priority order.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeSet;
use tictactoe_core::opponent::{choose_move, decide};
use tictactoe_core::{Board, Move, Player, Position, Reason};

fn board(moves: &[(Player, usize)]) -> Board {
    let moves: Vec<Move> = moves
        .iter()
        .map(|(player, index)| Move::new(*player, Position::from_index(*index).unwrap()))
        .collect();
    Board::from_moves(&moves).unwrap()
}

#[test]
fn test_win_now_beats_block() {
    // Computer holds 0 and 1; human threatens the middle row at 5.
    let board = board(&[
        (Player::Human, 3),
        (Player::Computer, 0),
        (Player::Human, 4),
        (Player::Computer, 1),
    ]);
    let mut rng = StdRng::seed_from_u64(0);

    assert_eq!(choose_move(&board, &mut rng), Some(Position::TopRight));
}

#[test]
fn test_block_before_center_and_random() {
    // Human holds 3 and 4 (center taken); computer's diagonal is blocked.
    let board = board(&[
        (Player::Human, 4),
        (Player::Computer, 0),
        (Player::Human, 3),
        (Player::Computer, 8),
    ]);
    let mut rng = StdRng::seed_from_u64(0);

    let decision = decide(&board, &mut rng).unwrap();
    assert_eq!(decision.position, Position::MiddleRight);
    assert_eq!(decision.reason, Reason::Block);
}

#[test]
fn test_empty_board_takes_center() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(choose_move(&Board::new(), &mut rng), Some(Position::Center));
}

#[test]
fn test_random_fallback_only_picks_free_cells() {
    // Center taken, no two-in-a-line anywhere.
    let board = board(&[(Player::Human, 4), (Player::Computer, 0), (Player::Human, 8)]);
    let free: BTreeSet<Position> = board.empty_positions().into_iter().collect();

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let decision = decide(&board, &mut rng).unwrap();
        assert_eq!(decision.reason, Reason::Random);
        assert!(free.contains(&decision.position), "seed {seed}");
    }
}

#[test]
fn test_random_fallback_reaches_every_free_cell() {
    let board = board(&[(Player::Human, 4)]);
    let mut rng = StdRng::seed_from_u64(42);

    let seen: BTreeSet<Position> = (0..400)
        .filter_map(|_| choose_move(&board, &mut rng))
        .collect();

    assert_eq!(
        seen,
        board.empty_positions().into_iter().collect::<BTreeSet<_>>()
    );
}

#[test]
fn test_random_fallback_is_reproducible_with_seed() {
    let board = board(&[(Player::Human, 4)]);
    let first = choose_move(&board, &mut StdRng::seed_from_u64(9));
    let second = choose_move(&board, &mut StdRng::seed_from_u64(9));
    assert_eq!(first, second);
}

#[test]
fn test_fork_beats_the_heuristic() {
    // Human holds 0 and 8 with the computer in the center; the computer
    // sees no line to win or block and answers at random. Whatever it
    // picks, it cannot take both 2 and 6 once the human forks.
    let board = board(&[(Player::Human, 0), (Player::Computer, 4), (Player::Human, 8)]);
    let mut rng = StdRng::seed_from_u64(5);
    let decision = decide(&board, &mut rng).unwrap();
    assert_eq!(decision.reason, Reason::Random);
}
