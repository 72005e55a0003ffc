//! Tic-tac-toe game state and heuristic opponent.
//!
//! This crate holds the pure game logic: the 3x3 board, win and draw
//! detection, and the computer's move-selection policy. It has no
//! async code and no presentation concerns.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{opponent, Board, Move, Player, Position};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut board = Board::new();
//! board.place(Move::new(Player::Human, Position::TopLeft)).unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! // Center is free and nobody threatens a line, so the computer takes it.
//! assert_eq!(opponent::choose_move(&board, &mut rng), Some(Position::Center));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
pub mod opponent;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::GameState;
pub use opponent::{Decision, Reason};
pub use position::Position;
pub use types::{Board, GameStatus, Indicator, Outcome, Player};
