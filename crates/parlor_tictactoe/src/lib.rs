//! Pure tic-tac-toe game logic.
//!
//! [`TicTacToe`] implements [`parlor_core::BoardEngine`] over a 3x3 [`Board`]
//! addressed by [`Position`]. Win detection scans the 8 fixed lines in
//! [`rules::LINES`]; a full board without a winner is a draw.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use contracts::{LegalMove, RoundAccepting, SquareIsEmpty};
pub use game::{FIRST_PLAYER, TicTacToe, TicTacToeOutcome};
pub use position::Position;
pub use types::{Board, Player, Square};
