//! Monotonic board invariant: squares never change once set.

use crate::{Board, Player, Square, TicTacToe};
use parlor_core::{Invariant, PlayerKey};

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Once a square transitions from Empty to Occupied, it never changes.
/// This is verified by replaying the move history and comparing.
pub struct MonotonicBoardInvariant;

impl Invariant<TicTacToe> for MonotonicBoardInvariant {
    fn holds(game: &TicTacToe) -> bool {
        let mut reconstructed = Board::new();
        let mut player = Player::X;

        for pos in game.history() {
            if !reconstructed.is_empty(*pos) {
                return false;
            }
            reconstructed.set(*pos, Square::Occupied(player));
            player = player.opponent();
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
