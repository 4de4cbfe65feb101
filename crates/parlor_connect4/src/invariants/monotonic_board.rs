//! Monotonic board invariant: pieces never move or change owner.

use crate::{Board, Cell, ConnectFour, Player};
use parlor_core::{Invariant, PlayerKey};

/// Invariant: Replaying the landing cells in order rebuilds the board.
pub struct MonotonicBoardInvariant;

impl Invariant<ConnectFour> for MonotonicBoardInvariant {
    fn holds(game: &ConnectFour) -> bool {
        let mut reconstructed = Board::new();
        let mut player = Player::One;

        for coord in game.history() {
            if reconstructed.get(*coord) != Some(Cell::Empty) {
                return false;
            }
            reconstructed.set(*coord, Cell::Occupied(player));
            player = player.opponent();
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Pieces are monotonic (never moved or overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coord;
    use parlor_core::BoardEngine;

    #[test]
    fn test_corrupted_board_violates() {
        let mut game = ConnectFour::new();
        game.apply_move(0).unwrap();
        assert!(MonotonicBoardInvariant::holds(&game));

        game.board.set(Coord::new(0, 0), Cell::Occupied(Player::Two));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
