//! History consistency invariant: history length matches occupied squares.

use crate::{Square, TicTacToe};
use parlor_core::{BoardEngine, Invariant};

/// Invariant: History length equals number of occupied squares.
///
/// Every move in history corresponds to exactly one occupied square, and the
/// move counter reports the same number.
pub struct HistoryConsistentInvariant;

impl Invariant<TicTacToe> for HistoryConsistentInvariant {
    fn holds(game: &TicTacToe) -> bool {
        let occupied_count = game
            .board()
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();

        game.history().len() == occupied_count && game.move_count() == occupied_count
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}
