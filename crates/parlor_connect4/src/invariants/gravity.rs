//! Gravity invariant: no piece floats above an empty cell.

use crate::{Cell, ConnectFour};
use parlor_core::Invariant;

/// Invariant: Within every column, occupied cells form a contiguous stack from row 0.
pub struct GravityInvariant;

impl Invariant<ConnectFour> for GravityInvariant {
    fn holds(game: &ConnectFour) -> bool {
        (0..crate::COLUMNS).all(|column| {
            game.board().column(column).is_some_and(|cells| {
                cells
                    .windows(2)
                    .all(|pair| !(pair[0] == Cell::Empty && pair[1] != Cell::Empty))
            })
        })
    }

    fn description() -> &'static str {
        "Pieces rest on the bottom or on another piece"
    }
}
