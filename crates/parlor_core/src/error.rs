//! Move rejection reasons shared by every engine.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Why an engine refused a move.
///
/// A rejected move never mutates the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum IllegalMove {
    /// The round already ended in a win or a draw.
    #[display("Round is over, reset to play again")]
    RoundNotActive,

    /// A placed move is still waiting for resolution.
    #[display("Previous move is still resolving")]
    MovePending,

    /// The position or column lies outside the board.
    #[display("Position {} is out of bounds", _0)]
    OutOfBounds(usize),

    /// The cell at the given index is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The column has no empty row left.
    #[display("Column {} is full", _0)]
    ColumnFull(usize),

    /// Resolution was requested with no placed move.
    #[display("No move is waiting for resolution")]
    NothingPending,
}

impl std::error::Error for IllegalMove {}
