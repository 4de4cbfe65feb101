//! Move preconditions for connect-four.

use super::invariants::ConnectFourInvariants;
use super::{Board, COLUMNS, ConnectFour, Coord};
use parlor_core::{IllegalMove, InvariantSet, InvariantViolation, RoundPhase};
use tracing::{error, instrument};

/// Precondition: The engine must be accepting input.
pub struct RoundAccepting;

impl RoundAccepting {
    /// Rejects drops after the round ended or while a drop resolves.
    #[instrument]
    pub fn check(phase: RoundPhase) -> Result<(), IllegalMove> {
        match phase {
            RoundPhase::Active => Ok(()),
            RoundPhase::Resolving => Err(IllegalMove::MovePending),
            RoundPhase::Won | RoundPhase::Drawn => Err(IllegalMove::RoundNotActive),
        }
    }
}

/// Precondition: The column exists and still has room.
pub struct ColumnHasRoom;

impl ColumnHasRoom {
    /// Returns the landing cell for a drop into `column`.
    #[instrument(skip(board))]
    pub fn check(column: usize, board: &Board) -> Result<Coord, IllegalMove> {
        if column >= COLUMNS {
            return Err(IllegalMove::OutOfBounds(column));
        }
        board
            .drop_row(column)
            .map(|row| Coord::new(column, row))
            .ok_or(IllegalMove::ColumnFull(column))
    }
}

/// Composite precondition for a drop.
pub struct LegalDrop;

impl LegalDrop {
    /// Validates all preconditions and returns where the piece lands.
    #[instrument(skip(game))]
    pub fn check(column: usize, game: &ConnectFour) -> Result<Coord, IllegalMove> {
        RoundAccepting::check(game.phase)?;
        ColumnHasRoom::check(column, game.board())
    }
}

/// Asserts that all board invariants hold (panics on violation in debug builds).
#[instrument(skip(game))]
pub fn assert_invariants(game: &ConnectFour) {
    if let Err(violations) = ConnectFourInvariants::check_all(game) {
        let description = InvariantViolation::summarize(&violations);
        error!(%description, "Connect-four invariant violated");
        debug_assert!(false, "Invariant violation: {}", description);
    }
}
