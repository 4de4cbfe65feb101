//! Move preconditions for tic-tac-toe.
//!
//! Each precondition is a small named check; [`LegalMove`] composes them in
//! the order the engine reports failures.

use super::invariants::TicTacToeInvariants;
use super::{Board, Position, TicTacToe};
use parlor_core::{IllegalMove, InvariantSet, InvariantViolation, RoundPhase};
use tracing::{error, instrument};

/// Precondition: The engine must be accepting input.
pub struct RoundAccepting;

impl RoundAccepting {
    /// Rejects moves after the round ended or while a move resolves.
    #[instrument]
    pub fn check(phase: RoundPhase) -> Result<(), IllegalMove> {
        match phase {
            RoundPhase::Active => Ok(()),
            RoundPhase::Resolving => Err(IllegalMove::MovePending),
            RoundPhase::Won | RoundPhase::Drawn => Err(IllegalMove::RoundNotActive),
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto an occupied square.
    #[instrument(skip(board))]
    pub fn check(pos: Position, board: &Board) -> Result<(), IllegalMove> {
        if board.is_empty(pos) {
            Ok(())
        } else {
            Err(IllegalMove::CellOccupied(pos.to_index()))
        }
    }
}

/// Composite precondition: the round accepts input and the square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &TicTacToe) -> Result<(), IllegalMove> {
        RoundAccepting::check(game.phase)?;
        SquareIsEmpty::check(pos, game.board())?;
        Ok(())
    }
}

/// Asserts that all board invariants hold (panics on violation in debug builds).
#[instrument(skip(game))]
pub fn assert_invariants(game: &TicTacToe) {
    if let Err(violations) = TicTacToeInvariants::check_all(game) {
        let description = InvariantViolation::summarize(&violations);
        error!(%description, "Tic-tac-toe invariant violated");
        debug_assert!(false, "Invariant violation: {}", description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlor_core::BoardEngine;

    #[test]
    fn test_precondition_empty_square() {
        let game = TicTacToe::new();
        assert!(LegalMove::check(Position::Center, &game).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut game = TicTacToe::new();
        game.apply_move(Position::Center).unwrap();
        assert_eq!(
            LegalMove::check(Position::Center, &game),
            Err(IllegalMove::CellOccupied(4))
        );
    }

    #[test]
    fn test_precondition_pending_move() {
        let mut game = TicTacToe::new();
        game.begin_move(Position::Center).unwrap();
        assert_eq!(
            LegalMove::check(Position::TopLeft, &game),
            Err(IllegalMove::MovePending)
        );
    }

    #[test]
    fn test_round_accepting_by_phase() {
        assert!(RoundAccepting::check(RoundPhase::Active).is_ok());
        assert_eq!(
            RoundAccepting::check(RoundPhase::Won),
            Err(IllegalMove::RoundNotActive)
        );
        assert_eq!(
            RoundAccepting::check(RoundPhase::Drawn),
            Err(IllegalMove::RoundNotActive)
        );
    }
}
