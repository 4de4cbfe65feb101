//! The board engine contract both games implement.

use crate::{IllegalMove, Placement, RoundOutcome, RoundPhase};
use std::fmt::Debug;

/// A two-player, turn-based board engine for one round at a time.
///
/// Moves are applied in two phases. [`begin_move`](Self::begin_move) places the
/// mark and puts the engine into [`RoundPhase::Resolving`], where further input
/// is rejected. [`resolve_move`](Self::resolve_move) then checks for a win, then
/// for a draw, and otherwise hands the turn to the other player. Callers that do
/// not animate placements use [`apply_move`](Self::apply_move).
pub trait BoardEngine {
    /// The two players.
    type Player: Copy + Eq + Debug;
    /// What a caller asks for: a cell or a column.
    type Move: Copy + Debug;
    /// A board coordinate.
    type Coord: Copy + Eq + Debug;

    /// Places the current player's mark.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] if the engine is not accepting input or the move
    /// does not fit the board. The engine is unchanged on error.
    fn begin_move(
        &mut self,
        mv: Self::Move,
    ) -> Result<Placement<Self::Player, Self::Coord>, IllegalMove>;

    /// Resolves the pending placement.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove::NothingPending`] if no move was begun.
    fn resolve_move(&mut self) -> Result<RoundOutcome<Self::Player, Self::Coord>, IllegalMove>;

    /// Places and resolves a move in one step.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] under the same conditions as [`begin_move`](Self::begin_move).
    fn apply_move(
        &mut self,
        mv: Self::Move,
    ) -> Result<RoundOutcome<Self::Player, Self::Coord>, IllegalMove> {
        self.begin_move(mv)?;
        self.resolve_move()
    }

    /// Clears the board and move counter and gives the first player the turn.
    fn reset(&mut self);

    /// Returns the current phase.
    fn phase(&self) -> RoundPhase;

    /// Returns the player to move (or the player whose move is resolving).
    fn current_player(&self) -> Self::Player;

    /// Returns the number of marks placed this round.
    fn move_count(&self) -> usize;

    /// Returns true while the engine accepts a new move.
    fn is_accepting_input(&self) -> bool {
        self.phase() == RoundPhase::Active
    }
}
