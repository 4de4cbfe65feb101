//! Alternating turn invariant: players alternate X, O, X, O, ...

use crate::{Player, TicTacToe};
use parlor_core::{BoardEngine, Invariant, RoundPhase};

/// Invariant: Players alternate turns.
///
/// X and O counts differ by at most one with X never behind, and the player
/// to move matches the parity of the history. A resolving or finished round
/// keeps the mover as current player.
pub struct AlternatingTurnInvariant;

impl Invariant<TicTacToe> for AlternatingTurnInvariant {
    fn holds(game: &TicTacToe) -> bool {
        let x_count = game.board().count(Player::X);
        let o_count = game.board().count(Player::O);
        if x_count < o_count || x_count > o_count + 1 {
            return false;
        }

        let placed = game.history().len();
        let expected = match game.phase() {
            RoundPhase::Active if placed % 2 == 0 => Player::X,
            RoundPhase::Active => Player::O,
            _ if placed % 2 == 1 => Player::X,
            _ => Player::O,
        };

        game.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
