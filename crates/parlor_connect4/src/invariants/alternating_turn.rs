//! Alternating turn invariant: players alternate 1, 2, 1, 2, ...

use crate::{ConnectFour, Player};
use parlor_core::{BoardEngine, Invariant, RoundPhase};

/// Invariant: Piece counts differ by at most one and the turn follows history parity.
pub struct AlternatingTurnInvariant;

impl Invariant<ConnectFour> for AlternatingTurnInvariant {
    fn holds(game: &ConnectFour) -> bool {
        let ones = game.board().count(Player::One);
        let twos = game.board().count(Player::Two);
        if ones < twos || ones > twos + 1 || ones + twos != game.move_count() {
            return false;
        }

        let placed = game.move_count();
        let expected = match game.phase() {
            RoundPhase::Active if placed % 2 == 0 => Player::One,
            RoundPhase::Active => Player::Two,
            _ if placed % 2 == 1 => Player::One,
            _ => Player::Two,
        };

        game.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (1, 2, 1, 2, ...)"
    }
}
