//! Board invariants for connect-four.

pub mod alternating_turn;
pub mod gravity;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use gravity::GravityInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// All connect-four invariants as a composable set.
pub type ConnectFourInvariants = (
    MonotonicBoardInvariant,
    GravityInvariant,
    AlternatingTurnInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConnectFour;
    use parlor_core::InvariantSet;

    #[test]
    fn test_invariant_set_holds_after_drops() {
        let game = ConnectFour::replay(&[3, 3, 4, 2, 2]).expect("legal replay");
        assert!(ConnectFourInvariants::check_all(&game).is_ok());
    }
}
