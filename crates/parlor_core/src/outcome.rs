//! Round outcomes and engine phases.

use serde::{Deserialize, Serialize};

/// Where an engine stands within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Accepting moves.
    Active,
    /// A move was placed and awaits resolution; input is rejected.
    Resolving,
    /// The round ended with a winner.
    Won,
    /// The round ended with a full board and no winner.
    Drawn,
}

impl RoundPhase {
    /// Returns true once the round has a final result.
    pub fn is_terminal(self) -> bool {
        matches!(self, RoundPhase::Won | RoundPhase::Drawn)
    }
}

/// Result of resolving a move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome<P, C> {
    /// The round continues with the other player to move.
    InProgress,
    /// The mover completed a line.
    Win {
        /// The winner.
        player: P,
        /// Cells forming the winning line, used for highlighting.
        line: Vec<C>,
    },
    /// The board filled up without a winner.
    Draw,
}

impl<P: Copy, C> RoundOutcome<P, C> {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<P> {
        match self {
            RoundOutcome::Win { player, .. } => Some(*player),
            RoundOutcome::InProgress | RoundOutcome::Draw => None,
        }
    }

    /// Returns the winning line, empty unless the round was won.
    pub fn line(&self) -> &[C] {
        match self {
            RoundOutcome::Win { line, .. } => line,
            RoundOutcome::InProgress | RoundOutcome::Draw => &[],
        }
    }

    /// Returns true for a win or a draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RoundOutcome::InProgress)
    }
}

/// The cell a move landed on, reported before resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement<P, C> {
    /// The player whose mark was placed.
    pub player: P,
    /// Where the mark landed.
    pub cell: C,
}

impl<P, C> Placement<P, C> {
    /// Creates a new placement.
    pub fn new(player: P, cell: C) -> Self {
        Self { player, cell }
    }
}
