//! Shared vocabulary for two-player parlor board games.
//!
//! Every game crate in the workspace speaks the same language to its caller:
//!
//! - **Engine**: [`BoardEngine`] applies moves in two phases (placement, then resolution)
//! - **Outcome**: [`RoundOutcome`] reports continue / win with winning line / draw
//! - **Phase**: [`RoundPhase`] gates input while a move resolves or after the round ends
//! - **Players**: [`PlayerKey`] names the two players for persistence
//! - **Invariants**: [`Invariant`] and [`InvariantSet`] express board guarantees
//!
//! # Example
//!
//! ```ignore
//! use parlor_core::{BoardEngine, RoundOutcome};
//!
//! let mut engine = SomeGame::new();
//! match engine.apply_move(mv)? {
//!     RoundOutcome::InProgress => {}
//!     RoundOutcome::Win { player, line } => println!("{player} wins on {line:?}"),
//!     RoundOutcome::Draw => println!("draw"),
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod invariants;
mod outcome;
mod player;

pub use engine::BoardEngine;
pub use error::IllegalMove;
pub use invariants::{Invariant, InvariantSet, InvariantViolation};
pub use outcome::{Placement, RoundOutcome, RoundPhase};
pub use player::PlayerKey;
