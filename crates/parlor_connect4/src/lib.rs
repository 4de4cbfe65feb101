//! Pure connect-four game logic.
//!
//! [`ConnectFour`] implements [`parlor_core::BoardEngine`] over a 7x6 [`Board`].
//! A move names a column and the piece falls to the lowest empty row. After
//! each drop the four axes through the landing cell are scanned for a run of
//! four.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod game;
pub mod invariants;
pub mod rules;
mod types;

pub use contracts::{ColumnHasRoom, LegalDrop, RoundAccepting};
pub use game::{ConnectFour, ConnectFourOutcome, FIRST_PLAYER};
pub use types::{Board, COLUMNS, Cell, Coord, Player, ROWS, UnknownPlayer};
