//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board), kept apart from the engine
//! so the invariants and tests can use them directly.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, winning_line};
