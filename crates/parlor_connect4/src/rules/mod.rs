//! Game rules for connect-four.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{AXES, WIN_LENGTH, winning_line};
