//! Player naming shared by engines and persistence.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// One of the exactly two players of a game.
///
/// `key` is the string used as an object key in persisted score maps
/// (`"X"`/`"O"` for tic-tac-toe, `"1"`/`"2"` for connect-four).
pub trait PlayerKey: Copy + Eq + Ord + Hash + Debug + Display {
    /// Both players, first mover first.
    const ALL: [Self; 2];

    /// Returns the persisted key for this player.
    fn key(self) -> &'static str;

    /// Looks a player up by persisted key.
    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|player| player.key() == key)
    }

    /// Returns the other player.
    fn opponent(self) -> Self {
        if self == Self::ALL[0] {
            Self::ALL[1]
        } else {
            Self::ALL[0]
        }
    }
}
