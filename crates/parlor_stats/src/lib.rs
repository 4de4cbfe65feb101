//! Session statistics for two-player parlor games.
//!
//! # Architecture
//!
//! - **Model**: [`SessionStats`] holds scores, the win streak and the last
//!   [`HISTORY_CAPACITY`] match records
//! - **Tracker**: [`SessionTracker`] is the only writer; every `record_*` call
//!   persists the new state
//! - **Loading**: [`LoaderChain`] tries the current format, then the legacy
//!   score map, then falls back to defaults
//! - **Stores**: [`KeyValueStore`] with [`MemoryStore`] and [`JsonFileStore`]
//! - **View**: [`Scoreboard`] turns stats into display strings
//!
//! # Example
//!
//! ```
//! use parlor_stats::{MemoryStore, SessionTracker, StorageKeys};
//! use parlor_tictactoe::Player;
//!
//! let keys = StorageKeys::new("ticTacToeStats".to_string(), Some("ticTacToeScores".to_string()));
//! let mut tracker = SessionTracker::<Player, _>::load(MemoryStore::new(), keys);
//! tracker.record_win(Player::X, 5).expect("memory store never fails");
//! assert_eq!(tracker.stats().scores().wins(Player::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod loader;
mod model;
mod scoreboard;
mod store;
mod tracker;

pub use error::StoreError;
pub use loader::{CurrentFormat, LegacyFormat, LoaderChain, PersistedStats, StatsLoader, StorageKeys};
pub use model::{
    HISTORY_CAPACITY, MatchRecord, RecordedOutcome, Scores, SessionStats, StatsPlayer, Streak,
};
pub use scoreboard::{EMPTY_HISTORY_MESSAGE, HistoryLine, PlayerStanding, Scoreboard, format_timestamp};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
pub use tracker::SessionTracker;
