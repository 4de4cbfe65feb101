//! Tic-tac-toe and connect-four tables with persistent session statistics.
//!
//! A [`GameTable`] couples a [`BoardEngine`] with a [`SessionTracker`] so that
//! every finished round is scored and saved. [`GamesConfig`] supplies storage
//! keys and the resolve delay per game.
//!
//! # Example
//!
//! ```
//! use parlor_games::{GamesConfig, RoundOutcome};
//! use parlor_stats::MemoryStore;
//! use parlor_tictactoe::Position;
//!
//! let config = GamesConfig::default();
//! let mut table = config.open_tictactoe(MemoryStore::new());
//! for pos in [Position::TopLeft, Position::Center, Position::TopCenter, Position::BottomLeft] {
//!     table.play(pos).expect("legal move");
//! }
//! let outcome = table.play(Position::TopRight).expect("legal move");
//! assert!(matches!(outcome, RoundOutcome::Win { .. }));
//! assert_eq!(*table.tracker().stats().match_count(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod table;

pub use config::{ConfigError, GameSettings, GamesConfig};
pub use table::{GameTable, TableError};

pub use parlor_core::{BoardEngine, IllegalMove, Placement, RoundOutcome, RoundPhase};
pub use parlor_stats::{JsonFileStore, KeyValueStore, MemoryStore, Scoreboard, SessionTracker};

use parlor_connect4::ConnectFour;
use parlor_tictactoe::TicTacToe;
use tracing::instrument;

impl GamesConfig {
    /// Opens a tic-tac-toe table, restoring its stats from `store`.
    #[instrument(skip(self, store))]
    pub fn open_tictactoe<S: KeyValueStore>(&self, store: S) -> GameTable<TicTacToe, S> {
        let settings = self.tictactoe();
        let tracker = SessionTracker::load(store, settings.storage_keys());
        GameTable::new(TicTacToe::new(), tracker, settings.resolve_delay())
    }

    /// Opens a connect-four table, restoring its stats from `store`.
    #[instrument(skip(self, store))]
    pub fn open_connect_four<S: KeyValueStore>(&self, store: S) -> GameTable<ConnectFour, S> {
        let settings = self.connect_four();
        let tracker = SessionTracker::load(store, settings.storage_keys());
        GameTable::new(ConnectFour::new(), tracker, settings.resolve_delay())
    }

    /// Returns the file store at the configured path.
    pub fn file_store(&self) -> JsonFileStore {
        JsonFileStore::new(self.store_path())
    }
}

/// Opens a tic-tac-toe table with the default keys and delay.
pub fn open_tictactoe<S: KeyValueStore>(store: S) -> GameTable<TicTacToe, S> {
    GamesConfig::default().open_tictactoe(store)
}

/// Opens a connect-four table with the default keys and delay.
pub fn open_connect_four<S: KeyValueStore>(store: S) -> GameTable<ConnectFour, S> {
    GamesConfig::default().open_connect_four(store)
}
