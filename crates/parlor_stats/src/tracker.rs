//! Session tracker: the single owner and writer of a game's statistics.

use crate::loader::{LoaderChain, PersistedStats, StorageKeys};
use crate::model::{SessionStats, StatsPlayer};
use crate::store::KeyValueStore;
use crate::StoreError;
use chrono::Utc;
use tracing::{debug, error, instrument};

/// Owns a game's [`SessionStats`] and persists them after every update.
///
/// Only the current key is ever written; the legacy key is read once at load.
#[derive(Debug)]
pub struct SessionTracker<P, S> {
    stats: SessionStats<P>,
    store: S,
    keys: StorageKeys,
}

impl<P: StatsPlayer + 'static, S: KeyValueStore> SessionTracker<P, S> {
    /// Restores statistics from `store` through the standard loader chain.
    #[instrument(skip(store))]
    pub fn load(store: S, keys: StorageKeys) -> Self {
        let stats = LoaderChain::for_keys(&keys).load(&store);
        Self { stats, store, keys }
    }

    /// Wraps already-loaded statistics without touching the store.
    pub fn with_stats(stats: SessionStats<P>, store: S, keys: StorageKeys) -> Self {
        Self { stats, store, keys }
    }

    /// Returns the current statistics.
    pub fn stats(&self) -> &SessionStats<P> {
        &self.stats
    }

    /// Returns the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the storage keys.
    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    /// Records a win stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails; the in-memory update still stands.
    pub fn record_win(&mut self, player: P, moves: u32) -> Result<&SessionStats<P>, StoreError> {
        self.record_win_at(player, moves, Utc::now().timestamp_millis())
    }

    /// Records a draw stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails; the in-memory update still stands.
    pub fn record_draw(&mut self, moves: u32) -> Result<&SessionStats<P>, StoreError> {
        self.record_draw_at(moves, Utc::now().timestamp_millis())
    }

    /// Records a win at an explicit epoch-millisecond timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    #[instrument(skip(self))]
    pub fn record_win_at(
        &mut self,
        player: P,
        moves: u32,
        timestamp: i64,
    ) -> Result<&SessionStats<P>, StoreError> {
        self.stats.record_win(player, moves, timestamp);
        self.save()?;
        Ok(&self.stats)
    }

    /// Records a draw at an explicit epoch-millisecond timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails.
    #[instrument(skip(self))]
    pub fn record_draw_at(
        &mut self,
        moves: u32,
        timestamp: i64,
    ) -> Result<&SessionStats<P>, StoreError> {
        self.stats.record_draw(moves, timestamp);
        self.save()?;
        Ok(&self.stats)
    }

    /// Writes the current statistics under the current key.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the store write fails.
    #[instrument(skip(self), fields(key = %self.keys.current))]
    pub fn save(&mut self) -> Result<(), StoreError> {
        let blob = serde_json::to_string(&PersistedStats::from(&self.stats))?;
        self.store
            .write(&self.keys.current, blob)
            .inspect_err(|e| error!(error = %e, "Failed to persist session stats"))?;
        debug!(matches = *self.stats.match_count(), "Session stats saved");
        Ok(())
    }
}
