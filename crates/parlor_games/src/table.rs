//! A game table: one engine plus the session tracker that scores it.

use chrono::{DateTime, Utc};
use derive_more::{Display, Error, From};
use parlor_core::{BoardEngine, IllegalMove, Placement, RoundOutcome};
use parlor_stats::{KeyValueStore, Scoreboard, SessionTracker, StatsPlayer, StoreError};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Failure while playing at a table.
#[derive(Debug, Clone, Display, Error, From)]
pub enum TableError {
    /// The engine rejected the move; nothing changed.
    #[display("Illegal move: {_0}")]
    Move(IllegalMove),
    /// The stats could not be saved.
    #[display("{_0}")]
    Store(StoreError),
}

/// Drives one [`BoardEngine`] and records every finished round.
///
/// Rounds are scored exactly once, when [`resolve_move`](Self::resolve_move)
/// reports a win or a draw.
#[derive(Debug)]
pub struct GameTable<E: BoardEngine, S> {
    engine: E,
    tracker: SessionTracker<E::Player, S>,
    resolve_delay: Duration,
    unsaved: Option<StoreError>,
}

impl<E, S> GameTable<E, S>
where
    E: BoardEngine,
    E::Player: StatsPlayer + 'static,
    S: KeyValueStore,
{
    /// Seats an engine at a table scored by `tracker`.
    pub fn new(engine: E, tracker: SessionTracker<E::Player, S>, resolve_delay: Duration) -> Self {
        Self {
            engine,
            tracker,
            resolve_delay,
            unsaved: None,
        }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Returns the session tracker.
    pub fn tracker(&self) -> &SessionTracker<E::Player, S> {
        &self.tracker
    }

    /// Pause the caller should hold between [`begin_move`](Self::begin_move)
    /// and [`resolve_move`](Self::resolve_move).
    pub fn resolve_delay(&self) -> Duration {
        self.resolve_delay
    }

    /// Places the current player's piece.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Move`] if the engine rejects the move.
    #[instrument(skip(self))]
    pub fn begin_move(
        &mut self,
        mv: E::Move,
    ) -> Result<Placement<E::Player, E::Coord>, TableError> {
        Ok(self.engine.begin_move(mv)?)
    }

    /// Resolves the pending move and scores the round if it ended.
    ///
    /// The outcome is returned even when the finished round cannot be saved:
    /// the failure is logged, kept in [`unsaved`](Self::unsaved), and retried
    /// by [`save`](Self::save) or the next scored round.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Move`] if nothing is pending.
    #[instrument(skip(self))]
    pub fn resolve_move(&mut self) -> Result<RoundOutcome<E::Player, E::Coord>, TableError> {
        let outcome = self.engine.resolve_move()?;
        let moves = u32::try_from(self.engine.move_count()).unwrap_or(u32::MAX);

        let saved = match &outcome {
            RoundOutcome::Win { player, .. } => {
                info!(?player, moves, "Win scored");
                Some(self.tracker.record_win(*player, moves).map(|_| ()))
            }
            RoundOutcome::Draw => {
                info!(moves, "Draw scored");
                Some(self.tracker.record_draw(moves).map(|_| ()))
            }
            RoundOutcome::InProgress => None,
        };

        match saved {
            Some(Ok(())) => self.unsaved = None,
            Some(Err(err)) => {
                error!(error = %err, "Round scored but stats not saved");
                self.unsaved = Some(err);
            }
            None => {}
        }
        Ok(outcome)
    }

    /// Returns the error from the last failed save, if the stats on disk are behind.
    pub fn unsaved(&self) -> Option<&StoreError> {
        self.unsaved.as_ref()
    }

    /// Persists the current stats, clearing [`unsaved`](Self::unsaved) on success.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Store`] if the store still cannot be written.
    #[instrument(skip(self))]
    pub fn save(&mut self) -> Result<(), TableError> {
        self.tracker.save()?;
        self.unsaved = None;
        Ok(())
    }

    /// Places and resolves a move without a pause.
    ///
    /// # Errors
    ///
    /// Same as [`begin_move`](Self::begin_move) and [`resolve_move`](Self::resolve_move).
    pub fn play(&mut self, mv: E::Move) -> Result<RoundOutcome<E::Player, E::Coord>, TableError> {
        self.begin_move(mv)?;
        self.resolve_move()
    }

    /// Clears the board for a fresh round. Statistics are kept.
    #[instrument(skip(self))]
    pub fn new_round(&mut self) {
        debug!(moves = self.engine.move_count(), "Starting new round");
        self.engine.reset();
    }

    /// Builds the scoreboard view, with relative times measured from `now`.
    pub fn scoreboard(&self, now: DateTime<Utc>) -> Scoreboard {
        Scoreboard::from_stats(self.tracker.stats(), now)
    }
}
