//! Session statistics model: scores, streak and bounded match history.

use derive_getters::Getters;
use derive_new::new;
use parlor_core::PlayerKey;
use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, VecDeque};
use tracing::{debug, instrument};

/// Most recent match records kept in history.
pub const HISTORY_CAPACITY: usize = 8;

/// Object key holding the draw count in persisted score maps.
pub(crate) const DRAWS_KEY: &str = "draws";

/// A player type the tracker can persist.
pub trait StatsPlayer: PlayerKey + Serialize + DeserializeOwned {}

impl<P: PlayerKey + Serialize + DeserializeOwned> StatsPlayer for P {}

/// Win counts per player plus draws.
///
/// Persisted as a flat object: `{"X": 3, "O": 2, "draws": 1}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scores<P> {
    wins: BTreeMap<P, u32>,
    draws: u32,
}

impl<P: PlayerKey> Scores<P> {
    /// Creates zeroed scores for both players.
    pub fn new() -> Self {
        Self {
            wins: P::ALL.into_iter().map(|player| (player, 0)).collect(),
            draws: 0,
        }
    }

    /// Returns the win count for a player.
    pub fn wins(&self, player: P) -> u32 {
        self.wins.get(&player).copied().unwrap_or(0)
    }

    /// Returns the draw count.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Returns all wins plus draws.
    pub fn total(&self) -> u32 {
        self.wins.values().sum::<u32>() + self.draws
    }

    pub(crate) fn add_win(&mut self, player: P) {
        *self.wins.entry(player).or_insert(0) += 1;
    }

    pub(crate) fn add_draw(&mut self) {
        self.draws += 1;
    }

    /// Builds scores from a persisted key → count map; missing or null counts are zero.
    fn from_counts(counts: &BTreeMap<String, Option<u32>>) -> Self {
        let count = |key: &str| counts.get(key).copied().flatten().unwrap_or(0);
        Self {
            wins: P::ALL
                .into_iter()
                .map(|player| (player, count(player.key())))
                .collect(),
            draws: count(DRAWS_KEY),
        }
    }
}

impl<P: PlayerKey> Default for Scores<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PlayerKey> Serialize for Scores<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(P::ALL.len() + 1))?;
        for player in P::ALL {
            map.serialize_entry(player.key(), &self.wins(player))?;
        }
        map.serialize_entry(DRAWS_KEY, &self.draws)?;
        map.end()
    }
}

impl<'de, P: PlayerKey> Deserialize<'de> for Scores<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let counts = BTreeMap::<String, Option<u32>>::deserialize(deserializer)?;
        Ok(Self::from_counts(&counts))
    }
}

/// Consecutive wins by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak<P> {
    /// Streak holder, `None` after a draw or before any win.
    pub player: Option<P>,
    /// Consecutive wins by the holder.
    #[serde(default)]
    pub length: u32,
}

impl<P: PlayerKey> Streak<P> {
    /// The neutral streak.
    pub fn none() -> Self {
        Self {
            player: None,
            length: 0,
        }
    }

    /// Returns the streak after `winner` takes a round.
    pub fn extended(self, winner: P) -> Self {
        match self.player {
            Some(holder) if holder == winner => Self {
                player: Some(winner),
                length: self.length + 1,
            },
            _ => Self {
                player: Some(winner),
                length: 1,
            },
        }
    }

    /// Short description such as `X ×3`, or `—` with no holder.
    pub fn description(&self) -> String {
        match self.player {
            Some(player) => format!("{} ×{}", player, self.length),
            None => "—".to_string(),
        }
    }
}

impl<P> Default for Streak<P> {
    fn default() -> Self {
        Self {
            player: None,
            length: 0,
        }
    }
}

/// How a recorded round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum RecordedOutcome<P> {
    /// The round had a winner.
    Win {
        /// The winner.
        player: P,
    },
    /// The round was drawn.
    Draw,
}

/// One completed round in the history log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct MatchRecord<P> {
    /// Win with its player, or draw.
    #[serde(flatten)]
    outcome: RecordedOutcome<P>,
    /// Marks placed during the round.
    #[serde(default)]
    moves: u32,
    /// Completion time in epoch milliseconds.
    #[serde(default)]
    timestamp: i64,
}

/// Scores, streak and recent history accumulated across rounds.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SessionStats<P> {
    scores: Scores<P>,
    match_count: u32,
    streak: Streak<P>,
    history: VecDeque<MatchRecord<P>>,
}

impl<P: PlayerKey> SessionStats<P> {
    /// Creates empty statistics.
    pub fn new() -> Self {
        Self {
            scores: Scores::new(),
            match_count: 0,
            streak: Streak::none(),
            history: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Assembles statistics from loaded parts, keeping the newest records.
    pub fn from_parts(
        scores: Scores<P>,
        match_count: u32,
        streak: Streak<P>,
        history: impl IntoIterator<Item = MatchRecord<P>>,
    ) -> Self {
        Self {
            scores,
            match_count,
            streak,
            history: history.into_iter().take(HISTORY_CAPACITY).collect(),
        }
    }

    /// Counts a win, extends the streak and logs the round.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, player: P, moves: u32, timestamp: i64) {
        self.scores.add_win(player);
        self.match_count += 1;
        self.streak = self.streak.extended(player);
        self.push_record(MatchRecord::new(RecordedOutcome::Win { player }, moves, timestamp));
        debug!(streak = self.streak.length, matches = self.match_count, "Win recorded");
    }

    /// Counts a draw, clears the streak and logs the round.
    #[instrument(skip(self))]
    pub fn record_draw(&mut self, moves: u32, timestamp: i64) {
        self.scores.add_draw();
        self.match_count += 1;
        self.streak = Streak::none();
        self.push_record(MatchRecord::new(RecordedOutcome::Draw, moves, timestamp));
        debug!(matches = self.match_count, "Draw recorded");
    }

    /// Completed rounds for display: the match count, or the score sum if that is zero.
    pub fn total_matches(&self) -> u32 {
        if self.match_count != 0 {
            self.match_count
        } else {
            self.scores.total()
        }
    }

    /// Calculates a player's win rate as a rounded percentage (0–100).
    pub fn win_rate(&self, player: P) -> u32 {
        let total = self.total_matches();
        if total == 0 {
            0
        } else {
            (f64::from(self.scores.wins(player)) / f64::from(total) * 100.0).round() as u32
        }
    }

    fn push_record(&mut self, record: MatchRecord<P>) {
        self.history.push_front(record);
        self.history.truncate(HISTORY_CAPACITY);
    }
}

impl<P: PlayerKey> Default for SessionStats<P> {
    fn default() -> Self {
        Self::new()
    }
}
