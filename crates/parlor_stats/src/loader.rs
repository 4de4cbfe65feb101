//! Ordered fallback chain for restoring persisted statistics.
//!
//! The current format is tried first, then the legacy bare score map, then
//! defaults. Unreadable or malformed blobs are logged and skipped.

use crate::model::{MatchRecord, Scores, SessionStats, StatsPlayer, Streak};
use crate::store::KeyValueStore;
use derive_new::new;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info, instrument, warn};

/// Where a game's statistics live in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct StorageKeys {
    /// Key read and written in the current format.
    pub current: String,
    /// Key of the legacy score map, read only as a fallback.
    pub legacy: Option<String>,
}

/// The current on-disk shape: `{scores, history, matches, streak}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "P: StatsPlayer", deserialize = "P: StatsPlayer"))]
pub struct PersistedStats<P> {
    /// Win and draw counts.
    #[serde(default)]
    pub scores: Scores<P>,
    /// Match records, newest first.
    #[serde(default)]
    pub history: Vec<MatchRecord<P>>,
    /// Stored match count.
    #[serde(default)]
    pub matches: u32,
    /// Current win streak.
    #[serde(default)]
    pub streak: Streak<P>,
}

impl<P: StatsPlayer> From<&SessionStats<P>> for PersistedStats<P> {
    fn from(stats: &SessionStats<P>) -> Self {
        Self {
            scores: stats.scores().clone(),
            history: stats.history().iter().cloned().collect(),
            matches: *stats.match_count(),
            streak: *stats.streak(),
        }
    }
}

impl<P: StatsPlayer> From<PersistedStats<P>> for SessionStats<P> {
    /// A positive stored match count is trusted as is; otherwise it is derived from the scores.
    fn from(persisted: PersistedStats<P>) -> Self {
        let match_count = if persisted.matches > 0 {
            persisted.matches
        } else {
            persisted.scores.total()
        };
        SessionStats::from_parts(
            persisted.scores,
            match_count,
            persisted.streak,
            persisted.history,
        )
    }
}

/// One step of the fallback chain.
pub trait StatsLoader<P> {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Returns restored statistics, or `None` if this source is absent or unusable.
    fn load(&self, store: &dyn KeyValueStore) -> Option<SessionStats<P>>;
}

/// Reads a raw blob, treating store failures as absence.
fn read_blob(store: &dyn KeyValueStore, key: &str) -> Option<String> {
    match store.read(key) {
        Ok(blob) => blob,
        Err(err) => {
            warn!(key, error = %err, "Failed to read persisted stats");
            None
        }
    }
}

/// Loads the current `{scores, history, matches, streak}` format.
#[derive(Debug, Clone, new)]
pub struct CurrentFormat {
    key: String,
}

impl<P: StatsPlayer> StatsLoader<P> for CurrentFormat {
    fn name(&self) -> &'static str {
        "current"
    }

    /// Each field is restored on its own; an invalid field or history entry
    /// falls back to its default without discarding the rest.
    #[instrument(skip(self, store), fields(key = %self.key))]
    fn load(&self, store: &dyn KeyValueStore) -> Option<SessionStats<P>> {
        let blob = read_blob(store, &self.key)?;
        let mut fields = match serde_json::from_str::<Value>(&blob) {
            Ok(Value::Object(fields)) => fields,
            Ok(other) => {
                warn!(kind = json_kind(&other), "Discarding persisted stats that are not an object");
                return None;
            }
            Err(err) => {
                warn!(error = %err, "Discarding corrupt persisted stats");
                return None;
            }
        };

        let history = match fields.remove("history") {
            Some(Value::Array(entries)) => entries
                .into_iter()
                .enumerate()
                .filter_map(|(index, entry)| {
                    serde_json::from_value::<MatchRecord<P>>(entry)
                        .inspect_err(|err| warn!(index, error = %err, "Skipping invalid history entry"))
                        .ok()
                })
                .collect(),
            Some(Value::Null) | None => Vec::new(),
            Some(other) => {
                warn!(kind = json_kind(&other), "Ignoring history that is not an array");
                Vec::new()
            }
        };

        Some(
            PersistedStats {
                scores: take_field(&mut fields, "scores"),
                history,
                matches: take_field(&mut fields, "matches"),
                streak: take_field(&mut fields, "streak"),
            }
            .into(),
        )
    }
}

/// Deserializes one top-level field, defaulting when absent or invalid.
fn take_field<T: DeserializeOwned + Default>(fields: &mut Map<String, Value>, name: &str) -> T {
    match fields.remove(name) {
        None | Some(Value::Null) => T::default(),
        Some(value) => serde_json::from_value(value).unwrap_or_else(|err| {
            warn!(field = name, error = %err, "Ignoring invalid persisted field");
            T::default()
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Loads the legacy bare `{<player>: wins, ..., draws}` map.
///
/// History and streak start empty; the match count is the score sum.
#[derive(Debug, Clone, new)]
pub struct LegacyFormat {
    key: String,
}

impl<P: StatsPlayer> StatsLoader<P> for LegacyFormat {
    fn name(&self) -> &'static str {
        "legacy"
    }

    #[instrument(skip(self, store), fields(key = %self.key))]
    fn load(&self, store: &dyn KeyValueStore) -> Option<SessionStats<P>> {
        let blob = read_blob(store, &self.key)?;
        match serde_json::from_str::<Scores<P>>(&blob) {
            Ok(scores) => {
                let match_count = scores.total();
                Some(SessionStats::from_parts(
                    scores,
                    match_count,
                    Streak::none(),
                    Vec::new(),
                ))
            }
            Err(err) => {
                warn!(error = %err, "Discarding corrupt legacy scores");
                None
            }
        }
    }
}

/// Loaders tried in order; the first that yields statistics wins.
pub struct LoaderChain<P> {
    loaders: Vec<Box<dyn StatsLoader<P>>>,
}

impl<P: StatsPlayer + 'static> LoaderChain<P> {
    /// Builds the standard chain: current key, then the legacy key if configured.
    pub fn for_keys(keys: &StorageKeys) -> Self {
        let mut loaders: Vec<Box<dyn StatsLoader<P>>> =
            vec![Box::new(CurrentFormat::new(keys.current.clone()))];
        if let Some(legacy) = &keys.legacy {
            loaders.push(Box::new(LegacyFormat::new(legacy.clone())));
        }
        Self { loaders }
    }

    /// Builds a chain from explicit loaders.
    pub fn new(loaders: Vec<Box<dyn StatsLoader<P>>>) -> Self {
        Self { loaders }
    }

    /// Runs the chain, falling back to empty statistics.
    #[instrument(skip_all)]
    pub fn load(&self, store: &dyn KeyValueStore) -> SessionStats<P> {
        for loader in &self.loaders {
            if let Some(stats) = loader.load(store) {
                info!(
                    source = loader.name(),
                    matches = *stats.match_count(),
                    "Session stats restored"
                );
                return stats;
            }
            debug!(source = loader.name(), "No usable stats");
        }

        info!("No persisted stats, starting fresh");
        SessionStats::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use parlor_tictactoe::Player;

    fn keys() -> StorageKeys {
        StorageKeys::new("stats".to_string(), Some("scores".to_string()))
    }

    #[test]
    fn test_positive_stored_matches_trusted() {
        let store = MemoryStore::new().with_entry(
            "stats",
            r#"{"scores":{"X":1,"O":1,"draws":0},"matches":7}"#,
        );
        let stats = LoaderChain::<Player>::for_keys(&keys()).load(&store);
        assert_eq!(*stats.match_count(), 7);
    }

    #[test]
    fn test_zero_stored_matches_derived() {
        let store = MemoryStore::new().with_entry(
            "stats",
            r#"{"scores":{"X":1,"O":2,"draws":3},"matches":0}"#,
        );
        let stats = LoaderChain::<Player>::for_keys(&keys()).load(&store);
        assert_eq!(*stats.match_count(), 6);
    }

    #[test]
    fn test_current_format_wins_over_legacy() {
        let store = MemoryStore::new()
            .with_entry("stats", r#"{"scores":{"X":1,"O":0,"draws":0},"matches":1}"#)
            .with_entry("scores", r#"{"X":9,"O":9,"draws":9}"#);
        let stats = LoaderChain::<Player>::for_keys(&keys()).load(&store);
        assert_eq!(stats.scores().wins(Player::X), 1);
    }

    #[test]
    fn test_corrupt_current_falls_back_to_legacy() {
        let store = MemoryStore::new()
            .with_entry("stats", "{not json")
            .with_entry("scores", r#"{"X":2,"O":1,"draws":0}"#);
        let stats = LoaderChain::<Player>::for_keys(&keys()).load(&store);
        assert_eq!(stats.scores().wins(Player::X), 2);
        assert_eq!(*stats.match_count(), 3);
    }

    #[test]
    fn test_invalid_history_entry_keeps_other_fields() {
        let blob = serde_json::json!({
            "scores": {"X": 4, "O": 2, "draws": 1},
            "history": [
                {"outcome": "win", "player": "Z", "moves": 5, "timestamp": 1},
                {"outcome": "draw", "moves": 9, "timestamp": 2}
            ],
            "matches": 7,
            "streak": {"player": "X", "length": 2}
        });
        let store = MemoryStore::new().with_entry("stats", blob.to_string());
        let stats = LoaderChain::<Player>::for_keys(&keys()).load(&store);

        assert_eq!(stats.scores().wins(Player::X), 4);
        assert_eq!(*stats.match_count(), 7);
        assert_eq!(stats.streak().length, 2);
        assert_eq!(stats.history().len(), 1);
        assert_eq!(*stats.history()[0].timestamp(), 2);
    }

    #[test]
    fn test_invalid_field_falls_back_to_default() {
        let blob = serde_json::json!({
            "scores": {"X": 1, "O": 2, "draws": 0},
            "history": "not a list",
            "matches": "many",
            "streak": 5
        });
        let store = MemoryStore::new()
            .with_entry("stats", blob.to_string())
            .with_entry("scores", r#"{"X":9,"O":9,"draws":9}"#);
        let stats = LoaderChain::<Player>::for_keys(&keys()).load(&store);

        assert_eq!(stats.scores().wins(Player::O), 2);
        assert_eq!(*stats.match_count(), 3);
        assert!(stats.history().is_empty());
        assert_eq!(*stats.streak(), Streak::none());
    }

    #[test]
    fn test_everything_corrupt_gives_defaults() {
        let store = MemoryStore::new()
            .with_entry("stats", "[1, 2")
            .with_entry("scores", "\"oops\"");
        let stats = LoaderChain::<Player>::for_keys(&keys()).load(&store);
        assert_eq!(stats, SessionStats::new());
    }

    #[test]
    fn test_oversized_history_truncated() {
        let records: Vec<String> = (0..12)
            .map(|i| format!(r#"{{"outcome":"draw","moves":9,"timestamp":{i}}}"#))
            .collect();
        let blob = format!(
            r#"{{"scores":{{"X":0,"O":0,"draws":12}},"history":[{}],"matches":12}}"#,
            records.join(",")
        );
        let store = MemoryStore::new().with_entry("stats", &blob);
        let stats = LoaderChain::<Player>::for_keys(&keys()).load(&store);
        assert_eq!(stats.history().len(), crate::HISTORY_CAPACITY);
        assert_eq!(*stats.history()[0].timestamp(), 0);
    }
}
