//! Table configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use parlor_stats::StorageKeys;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Storage keys and pacing for one game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSettings {
    /// Key the current stats format is read from and written to.
    stats_key: String,

    /// Legacy score-map key, read once as a migration source.
    #[serde(default)]
    legacy_key: Option<String>,

    /// Pause the caller should hold between placing a piece and resolving it.
    #[serde(default)]
    resolve_delay_ms: u64,
}

impl GameSettings {
    /// Creates settings for one game.
    pub fn new(stats_key: String, legacy_key: Option<String>, resolve_delay_ms: u64) -> Self {
        Self {
            stats_key,
            legacy_key,
            resolve_delay_ms,
        }
    }

    /// Returns the storage keys for the session tracker.
    pub fn storage_keys(&self) -> StorageKeys {
        StorageKeys::new(self.stats_key.clone(), self.legacy_key.clone())
    }

    /// Returns the resolve delay as a [`Duration`].
    pub fn resolve_delay(&self) -> Duration {
        Duration::from_millis(self.resolve_delay_ms)
    }
}

#[instrument]
fn default_store_path() -> PathBuf {
    PathBuf::from("parlor_stats.json")
}

#[instrument]
fn default_tictactoe() -> GameSettings {
    GameSettings::new(
        "ticTacToeStats".to_string(),
        Some("ticTacToeScores".to_string()),
        0,
    )
}

#[instrument]
fn default_connect_four() -> GameSettings {
    GameSettings::new(
        "connect4Stats".to_string(),
        Some("connect4Scores".to_string()),
        500,
    )
}

/// Configuration for both game tables and their shared store.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GamesConfig {
    /// JSON file backing [`parlor_stats::JsonFileStore`].
    #[serde(default = "default_store_path")]
    store_path: PathBuf,

    /// Tic-tac-toe settings.
    #[serde(default = "default_tictactoe")]
    tictactoe: GameSettings,

    /// Connect-four settings.
    #[serde(default = "default_connect_four")]
    connect_four: GameSettings,
}

impl Default for GamesConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            tictactoe: default_tictactoe(),
            connect_four: default_connect_four(),
        }
    }
}

impl GamesConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from TOML text. Missing tables take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the text is not valid configuration.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        info!(
            store_path = %config.store_path.display(),
            tictactoe_key = %config.tictactoe.stats_key,
            connect_four_key = %config.connect_four.stats_key,
            "Config loaded successfully"
        );
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = GamesConfig::from_toml_str("").unwrap();
        assert_eq!(config, GamesConfig::default());
        assert_eq!(config.tictactoe().stats_key(), "ticTacToeStats");
        assert_eq!(config.connect_four().resolve_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_partial_table_overrides() {
        let config = GamesConfig::from_toml_str(
            r#"
            store_path = "/tmp/parlor.json"

            [connect_four]
            stats_key = "c4"
            "#,
        )
        .unwrap();
        assert_eq!(config.store_path(), &PathBuf::from("/tmp/parlor.json"));
        assert_eq!(config.connect_four().stats_key(), "c4");
        assert_eq!(config.connect_four().legacy_key(), &None);
        assert_eq!(*config.connect_four().resolve_delay_ms(), 0);
        assert_eq!(config.tictactoe(), &default_tictactoe());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let err = GamesConfig::from_toml_str("store_path = [").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = GamesConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }
}
