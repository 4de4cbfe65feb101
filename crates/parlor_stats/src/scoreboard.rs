//! Display-ready view of session statistics.

use crate::model::{MatchRecord, RecordedOutcome, SessionStats};
use chrono::{DateTime, TimeDelta, Utc};
use derive_getters::Getters;
use parlor_core::PlayerKey;
use serde::Serialize;

/// Placeholder shown when no rounds have been recorded.
pub const EMPTY_HISTORY_MESSAGE: &str = "No matches yet. Start a round to populate your timeline.";

/// One player's row on the scoreboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct PlayerStanding {
    player: String,
    wins: u32,
    win_rate: u32,
}

/// One rendered history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct HistoryLine {
    headline: String,
    detail: String,
}

impl HistoryLine {
    fn from_record<P: PlayerKey>(record: &MatchRecord<P>, now: DateTime<Utc>) -> Self {
        let headline = match record.outcome() {
            RecordedOutcome::Win { player } => format!("{player} victory"),
            RecordedOutcome::Draw => "Stalemate".to_string(),
        };
        let moves = *record.moves();
        let noun = if moves == 1 { "move" } else { "moves" };
        Self {
            headline,
            detail: format!(
                "{moves} {noun} • {}",
                format_timestamp(*record.timestamp(), now)
            ),
        }
    }
}

/// Scores, streak and history rendered as strings for a UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Scoreboard {
    total_matches: u32,
    draws: u32,
    players: Vec<PlayerStanding>,
    streak: String,
    history: Vec<HistoryLine>,
}

impl Scoreboard {
    /// Builds the view, formatting relative times against `now`.
    pub fn from_stats<P: PlayerKey>(stats: &SessionStats<P>, now: DateTime<Utc>) -> Self {
        let players = P::ALL
            .into_iter()
            .map(|player| PlayerStanding {
                player: player.to_string(),
                wins: stats.scores().wins(player),
                win_rate: stats.win_rate(player),
            })
            .collect();

        Self {
            total_matches: stats.total_matches(),
            draws: stats.scores().draws(),
            players,
            streak: stats.streak().description(),
            history: stats
                .history()
                .iter()
                .map(|record| HistoryLine::from_record(record, now))
                .collect(),
        }
    }

    /// Summary line such as `Matches played: 6 • X win rate: 50% • O win rate: 33%`.
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("Matches played: {}", self.total_matches)];
        parts.extend(
            self.players
                .iter()
                .map(|s| format!("{} win rate: {}%", s.player, s.win_rate)),
        );
        parts.join(" • ")
    }

    /// Returns true when there is no history to show.
    pub fn is_history_empty(&self) -> bool {
        self.history.is_empty()
    }
}

/// Formats an epoch-millisecond timestamp relative to `now`.
///
/// Under a minute (or in the future, or unrepresentable) is `Just now`, under an
/// hour is `<m> min ago`, anything older is an absolute UTC stamp like `Oct 19, 14:05`.
pub fn format_timestamp(timestamp: i64, now: DateTime<Utc>) -> String {
    let Some(when) = DateTime::<Utc>::from_timestamp_millis(timestamp) else {
        return "Just now".to_string();
    };
    let elapsed = now.signed_duration_since(when);
    if elapsed < TimeDelta::minutes(1) {
        "Just now".to_string()
    } else if elapsed < TimeDelta::hours(1) {
        format!("{} min ago", elapsed.num_minutes())
    } else {
        when.format("%b %-d, %H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use parlor_tictactoe::Player;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 19, 14, 5, 0).unwrap()
    }

    #[test]
    fn test_relative_times() {
        let now = now();
        let ms = now.timestamp_millis();
        assert_eq!(format_timestamp(ms - 30_000, now), "Just now");
        assert_eq!(format_timestamp(ms + 30_000, now), "Just now");
        assert_eq!(format_timestamp(ms - 5 * 60_000, now), "5 min ago");
        assert_eq!(format_timestamp(ms - 59 * 60_000, now), "59 min ago");
        assert_eq!(format_timestamp(ms - 2 * 3_600_000, now), "Oct 19, 12:05");
        assert_eq!(format_timestamp(i64::MAX, now), "Just now");
    }

    #[test]
    fn test_scoreboard_lines() {
        let now = now();
        let ms = now.timestamp_millis();
        let mut stats = SessionStats::new();
        stats.record_win(Player::X, 5, ms - 120_000);
        stats.record_draw(1, ms);

        let board = Scoreboard::from_stats(&stats, now);
        assert_eq!(*board.total_matches(), 2);
        assert_eq!(board.history()[0].headline(), "Stalemate");
        assert_eq!(board.history()[0].detail(), "1 move • Just now");
        assert_eq!(board.history()[1].headline(), "X victory");
        assert_eq!(board.history()[1].detail(), "5 moves • 2 min ago");
        assert_eq!(board.streak(), "—");
        assert_eq!(
            board.summary(),
            "Matches played: 2 • X win rate: 50% • O win rate: 0%"
        );
    }

    #[test]
    fn test_empty_scoreboard() {
        let board = Scoreboard::from_stats(&SessionStats::<Player>::new(), now());
        assert!(board.is_history_empty());
        assert_eq!(board.summary(), "Matches played: 0 • X win rate: 0% • O win rate: 0%");
        assert_eq!(board.players()[1].player(), "O");
    }
}
