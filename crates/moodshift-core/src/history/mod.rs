//! Recommendation history: the persisted log and its aggregates.
//!
//! The functions in this module are pure; [`store::HistoryStore`] adds the
//! load/save cycle through a [`crate::storage::BlobStore`].

pub mod model;
pub mod store;

use crate::error::{MoodshiftError, Result};

pub use model::{HistoryRecord, LOCAL_USER_ID, UserStats};
pub use store::HistoryStore;

pub const SECOND_MS: i64 = 1_000;
pub const MINUTE_MS: i64 = 60 * SECOND_MS;
pub const HOUR_MS: i64 = 60 * MINUTE_MS;
pub const DAY_MS: i64 = 24 * HOUR_MS;

/// Window in which a repeat log of the same game id is ignored.
pub const DEBOUNCE_WINDOW_MS: i64 = 5 * SECOND_MS;

/// Window counted by [`weekly_count`].
pub const WEEK_MS: i64 = 7 * DAY_MS;

/// A visit within this window counts as returning.
pub const RETURNING_WINDOW_MS: i64 = DAY_MS;

/// Returns `stats` with `record` appended. Persisting is the caller's job.
pub fn append(stats: &UserStats, record: HistoryRecord) -> UserStats {
    let mut updated = stats.clone();
    updated.history.push(record);
    updated
}

/// Number of records newer than seven days before `now`.
pub fn weekly_count(stats: &UserStats, now: i64) -> usize {
    let cutoff = now.saturating_sub(WEEK_MS);
    stats
        .history
        .iter()
        .filter(|record| record.timestamp > cutoff)
        .count()
}

/// True when the last visit was less than 24 hours before `now`.
pub fn is_returning_visitor(stats: &UserStats, now: i64) -> bool {
    stats
        .last_visit
        .is_some_and(|last_visit| now.saturating_sub(last_visit) < RETURNING_WINDOW_MS)
}

/// Whether logging `game_id` at `now` would create a new record.
///
/// A record is skipped only when the most recent entry has the same game id
/// and was written less than [`DEBOUNCE_WINDOW_MS`] ago.
pub fn should_record(stats: &UserStats, game_id: &str, now: i64) -> bool {
    match stats.last_record() {
        Some(last) => {
            let recent = now.saturating_sub(last.timestamp) < DEBOUNCE_WINDOW_MS;
            !(last.recommended_game_id == game_id && recent)
        }
        None => true,
    }
}

/// History sorted newest first, for display.
pub fn recent_first(stats: &UserStats) -> Vec<&HistoryRecord> {
    let mut records: Vec<&HistoryRecord> = stats.history.iter().collect();
    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    records
}

pub fn decode_stats(blob: &str) -> Result<UserStats> {
    serde_json::from_str(blob).map_err(|e| MoodshiftError::PersistenceCorrupt(e.to_string()))
}

pub fn encode_stats(stats: &UserStats) -> Result<String> {
    Ok(serde_json::to_string(stats)?)
}

/// Short human label for how long ago `timestamp` was.
pub fn relative_time(timestamp: i64, now: i64) -> String {
    let seconds = now.saturating_sub(timestamp) / SECOND_MS;
    if seconds < 60 {
        return "Just now".to_string();
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }
    format!("{}d ago", hours / 24)
}
