//! History domain models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::tags::{Mood, SessionLength};

/// Identity recorded on every history entry in single-user mode.
pub const LOCAL_USER_ID: &str = "local_user";

/// One served recommendation. Append-only; never mutated once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub id: String,
    pub user_id: String,
    pub mood: Mood,
    pub time_selected: SessionLength,
    pub recommended_game_id: String,
    pub recommended_game_name: String,
    /// Epoch milliseconds.
    pub timestamp: i64,
}

impl HistoryRecord {
    pub fn new(
        mood: Mood,
        time_selected: SessionLength,
        game_id: impl Into<String>,
        game_name: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            user_id: LOCAL_USER_ID.to_string(),
            mood,
            time_selected,
            recommended_game_id: game_id.into(),
            recommended_game_name: game_name.into(),
            timestamp,
        }
    }
}

/// Persisted aggregate: recommendation log plus the last visit time.
///
/// `history` is kept in insertion order, which is not guaranteed to be
/// sorted by timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    #[serde(default)]
    pub history: Vec<HistoryRecord>,
    /// Epoch milliseconds of the previous process start.
    #[serde(default)]
    pub last_visit: Option<i64>,
}

impl UserStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_record(&self) -> Option<&HistoryRecord> {
        self.history.last()
    }
}
