//! Catalog entry model.

use serde::{Deserialize, Serialize};

use crate::device::DeviceInfo;
use crate::tags::{GameType, Mood, Platform, SessionLength};

/// A curated game, tagged for mood/time/platform filtering.
///
/// Entries are immutable once a [`super::Catalog`] is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Stable identifier, unique across the catalog.
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub game_type: GameType,
    pub mood_tag: Mood,
    pub session_length: SessionLength,
    pub platform: Platform,
    /// Default link (Play Store for mobile titles, official site for web).
    #[serde(rename = "url")]
    pub primary_url: String,
    /// iOS App Store link, when the title has one.
    #[serde(rename = "appStoreUrl", default, skip_serializing_if = "Option::is_none")]
    pub alternate_url: Option<String>,
    pub active: bool,
    pub description: String,
}

impl CatalogEntry {
    /// URL to open on the given device.
    pub fn launch_url(&self, device: &DeviceInfo) -> &str {
        match (&self.alternate_url, device.is_ios) {
            (Some(alternate), true) => alternate,
            _ => &self.primary_url,
        }
    }

    pub fn matches(&self, mood: Mood, session_length: SessionLength, platform: Platform) -> bool {
        self.active
            && self.mood_tag == mood
            && self.session_length == session_length
            && self.platform == platform
    }
}
