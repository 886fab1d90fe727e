//! Static tags shared by catalog entries, history records and the session.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// One of six fixed, self-reported emotional states.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Mood {
    Relaxed,
    Stressed,
    Tired,
    Competitive,
    Bored,
    Anxious,
}

impl Mood {
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Relaxed => "✨",
            Mood::Stressed => "😤",
            Mood::Tired => "💀",
            Mood::Competitive => "⚡",
            Mood::Bored => "🥱",
            Mood::Anxious => "🌀",
        }
    }
}

/// Coarse duration bucket chosen by the user.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum SessionLength {
    /// 15 minutes
    Short,
    /// 30 minutes
    Medium,
    /// 60+ minutes
    Long,
}

impl SessionLength {
    /// Label shown on the time picker.
    pub fn label(&self) -> &'static str {
        match self {
            SessionLength::Short => "15 Minutes",
            SessionLength::Medium => "30 Minutes",
            SessionLength::Long => "60+ Minutes",
        }
    }

    /// Wording used when asking the discovery provider for a suggestion.
    pub fn prompt_description(&self) -> &'static str {
        match self {
            SessionLength::Short => "15 minutes",
            SessionLength::Medium => "30 minutes",
            SessionLength::Long => "over an hour",
        }
    }
}

/// Platform category a candidate is launched on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Platform {
    Mobile,
    #[serde(rename = "Laptop/Web")]
    #[strum(to_string = "Laptop/Web", serialize = "web", serialize = "laptop")]
    Web,
}

impl Platform {
    /// Wording used when asking the discovery provider for a suggestion.
    pub fn prompt_description(&self) -> &'static str {
        match self {
            Platform::Mobile => "mobile (Google Play or iOS App Store)",
            Platform::Web => "browser-based web",
        }
    }
}

/// Whether the user already owns a catalog game or it is only suggested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum GameType {
    Owned,
    Suggested,
}
