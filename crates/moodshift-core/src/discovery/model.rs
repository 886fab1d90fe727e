//! Discovery result models.

use serde::{Deserialize, Serialize};

/// Id logged for fallback results, which have no stable catalog id.
pub const AI_DISCOVERY_ID: &str = "ai_discovery";

/// Maximum number of grounding citations kept on a result.
pub const MAX_SOURCES: usize = 3;

/// A grounding citation backing a discovered suggestion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl SourceLink {
    pub fn new(title: Option<String>, uri: Option<String>) -> Self {
        Self { title, uri }
    }

    /// Title to show for the link.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Game Source")
    }
}

/// A candidate produced by the discovery fallback.
///
/// Produced fresh on every call and never persisted on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryResult {
    pub name: String,
    pub description: String,
    pub url: String,
    /// At most [`MAX_SOURCES`] citations, in provider order.
    #[serde(default)]
    pub sources: Vec<SourceLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl DiscoveryResult {
    /// Id used for history logging.
    pub fn log_id(&self) -> &str {
        self.id.as_deref().unwrap_or(AI_DISCOVERY_ID)
    }
}
