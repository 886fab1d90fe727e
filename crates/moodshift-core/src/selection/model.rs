//! Selection value types.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogEntry;
use crate::device::DeviceInfo;
use crate::discovery::{DiscoveryResult, SourceLink};
use crate::tags::{Mood, Platform, SessionLength};

/// The three tags a recommendation is filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionQuery {
    pub mood: Mood,
    pub length: SessionLength,
    pub platform: Platform,
}

impl SelectionQuery {
    pub fn new(mood: Mood, length: SessionLength, platform: Platform) -> Self {
        Self {
            mood,
            length,
            platform,
        }
    }
}

/// A recommendation ready to be shown: either a catalog entry or a
/// discovered suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", content = "game", rename_all = "snake_case")]
pub enum Candidate {
    Local(CatalogEntry),
    Discovered(DiscoveryResult),
}

impl Candidate {
    /// Id recorded in history. Discovered suggestions share a sentinel id.
    pub fn id(&self) -> &str {
        match self {
            Candidate::Local(entry) => &entry.id,
            Candidate::Discovered(result) => result.log_id(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Candidate::Local(entry) => &entry.name,
            Candidate::Discovered(result) => &result.name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Candidate::Local(entry) => &entry.description,
            Candidate::Discovered(result) => &result.description,
        }
    }

    /// URL the launch action should open on `device`.
    pub fn launch_url(&self, device: &DeviceInfo) -> &str {
        match self {
            Candidate::Local(entry) => entry.launch_url(device),
            Candidate::Discovered(result) => &result.url,
        }
    }

    /// Grounding citations; always empty for catalog entries.
    pub fn sources(&self) -> &[SourceLink] {
        match self {
            Candidate::Local(_) => &[],
            Candidate::Discovered(result) => &result.sources,
        }
    }

    pub fn is_discovered(&self) -> bool {
        matches!(self, Candidate::Discovered(_))
    }

    /// Key that identifies "the same candidate is still on screen".
    pub fn display_key(&self) -> DisplayKey {
        DisplayKey {
            id: self.id().to_string(),
            name: self.name().to_string(),
        }
    }
}

/// Identity of the displayed candidate for the logging rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayKey {
    pub id: String,
    pub name: String,
}

/// Per-Result-entry discovery state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSlot {
    /// The suggestion currently displayed in place of catalog entries.
    pub web_result: Option<DiscoveryResult>,
    /// A discovery call is in flight.
    pub searching: bool,
}

impl ResultSlot {
    pub fn new() -> Self {
        Self::default()
    }
}

/// What should be displayed for the current inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Candidate(Candidate),
    /// A discovery call is in flight.
    Pending,
    /// No local entries remain; the user may switch to discovery.
    Exhausted,
}

impl Selection {
    pub fn candidate(&self) -> Option<&Candidate> {
        match self {
            Selection::Candidate(candidate) => Some(candidate),
            _ => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Selection::Exhausted)
    }
}

/// What a "next" request should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextStep {
    /// Mark the head catalog entry as shown; the following entry becomes current.
    Rotate { shown_id: String },
    /// Ask the discovery provider for a fresh suggestion.
    Discover,
}
