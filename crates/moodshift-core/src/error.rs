//! Error types for MoodShift.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire MoodShift workspace.
///
/// Nothing in the recommendation core is fatal: persistence corruption and
/// discovery failures are recovered by the caller, so most variants exist to
/// carry diagnostics into the logs rather than to abort a session.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum MoodshiftError {
    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON"
        message: String,
    },

    /// The persisted stats blob could not be decoded.
    #[error("Persisted state is corrupt: {0}")]
    PersistenceCorrupt(String),

    /// The discovery provider could not produce a candidate.
    #[error("Discovery unavailable: {message}")]
    DiscoveryUnavailable {
        message: String,
        status_code: Option<u16>,
        is_retryable: bool,
    },

    /// A session action was attempted from a step that does not allow it.
    #[error("Invalid transition: cannot {action} from {from}")]
    InvalidTransition { from: String, action: &'static str },

    /// Catalog construction error
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MoodshiftError {
    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Creates a DiscoveryUnavailable error without an HTTP status.
    pub fn discovery_unavailable(message: impl Into<String>, is_retryable: bool) -> Self {
        Self::DiscoveryUnavailable {
            message: message.into(),
            status_code: None,
            is_retryable,
        }
    }

    /// Check if this is a discovery failure
    pub fn is_discovery_unavailable(&self) -> bool {
        matches!(self, Self::DiscoveryUnavailable { .. })
    }

    /// Check if retrying the same call may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::DiscoveryUnavailable { is_retryable, .. } => *is_retryable,
            Self::Io { .. } => true,
            _ => false,
        }
    }
}

impl From<std::io::Error> for MoodshiftError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for MoodshiftError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, MoodshiftError>`.
pub type Result<T> = std::result::Result<T, MoodshiftError>;
