//! Secret management service trait.
//!
//! Defines the interface for loading API keys used by the discovery provider.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Root structure of `secret.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini: Option<GeminiConfig>,
}

/// Gemini API credentials.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model_name", &self.model_name)
            .finish()
    }
}

impl SecretConfig {
    /// The Gemini API key, if one is configured and non-empty.
    pub fn gemini_api_key(&self) -> Option<&str> {
        self.gemini
            .as_ref()
            .map(|gemini| gemini.api_key.as_str())
            .filter(|key| !key.trim().is_empty())
    }

    /// Model override from `secret.json`, if one is set and non-empty.
    pub fn gemini_model(&self) -> Option<&str> {
        self.gemini
            .as_ref()
            .and_then(|gemini| gemini.model_name.as_deref())
            .map(str::trim)
            .filter(|model| !model.is_empty())
    }
}

/// Service for loading secret configuration.
///
/// Implementations must never include secret values in errors or logs.
#[async_trait]
pub trait SecretService: Send + Sync {
    /// Loads the secret configuration.
    async fn load_secrets(&self) -> Result<SecretConfig>;

    /// Checks if the secret file exists.
    async fn secret_file_exists(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_api_key() {
        let config = GeminiConfig {
            api_key: "super-secret".to_string(),
            model_name: None,
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
    }

    #[test]
    fn test_blank_key_is_missing() {
        let config: SecretConfig =
            serde_json::from_str(r#"{"gemini":{"api_key":"  "}}"#).unwrap();
        assert!(config.gemini_api_key().is_none());
        assert!(SecretConfig::default().gemini_api_key().is_none());
    }
}
