//! Secret service implementation.
//!
//! Reads `secret.json` and caches it. The `GEMINI_API_KEY` environment
//! variable, when set, takes precedence over the file.

use std::path::PathBuf;

use async_trait::async_trait;
use moodshift_core::error::{MoodshiftError, Result};
use moodshift_core::secret::{GeminiConfig, SecretConfig, SecretService};
use tokio::sync::RwLock;

use crate::paths::MoodshiftPaths;

/// Environment variable that overrides the file-based Gemini key.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

pub struct SecretServiceImpl {
    path: PathBuf,
    env_api_key: Option<String>,
    /// Cached secret config, loaded on first access.
    secrets: RwLock<Option<SecretConfig>>,
}

impl SecretServiceImpl {
    /// Creates a service for `paths`, capturing `GEMINI_API_KEY` once.
    pub fn new(paths: &MoodshiftPaths) -> Self {
        let env_api_key = std::env::var(GEMINI_API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());
        Self::with_env_override(paths.secret_file(), env_api_key)
    }

    /// Creates a service with an explicit override instead of reading the
    /// environment.
    pub fn with_env_override(path: impl Into<PathBuf>, env_api_key: Option<String>) -> Self {
        Self {
            path: path.into(),
            env_api_key,
            secrets: RwLock::new(None),
        }
    }

    async fn read_file(&self) -> Result<SecretConfig> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(SecretConfig::default());
            }
            Err(e) => return Err(e.into()),
        };
        // serde_json errors can quote input, so only the position is kept.
        serde_json::from_str(&content).map_err(|e| {
            MoodshiftError::config(format!(
                "Failed to parse {} at line {} column {}",
                self.path.display(),
                e.line(),
                e.column()
            ))
        })
    }

    fn apply_env_override(&self, mut config: SecretConfig) -> SecretConfig {
        if let Some(key) = &self.env_api_key {
            let model_name = config.gemini.take().and_then(|gemini| gemini.model_name);
            config.gemini = Some(GeminiConfig {
                api_key: key.clone(),
                model_name,
            });
        }
        config
    }
}

#[async_trait]
impl SecretService for SecretServiceImpl {
    async fn load_secrets(&self) -> Result<SecretConfig> {
        if let Some(cached) = self.secrets.read().await.as_ref() {
            return Ok(cached.clone());
        }

        let loaded = self.apply_env_override(self.read_file().await?);
        *self.secrets.write().await = Some(loaded.clone());
        Ok(loaded)
    }

    async fn secret_file_exists(&self) -> bool {
        tokio::fs::metadata(&self.path).await.is_ok()
    }
}
