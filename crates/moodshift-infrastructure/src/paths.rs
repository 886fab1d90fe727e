//! Unified path management for MoodShift configuration and data files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/moodshift/         # Home directory (or MOODSHIFT_HOME / --home)
//! ├── config.toml              # Application configuration
//! ├── secret.json              # API keys
//! └── data/                    # Blob store
//!     └── moodshift_v5_stats.json
//! ```

use std::path::{Path, PathBuf};

use moodshift_core::error::{MoodshiftError, Result};
use moodshift_core::secret::{GeminiConfig, SecretConfig};

/// Environment variable that overrides the home directory.
pub const HOME_ENV: &str = "MOODSHIFT_HOME";

const APP_DIR: &str = "moodshift";

/// Resolved locations of every file MoodShift reads or writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodshiftPaths {
    home: PathBuf,
}

impl MoodshiftPaths {
    /// Resolves the home directory.
    ///
    /// Precedence: `base_path`, then `MOODSHIFT_HOME`, then the platform
    /// config directory.
    pub fn new(base_path: Option<&Path>) -> Result<Self> {
        if let Some(base) = base_path {
            return Ok(Self::at(base));
        }
        if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::at(home));
        }
        let config_dir = dirs::config_dir()
            .ok_or_else(|| MoodshiftError::config("Cannot find config directory"))?;
        Ok(Self::at(config_dir.join(APP_DIR)))
    }

    /// Uses `home` as-is.
    pub fn at(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn config_file(&self) -> PathBuf {
        self.home.join("config.toml")
    }

    pub fn secret_file(&self) -> PathBuf {
        self.home.join("secret.json")
    }

    /// Directory backing the file blob store.
    pub fn data_dir(&self) -> PathBuf {
        self.home.join("data")
    }

    /// Ensures the secret file exists, creating a template if it doesn't.
    ///
    /// The file is created with 600 permissions on Unix.
    pub fn ensure_secret_file(&self) -> Result<PathBuf> {
        let secret_path = self.secret_file();
        if secret_path.exists() {
            return Ok(secret_path);
        }

        std::fs::create_dir_all(&self.home)?;

        let template = SecretConfig {
            gemini: Some(GeminiConfig {
                api_key: String::new(),
                model_name: None,
            }),
        };
        let template_json = serde_json::to_string_pretty(&template)?;
        std::fs::write(&secret_path, template_json)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&secret_path, permissions)?;
        }

        tracing::info!(path = %secret_path.display(), "created secret template");
        Ok(secret_path)
    }
}
