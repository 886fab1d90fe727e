//! Subcommand implementations and the wiring they share.

pub mod history;
pub mod recommend;
pub mod shell;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use moodshift_application::RecommendationUseCase;
use moodshift_core::catalog::Catalog;
use moodshift_core::clock::SystemClock;
use moodshift_core::config::RootConfig;
use moodshift_core::device::DeviceInfo;
use moodshift_core::discovery::DiscoveryProvider;
use moodshift_core::history::HistoryStore;
use moodshift_core::selection::SelectionEngine;
use moodshift_core::storage::BlobStore;
use moodshift_infrastructure::{
    CommandLauncher, ConfigService, FileBlobStore, InMemoryBlobStore, MoodshiftPaths,
    SecretServiceImpl,
};
use moodshift_interaction::{GeminiDiscoveryAgent, UnconfiguredDiscovery};

/// Everything resolved before logging is initialized.
pub struct Settings {
    pub paths: MoodshiftPaths,
    pub config: RootConfig,
    pub ephemeral: bool,
}

impl Settings {
    pub fn resolve(home: Option<&Path>, ephemeral: bool) -> Result<Self> {
        let paths = MoodshiftPaths::new(home).context("Failed to resolve MoodShift home")?;
        let config = ConfigService::new(&paths).get_config();
        Ok(Self {
            paths,
            config,
            ephemeral,
        })
    }
}

pub struct App {
    pub usecase: RecommendationUseCase,
    pub paths: MoodshiftPaths,
}

impl App {
    pub async fn build(settings: Settings, device: DeviceInfo) -> Result<Self> {
        let Settings {
            paths,
            config,
            ephemeral,
        } = settings;

        let blob_store: Arc<dyn BlobStore> = if ephemeral {
            Arc::new(InMemoryBlobStore::new())
        } else {
            Arc::new(FileBlobStore::new(paths.data_dir()))
        };
        let history = HistoryStore::open(blob_store, config.storage.stats_key.clone()).await;

        if let Err(e) = paths.ensure_secret_file() {
            tracing::warn!("could not create secret template: {}", e);
        }
        let secrets = SecretServiceImpl::new(&paths);
        let discovery: Arc<dyn DiscoveryProvider> =
            match GeminiDiscoveryAgent::try_from_secrets(&secrets, &config.discovery).await {
                Ok(agent) => Arc::new(agent),
                Err(e) => {
                    tracing::warn!("discovery disabled: {}", e);
                    Arc::new(UnconfiguredDiscovery::new(format!(
                        "Worldwide search needs a Gemini API key in {} or GEMINI_API_KEY",
                        paths.secret_file().display()
                    )))
                }
            };

        let usecase = RecommendationUseCase::new(
            SelectionEngine::new(Arc::new(Catalog::builtin())),
            history,
            discovery,
            Arc::new(CommandLauncher::system()),
            Arc::new(SystemClock),
            device,
        );
        Ok(Self { usecase, paths })
    }
}
