//! File system and host integrations for MoodShift.

pub mod config_service;
pub mod launcher;
pub mod paths;
pub mod secret_service;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::launcher::CommandLauncher;
pub use crate::paths::MoodshiftPaths;
pub use crate::secret_service::SecretServiceImpl;
pub use crate::storage::{FileBlobStore, InMemoryBlobStore};
