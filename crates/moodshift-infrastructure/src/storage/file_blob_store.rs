//! File-backed blob store: one `<key>.json` file per key.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use moodshift_core::error::{MoodshiftError, Result};
use moodshift_core::storage::BlobStore;

use super::atomic_file::AtomicFile;

/// Stores each blob as `<dir>/<key>.json`, replaced atomically on write.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_for(&self, key: &str) -> Result<AtomicFile> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
            && !key.starts_with('.');
        if !valid {
            return Err(MoodshiftError::config(format!("invalid blob key '{key}'")));
        }
        Ok(AtomicFile::new(self.dir.join(format!("{key}.json"))))
    }
}

#[async_trait]
impl BlobStore for FileBlobStore {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        let file = self.file_for(key)?;
        Ok(file.read().await?)
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        let file = self.file_for(key)?;
        file.write(value).await?;
        tracing::debug!(path = %file.path().display(), bytes = value.len(), "wrote blob");
        Ok(())
    }
}
