//! Atomic whole-file replacement.
//!
//! Writes go to a hidden temporary file in the same directory, are flushed
//! with `sync_all`, and are then renamed over the target. Readers see either
//! the old contents or the new contents, never a partial write.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

/// A handle to a file that is only ever replaced as a whole.
#[derive(Debug, Clone)]
pub struct AtomicFile {
    path: PathBuf,
}

impl AtomicFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file.
    ///
    /// - `Ok(Some(_))`: file exists and has non-blank content
    /// - `Ok(None)`: file doesn't exist or is blank
    pub async fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(None),
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Replaces the file contents atomically.
    pub async fn write(&self, content: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path).await?;
        tmp_file.write_all(content.as_bytes()).await?;
        tmp_file.sync_all().await?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path).await
    }

    fn temp_path(&self) -> io::Result<PathBuf> {
        let parent = self.path.parent().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "Path has no parent directory")
        })?;
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no file name"))?;
        Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_and_blank_read_as_none() {
        let dir = TempDir::new().unwrap();
        let file = AtomicFile::new(dir.path().join("x.json"));
        assert_eq!(file.read().await.unwrap(), None);

        std::fs::write(file.path(), "  \n").unwrap();
        assert_eq!(file.read().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_write_replaces_and_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let file = AtomicFile::new(dir.path().join("sub").join("x.json"));

        file.write("first").await.unwrap();
        file.write("second").await.unwrap();

        assert_eq!(file.read().await.unwrap().as_deref(), Some("second"));
        let names: Vec<String> = std::fs::read_dir(dir.path().join("sub"))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["x.json".to_string()]);
    }
}
