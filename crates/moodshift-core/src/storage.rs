//! Key-value blob storage trait.

use async_trait::async_trait;

use crate::error::Result;

/// Durable storage for opaque string blobs, addressed by key.
///
/// Implementations must make `write` a single replace of the whole blob so
/// readers never observe a half-written value.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Reads the blob stored under `key`, or `None` if nothing is stored.
    async fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the blob stored under `key`.
    async fn write(&self, key: &str, value: &str) -> Result<()>;
}
