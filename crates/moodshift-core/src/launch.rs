//! Launch action seam.

/// Opens a URL on the host (browser, app store). Fire-and-forget: the engine
/// does not wait on or inspect what happens after the hand-off.
pub trait Launcher: Send + Sync {
    fn open(&self, url: &str) -> crate::error::Result<()>;
}
