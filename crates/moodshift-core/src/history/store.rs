//! History store: the load/append/save cycle over a blob store.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::Result;
use crate::storage::BlobStore;
use crate::tags::{Mood, SessionLength};

use super::model::{HistoryRecord, UserStats};

/// Blob key used when no other key is configured.
pub const DEFAULT_STATS_KEY: &str = "moodshift_v5_stats";

/// Owns the persisted [`UserStats`] for one process.
///
/// The in-memory copy is the source of truth between writes. Every mutation
/// holds the lock across its save, so two appends from the same process can
/// never interleave and lose a record.
pub struct HistoryStore {
    blob_store: Arc<dyn BlobStore>,
    key: String,
    stats: Mutex<UserStats>,
}

impl HistoryStore {
    /// Opens the store and loads the current stats.
    pub async fn open(blob_store: Arc<dyn BlobStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let stats = load_from(blob_store.as_ref(), &key).await;
        Self {
            blob_store,
            key,
            stats: Mutex::new(stats),
        }
    }

    /// Reads the persisted blob, substituting empty stats when it is missing,
    /// unreadable or malformed.
    pub async fn load(&self) -> UserStats {
        load_from(self.blob_store.as_ref(), &self.key).await
    }

    /// Overwrites the persisted blob with `stats` in a single write.
    pub async fn save(&self, stats: &UserStats) -> Result<()> {
        let blob = super::encode_stats(stats)?;
        self.blob_store.write(&self.key, &blob).await
    }

    /// Copy of the in-memory stats.
    pub async fn snapshot(&self) -> UserStats {
        self.stats.lock().await.clone()
    }

    /// Stamps `last_visit = now` and persists it.
    ///
    /// Returns the stats as they were before the stamp, so the caller can
    /// still tell whether this visit is a return within 24 hours. The
    /// in-memory stamp is kept even when the save fails.
    pub async fn record_visit(&self, now: i64) -> Result<UserStats> {
        let mut stats = self.stats.lock().await;
        let previous = stats.clone();

        stats.last_visit = Some(now);
        self.save(&stats).await?;

        tracing::debug!(previous_visit = ?previous.last_visit, "recorded visit");
        Ok(previous)
    }

    /// Appends a history record for a served recommendation.
    ///
    /// Returns `None` when the debounce rule suppressed the record.
    pub async fn log_recommendation(
        &self,
        mood: Mood,
        time_selected: SessionLength,
        game_id: &str,
        game_name: &str,
        now: i64,
    ) -> Result<Option<HistoryRecord>> {
        let mut stats = self.stats.lock().await;
        if !super::should_record(&stats, game_id, now) {
            tracing::debug!(game_id, "skipped duplicate history record");
            return Ok(None);
        }

        let record = HistoryRecord::new(mood, time_selected, game_id, game_name, now);
        let updated = super::append(&stats, record.clone());
        self.save(&updated).await?;
        *stats = updated;

        tracing::info!(game_id, game_name, %mood, time = %time_selected, "logged recommendation");
        Ok(Some(record))
    }
}

async fn load_from(blob_store: &dyn BlobStore, key: &str) -> UserStats {
    let blob = match blob_store.read(key).await {
        Ok(Some(blob)) => blob,
        Ok(None) => return UserStats::default(),
        Err(e) => {
            tracing::warn!("failed to read stats blob '{}': {}", key, e);
            return UserStats::default();
        }
    };

    match super::decode_stats(&blob) {
        Ok(stats) => stats,
        Err(e) => {
            tracing::warn!("discarding stats blob '{}': {}", key, e);
            UserStats::default()
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::MoodshiftError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex as StdMutex;

    /// In-memory blob store that counts writes.
    #[derive(Default)]
    pub(crate) struct MockBlobStore {
        pub(crate) blobs: StdMutex<HashMap<String, String>>,
        pub(crate) writes: StdMutex<usize>,
        pub(crate) fail_reads: bool,
        pub(crate) fail_writes: bool,
    }

    impl MockBlobStore {
        pub(crate) fn with_blob(key: &str, blob: &str) -> Self {
            let store = Self::default();
            store
                .blobs
                .lock()
                .unwrap()
                .insert(key.to_string(), blob.to_string());
            store
        }

        pub(crate) fn blob(&self, key: &str) -> Option<String> {
            self.blobs.lock().unwrap().get(key).cloned()
        }
    }

    #[async_trait]
    impl BlobStore for MockBlobStore {
        async fn read(&self, key: &str) -> Result<Option<String>> {
            if self.fail_reads {
                return Err(MoodshiftError::io("disk on fire"));
            }
            Ok(self.blobs.lock().unwrap().get(key).cloned())
        }

        async fn write(&self, key: &str, value: &str) -> Result<()> {
            *self.writes.lock().unwrap() += 1;
            if self.fail_writes {
                return Err(MoodshiftError::io("read-only"));
            }
            self.blobs
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    const NOW: i64 = 1_760_000_000_000;

    #[tokio::test]
    async fn test_load_missing_blob_is_empty() {
        let store = HistoryStore::open(Arc::new(MockBlobStore::default()), DEFAULT_STATS_KEY).await;
        assert_eq!(store.load().await, UserStats::default());
    }

    #[tokio::test]
    async fn test_load_non_json_is_empty() {
        let blobs = Arc::new(MockBlobStore::with_blob(DEFAULT_STATS_KEY, "{{{ definitely not json"));
        let store = HistoryStore::open(blobs, DEFAULT_STATS_KEY).await;
        let stats = store.load().await;
        assert!(stats.history.is_empty());
        assert!(stats.last_visit.is_none());
    }

    #[tokio::test]
    async fn test_record_visit_keeps_stamp_when_save_fails() {
        let blobs = Arc::new(MockBlobStore {
            fail_writes: true,
            ..Default::default()
        });
        let store = HistoryStore::open(blobs.clone(), DEFAULT_STATS_KEY).await;
        assert!(store.record_visit(NOW).await.is_err());
        assert_eq!(store.snapshot().await.last_visit, Some(NOW));
        assert!(blobs.blob(DEFAULT_STATS_KEY).is_none());
    }

    #[tokio::test]
    async fn test_load_read_failure_is_empty() {
        let blobs = Arc::new(MockBlobStore {
            fail_reads: true,
            ..Default::default()
        });
        let store = HistoryStore::open(blobs, DEFAULT_STATS_KEY).await;
        assert_eq!(store.snapshot().await, UserStats::default());
    }

    #[tokio::test]
    async fn test_save_of_load_is_noop_on_blob() {
        let blob = r#"{"history":[{"id":"a1","userId":"local_user","mood":"Bored","timeSelected":"Short","recommendedGameId":"w-f7","recommendedGameName":"Tetr.io","timestamp":1760000000000}],"lastVisit":null}"#;
        let blobs = Arc::new(MockBlobStore::with_blob(DEFAULT_STATS_KEY, blob));
        let store = HistoryStore::open(blobs.clone(), DEFAULT_STATS_KEY).await;

        let loaded = store.load().await;
        store.save(&loaded).await.unwrap();
        assert_eq!(blobs.blob(DEFAULT_STATS_KEY).as_deref(), Some(blob));
    }

    #[tokio::test]
    async fn test_record_visit_returns_previous_and_persists() {
        let blobs = Arc::new(MockBlobStore::with_blob(
            DEFAULT_STATS_KEY,
            r#"{"history":[],"lastVisit":1759990000000}"#,
        ));
        let store = HistoryStore::open(blobs.clone(), DEFAULT_STATS_KEY).await;

        let previous = store.record_visit(NOW).await.unwrap();
        assert_eq!(previous.last_visit, Some(1_759_990_000_000));
        assert_eq!(store.snapshot().await.last_visit, Some(NOW));
        assert_eq!(store.load().await.last_visit, Some(NOW));
    }

    #[tokio::test]
    async fn test_log_recommendation_debounces() {
        let blobs = Arc::new(MockBlobStore::default());
        let store = HistoryStore::open(blobs.clone(), DEFAULT_STATS_KEY).await;

        let first = store
            .log_recommendation(Mood::Relaxed, SessionLength::Long, "m-f1", "Minecraft", NOW)
            .await
            .unwrap();
        let second = store
            .log_recommendation(
                Mood::Relaxed,
                SessionLength::Long,
                "m-f1",
                "Minecraft",
                NOW + 2_000,
            )
            .await
            .unwrap();

        assert!(first.is_some());
        assert!(second.is_none());
        assert_eq!(store.snapshot().await.history.len(), 1);
        assert_eq!(*blobs.writes.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_log_recommendation_persists_each_append() {
        let blobs = Arc::new(MockBlobStore::default());
        let store = HistoryStore::open(blobs.clone(), DEFAULT_STATS_KEY).await;

        store
            .log_recommendation(Mood::Tired, SessionLength::Short, "w-f3", "Wordle", NOW)
            .await
            .unwrap();
        store
            .log_recommendation(Mood::Tired, SessionLength::Short, "ai_discovery", "Tetris", NOW + 1)
            .await
            .unwrap();

        let persisted = store.load().await;
        assert_eq!(persisted.history.len(), 2);
        assert_eq!(persisted.history[1].recommended_game_name, "Tetris");
        assert_eq!(persisted.history[0].mood, Mood::Tired);
    }
}
