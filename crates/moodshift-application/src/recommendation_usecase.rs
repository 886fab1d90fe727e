//! Recommendation use case.
//!
//! `RecommendationUseCase` owns one session and drives it through the state
//! machine, asks the selection engine what to show, runs the discovery
//! fallback and records every newly displayed candidate in the history store.

use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use moodshift_core::clock::Clock;
use moodshift_core::device::DeviceInfo;
use moodshift_core::discovery::DiscoveryProvider;
use moodshift_core::error::MoodshiftError;
use moodshift_core::history::{self, HistoryRecord, HistoryStore, UserStats};
use moodshift_core::launch::Launcher;
use moodshift_core::selection::{
    Candidate, DisplayKey, NextStep, Selection, SelectionEngine, SelectionQuery,
};
use moodshift_core::session::{SessionState, SessionStep};
use moodshift_core::tags::{Mood, SessionLength};
use serde::Serialize;
use tokio::sync::Mutex;

/// Result of a "next" or "find worldwide hits" request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextOutcome {
    /// The displayed selection after the request completed.
    Shown(Selection),
    /// The provider failed. The previous candidate is still displayed.
    DiscoveryFailed(MoodshiftError),
    /// A discovery call is already in flight for this Result entry.
    AlreadySearching,
    /// The session moved on while the call was in flight; its answer was dropped.
    Discarded,
}

/// Greeting data computed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisitSummary {
    pub is_returning: bool,
    pub weekly_count: usize,
    pub total_count: usize,
}

/// Read-only view of the session for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub step: SessionStep,
    pub selected_mood: Option<Mood>,
    pub selected_time: Option<SessionLength>,
    pub shown_count: usize,
    pub searching: bool,
}

struct UseCaseState {
    session: SessionState,
    /// Candidate last logged as displayed. Cleared whenever Result is left.
    displayed: Option<DisplayKey>,
    /// Stats as they were before this process stamped its own visit.
    previous_stats: Option<UserStats>,
}

pub struct RecommendationUseCase {
    engine: SelectionEngine,
    history: HistoryStore,
    discovery: Arc<dyn DiscoveryProvider>,
    launcher: Arc<dyn Launcher>,
    clock: Arc<dyn Clock>,
    device: DeviceInfo,
    state: Mutex<UseCaseState>,
}

impl RecommendationUseCase {
    pub fn new(
        engine: SelectionEngine,
        history: HistoryStore,
        discovery: Arc<dyn DiscoveryProvider>,
        launcher: Arc<dyn Launcher>,
        clock: Arc<dyn Clock>,
        device: DeviceInfo,
    ) -> Self {
        Self {
            engine,
            history,
            discovery,
            launcher,
            clock,
            device,
            state: Mutex::new(UseCaseState {
                session: SessionState::new(),
                displayed: None,
                previous_stats: None,
            }),
        }
    }

    pub fn device(&self) -> &DeviceInfo {
        &self.device
    }

    /// Stamps this visit and reports the greeting data based on the
    /// previous one.
    pub async fn start(&self) -> Result<VisitSummary> {
        let now = self.clock.now_millis();
        let before = self.history.snapshot().await;
        let previous = match self.history.record_visit(now).await {
            Ok(previous) => previous,
            Err(e) => {
                tracing::warn!("failed to persist visit: {}", e);
                before
            }
        };

        let summary = VisitSummary {
            is_returning: history::is_returning_visitor(&previous, now),
            weekly_count: history::weekly_count(&previous, now),
            total_count: previous.history.len(),
        };
        tracing::info!(
            returning = summary.is_returning,
            weekly = summary.weekly_count,
            platform = %self.device.platform,
            "session started"
        );

        self.state.lock().await.previous_stats = Some(previous);
        Ok(summary)
    }

    pub async fn select_mood(&self, mood: Mood) -> Result<()> {
        let mut state = self.state.lock().await;
        state.session.select_mood(mood)?;
        Ok(())
    }

    /// Enters the Result step and logs the first candidate.
    pub async fn select_time(&self, length: SessionLength) -> Result<Selection> {
        let mut state = self.state.lock().await;
        state.session.select_time(length)?;
        self.refresh(&mut state).await
    }

    /// The displayed selection. Does not log and does not change state.
    pub async fn current(&self) -> Result<Selection> {
        let state = self.state.lock().await;
        self.selection_for(&state.session)
    }

    /// Advances to the next candidate: rotates through local matches while
    /// at least two remain, otherwise asks the discovery provider.
    pub async fn show_next(&self) -> Result<NextOutcome> {
        {
            let mut state = self.state.lock().await;
            if state.session.is_searching() {
                return Ok(NextOutcome::AlreadySearching);
            }
            let query = self.query_for(&state.session)?;
            let step = self
                .engine
                .next_step(&query, state.session.shown_ids(), state.session.slot());
            if let NextStep::Rotate { shown_id } = step {
                state.session.mark_shown(shown_id)?;
                let selection = self.refresh(&mut state).await?;
                return Ok(NextOutcome::Shown(selection));
            }
        }
        self.run_discovery().await
    }

    /// Explicit switch to the discovery fallback, offered once the local
    /// catalog is exhausted.
    pub async fn find_worldwide_hits(&self) -> Result<NextOutcome> {
        self.run_discovery().await
    }

    pub async fn back(&self) -> SessionStep {
        let mut state = self.state.lock().await;
        let step = state.session.back();
        if step != SessionStep::Result {
            state.displayed = None;
        }
        step
    }

    pub async fn open_history(&self) {
        let mut state = self.state.lock().await;
        state.session.open_history();
        state.displayed = None;
    }

    pub async fn reset(&self) {
        let mut state = self.state.lock().await;
        state.session.reset();
        state.displayed = None;
    }

    /// History records, newest first.
    pub async fn history(&self) -> Vec<HistoryRecord> {
        let stats = self.history.snapshot().await;
        history::recent_first(&stats).into_iter().cloned().collect()
    }

    pub async fn weekly_count(&self) -> usize {
        let stats = self.history.snapshot().await;
        history::weekly_count(&stats, self.clock.now_millis())
    }

    /// Whether the visit before this one was within 24 hours.
    ///
    /// Before [`Self::start`] runs this reflects the persisted last visit.
    pub async fn is_returning_visitor(&self) -> bool {
        let previous = self.state.lock().await.previous_stats.clone();
        let stats = match previous {
            Some(stats) => stats,
            None => self.history.snapshot().await,
        };
        history::is_returning_visitor(&stats, self.clock.now_millis())
    }

    /// Opens the displayed candidate and returns the URL handed to the launcher.
    pub async fn launch_current(&self) -> Result<String> {
        let state = self.state.lock().await;
        let selection = self.selection_for(&state.session)?;
        let candidate = selection
            .candidate()
            .ok_or_else(|| anyhow!("No recommendation to launch"))?;
        let url = candidate.launch_url(&self.device).to_string();
        self.launcher
            .open(&url)
            .with_context(|| format!("Failed to launch {}", candidate.name()))?;
        Ok(url)
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.lock().await;
        SessionSnapshot {
            step: state.session.step(),
            selected_mood: state.session.selected_mood(),
            selected_time: state.session.selected_time(),
            shown_count: state.session.shown_ids().len(),
            searching: state.session.is_searching(),
        }
    }

    async fn run_discovery(&self) -> Result<NextOutcome> {
        let ticket = {
            let mut state = self.state.lock().await;
            if state.session.is_searching() {
                return Ok(NextOutcome::AlreadySearching);
            }
            state.session.begin_search(self.device.platform)?
        };

        let query = *ticket.query();
        let outcome = self
            .discovery
            .discover(query.mood, query.length, query.platform)
            .await;

        let mut state = self.state.lock().await;
        match outcome {
            Ok(result) => {
                if !state.session.finish_search(&ticket, result) {
                    return Ok(NextOutcome::Discarded);
                }
                let selection = self.refresh(&mut state).await?;
                Ok(NextOutcome::Shown(selection))
            }
            Err(error) => {
                if !state.session.fail_search(&ticket) {
                    tracing::debug!("discarding stale discovery failure: {}", error);
                    return Ok(NextOutcome::Discarded);
                }
                tracing::warn!("discovery failed: {}", error);
                Ok(NextOutcome::DiscoveryFailed(error))
            }
        }
    }

    /// Computes the displayed selection and logs it if it is a candidate
    /// that was not the one displayed before.
    async fn refresh(&self, state: &mut UseCaseState) -> Result<Selection> {
        let selection = self.selection_for(&state.session)?;
        if let Selection::Candidate(candidate) = &selection {
            let key = candidate.display_key();
            if state.displayed.as_ref() != Some(&key) {
                state.displayed = Some(key);
                self.log_displayed(&state.session, candidate).await;
            }
        }
        Ok(selection)
    }

    async fn log_displayed(&self, session: &SessionState, candidate: &Candidate) {
        let (Some(mood), Some(time)) = (session.selected_mood(), session.selected_time()) else {
            return;
        };
        let now = self.clock.now_millis();
        if let Err(e) = self
            .history
            .log_recommendation(mood, time, candidate.id(), candidate.name(), now)
            .await
        {
            tracing::warn!("failed to persist history record: {}", e);
        }
    }

    fn query_for(&self, session: &SessionState) -> Result<SelectionQuery, MoodshiftError> {
        session
            .query(self.device.platform)
            .ok_or_else(|| MoodshiftError::InvalidTransition {
                from: session.step().to_string(),
                action: "show a recommendation",
            })
    }

    fn selection_for(&self, session: &SessionState) -> Result<Selection> {
        let query = self.query_for(session)?;
        Ok(self
            .engine
            .current(&query, session.shown_ids(), session.slot()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use moodshift_core::catalog::{Catalog, CatalogEntry};
    use moodshift_core::discovery::DiscoveryResult;
    use moodshift_core::storage::BlobStore;
    use moodshift_core::tags::{GameType, Platform};
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex as StdMutex;
    use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
    use tokio::sync::Notify;

    const NOW: i64 = 1_760_000_000_000;
    const STATS_KEY: &str = "moodshift_v5_stats";

    #[derive(Default)]
    struct MemoryBlobs {
        blobs: StdMutex<HashMap<String, String>>,
        fail_writes: bool,
    }

    #[async_trait]
    impl BlobStore for MemoryBlobs {
        async fn read(&self, key: &str) -> moodshift_core::Result<Option<String>> {
            Ok(self.blobs.lock().unwrap().get(key).cloned())
        }

        async fn write(&self, key: &str, value: &str) -> moodshift_core::Result<()> {
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

    #[derive(Default)]
    struct MockDiscovery {
        results: StdMutex<VecDeque<moodshift_core::Result<DiscoveryResult>>>,
        calls: AtomicUsize,
        gate: Option<Arc<Notify>>,
    }

    impl MockDiscovery {
        fn returning(results: Vec<moodshift_core::Result<DiscoveryResult>>) -> Self {
            Self {
                results: StdMutex::new(results.into()),
                ..Default::default()
            }
        }

        fn gated(results: Vec<moodshift_core::Result<DiscoveryResult>>, gate: Arc<Notify>) -> Self {
            Self {
                gate: Some(gate),
                ..Self::returning(results)
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DiscoveryProvider for MockDiscovery {
        async fn discover(
            &self,
            _mood: Mood,
            _length: SessionLength,
            _platform: Platform,
        ) -> moodshift_core::Result<DiscoveryResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(found("Fallback Hit")))
        }
    }

    #[derive(Default)]
    struct MockLauncher {
        opened: StdMutex<Vec<String>>,
    }

    impl Launcher for MockLauncher {
        fn open(&self, url: &str) -> moodshift_core::Result<()> {
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    struct MockClock(AtomicI64);

    impl MockClock {
        fn advance(&self, millis: i64) {
            self.0.fetch_add(millis, Ordering::SeqCst);
        }
    }

    impl Clock for MockClock {
        fn now_millis(&self) -> i64 {
            self.0.load(Ordering::SeqCst)
        }
    }

    fn found(name: &str) -> DiscoveryResult {
        DiscoveryResult {
            name: name.to_string(),
            description: format!("{name} is great"),
            url: format!("https://example.com/{}", name.replace(' ', "-")),
            sources: vec![],
            id: None,
        }
    }

    fn minecraft_only() -> Catalog {
        Catalog::new(vec![CatalogEntry {
            id: "m-f1".to_string(),
            name: "Minecraft".to_string(),
            game_type: GameType::Suggested,
            mood_tag: Mood::Relaxed,
            session_length: SessionLength::Long,
            platform: Platform::Mobile,
            primary_url: "https://play.google.com/store/apps/details?id=com.mojang.minecraftpe"
                .to_string(),
            alternate_url: Some("https://apps.apple.com/app/minecraft/id479516143".to_string()),
            active: true,
            description: "Build anything.".to_string(),
        }])
        .unwrap()
    }

    struct Harness {
        usecase: Arc<RecommendationUseCase>,
        discovery: Arc<MockDiscovery>,
        launcher: Arc<MockLauncher>,
        clock: Arc<MockClock>,
    }

    async fn harness_with(
        catalog: Catalog,
        discovery: MockDiscovery,
        blobs: MemoryBlobs,
        device: DeviceInfo,
    ) -> Harness {
        let discovery = Arc::new(discovery);
        let launcher = Arc::new(MockLauncher::default());
        let clock = Arc::new(MockClock(AtomicI64::new(NOW)));
        let history = HistoryStore::open(Arc::new(blobs), STATS_KEY).await;
        let usecase = RecommendationUseCase::new(
            SelectionEngine::new(Arc::new(catalog)),
            history,
            discovery.clone(),
            launcher.clone(),
            clock.clone(),
            device,
        );
        Harness {
            usecase: Arc::new(usecase),
            discovery,
            launcher,
            clock,
        }
    }

    async fn harness(catalog: Catalog, discovery: MockDiscovery) -> Harness {
        harness_with(
            catalog,
            discovery,
            MemoryBlobs::default(),
            DeviceInfo::mobile(false),
        )
        .await
    }

    fn shown_name(outcome: &NextOutcome) -> Option<&str> {
        match outcome {
            NextOutcome::Shown(selection) => selection.candidate().map(|c| c.name()),
            _ => None,
        }
    }

    fn logged(records: &[HistoryRecord]) -> Vec<(&str, &str)> {
        records
            .iter()
            .rev()
            .map(|r| (r.recommended_game_id.as_str(), r.recommended_game_name.as_str()))
            .collect()
    }

    #[tokio::test]
    async fn test_single_entry_then_discovery() {
        let h = harness(
            minecraft_only(),
            MockDiscovery::returning(vec![Ok(found("Animal Crossing"))]),
        )
        .await;
        let uc = &h.usecase;

        uc.select_mood(Mood::Relaxed).await.unwrap();
        let first = uc.select_time(SessionLength::Long).await.unwrap();
        assert_eq!(first.candidate().map(|c| c.id()), Some("m-f1"));

        h.clock.advance(1_000);
        let next = uc.show_next().await.unwrap();
        assert_eq!(shown_name(&next), Some("Animal Crossing"));
        assert_eq!(h.discovery.calls(), 1);

        let history = uc.history().await;
        assert_eq!(
            logged(&history),
            vec![("m-f1", "Minecraft"), ("ai_discovery", "Animal Crossing")]
        );
        assert!(history.iter().all(|r| r.mood == Mood::Relaxed));
        assert!(history.iter().all(|r| r.time_selected == SessionLength::Long));
    }

    #[tokio::test]
    async fn test_rotation_through_builtin_catalog() {
        let h = harness(Catalog::builtin(), MockDiscovery::default()).await;
        let uc = &h.usecase;

        uc.select_mood(Mood::Relaxed).await.unwrap();
        uc.select_time(SessionLength::Long).await.unwrap();
        assert_eq!(shown_name(&uc.show_next().await.unwrap()), Some("Stardew Valley"));
        assert_eq!(shown_name(&uc.show_next().await.unwrap()), Some("Genshin Impact"));
        assert_eq!(h.discovery.calls(), 0);

        assert_eq!(shown_name(&uc.show_next().await.unwrap()), Some("Fallback Hit"));
        assert_eq!(h.discovery.calls(), 1);
        assert_eq!(uc.snapshot().await.shown_count, 2);
        assert_eq!(uc.history().await.len(), 4);
    }

    #[tokio::test]
    async fn test_current_is_idempotent_and_does_not_log() {
        let h = harness(Catalog::builtin(), MockDiscovery::default()).await;
        let uc = &h.usecase;

        uc.select_mood(Mood::Bored).await.unwrap();
        let shown = uc.select_time(SessionLength::Short).await.unwrap();
        assert_eq!(uc.current().await.unwrap(), shown);
        assert_eq!(uc.current().await.unwrap(), shown);
        assert_eq!(uc.history().await.len(), 1);
    }

    #[tokio::test]
    async fn test_reselecting_within_debounce_window_logs_once() {
        let h = harness(minecraft_only(), MockDiscovery::default()).await;
        let uc = &h.usecase;

        uc.select_mood(Mood::Relaxed).await.unwrap();
        uc.select_time(SessionLength::Long).await.unwrap();
        uc.back().await;
        h.clock.advance(2_000);
        uc.select_time(SessionLength::Long).await.unwrap();
        assert_eq!(uc.history().await.len(), 1);

        uc.back().await;
        h.clock.advance(5_000);
        uc.select_time(SessionLength::Long).await.unwrap();
        assert_eq!(uc.history().await.len(), 2);
    }

    #[tokio::test]
    async fn test_failed_discovery_keeps_candidate() {
        let h = harness(
            minecraft_only(),
            MockDiscovery::returning(vec![Err(MoodshiftError::discovery_unavailable(
                "quota", true,
            ))]),
        )
        .await;
        let uc = &h.usecase;

        uc.select_mood(Mood::Relaxed).await.unwrap();
        uc.select_time(SessionLength::Long).await.unwrap();
        let outcome = uc.show_next().await.unwrap();
        assert!(matches!(
            outcome,
            NextOutcome::DiscoveryFailed(MoodshiftError::DiscoveryUnavailable { .. })
        ));

        let current = uc.current().await.unwrap();
        assert_eq!(current.candidate().map(|c| c.name()), Some("Minecraft"));
        assert!(!uc.snapshot().await.searching);
        assert_eq!(uc.history().await.len(), 1);

        // retry succeeds
        let retry = uc.show_next().await.unwrap();
        assert_eq!(shown_name(&retry), Some("Fallback Hit"));
    }

    #[tokio::test]
    async fn test_second_next_while_searching_is_rejected() {
        let gate = Arc::new(Notify::new());
        let h = harness(
            minecraft_only(),
            MockDiscovery::gated(vec![Ok(found("Hades"))], gate.clone()),
        )
        .await;
        h.usecase.select_mood(Mood::Relaxed).await.unwrap();
        h.usecase.select_time(SessionLength::Long).await.unwrap();

        let in_flight = tokio::spawn({
            let uc = h.usecase.clone();
            async move { uc.show_next().await }
        });
        while h.discovery.calls() == 0 {
            tokio::task::yield_now().await;
        }

        assert!(h.usecase.snapshot().await.searching);
        assert_eq!(h.usecase.current().await.unwrap(), Selection::Pending);
        assert_eq!(
            h.usecase.show_next().await.unwrap(),
            NextOutcome::AlreadySearching
        );
        assert_eq!(
            h.usecase.find_worldwide_hits().await.unwrap(),
            NextOutcome::AlreadySearching
        );

        gate.notify_one();
        let outcome = in_flight.await.unwrap().unwrap();
        assert_eq!(shown_name(&outcome), Some("Hades"));
        assert_eq!(h.discovery.calls(), 1);
    }

    #[tokio::test]
    async fn test_response_after_navigation_is_discarded() {
        let gate = Arc::new(Notify::new());
        let h = harness(
            minecraft_only(),
            MockDiscovery::gated(vec![Ok(found("Too Late"))], gate.clone()),
        )
        .await;
        h.usecase.select_mood(Mood::Relaxed).await.unwrap();
        h.usecase.select_time(SessionLength::Long).await.unwrap();

        let in_flight = tokio::spawn({
            let uc = h.usecase.clone();
            async move { uc.show_next().await }
        });
        while h.discovery.calls() == 0 {
            tokio::task::yield_now().await;
        }

        assert_eq!(h.usecase.back().await, SessionStep::TimeSelect);
        gate.notify_one();

        assert_eq!(in_flight.await.unwrap().unwrap(), NextOutcome::Discarded);
        let snapshot = h.usecase.snapshot().await;
        assert_eq!(snapshot.step, SessionStep::TimeSelect);
        assert!(!snapshot.searching);
        assert!(
            h.usecase
                .history()
                .await
                .iter()
                .all(|r| r.recommended_game_name != "Too Late")
        );
    }

    #[tokio::test]
    async fn test_exhausted_then_explicit_discovery() {
        let h = harness(Catalog::builtin(), MockDiscovery::default()).await;
        let uc = &h.usecase;

        // no built-in entry is tagged Stressed + Long + Mobile
        uc.select_mood(Mood::Stressed).await.unwrap();
        let selection = uc.select_time(SessionLength::Long).await.unwrap();
        assert!(selection.is_exhausted());
        assert!(uc.history().await.is_empty());

        let outcome = uc.find_worldwide_hits().await.unwrap();
        assert_eq!(shown_name(&outcome), Some("Fallback Hit"));
        assert_eq!(uc.history().await.len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_transitions_are_errors() {
        let h = harness(Catalog::builtin(), MockDiscovery::default()).await;
        let uc = &h.usecase;

        let err = uc.select_time(SessionLength::Short).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MoodshiftError>(),
            Some(MoodshiftError::InvalidTransition { .. })
        ));
        assert!(uc.current().await.is_err());
        assert!(uc.show_next().await.is_err());
        assert_eq!(uc.snapshot().await.step, SessionStep::MoodSelect);
    }

    #[tokio::test]
    async fn test_reset_clears_session() {
        let h = harness(Catalog::builtin(), MockDiscovery::default()).await;
        let uc = &h.usecase;

        uc.select_mood(Mood::Relaxed).await.unwrap();
        uc.select_time(SessionLength::Long).await.unwrap();
        uc.show_next().await.unwrap();
        uc.reset().await;

        let snapshot = uc.snapshot().await;
        assert_eq!(snapshot.step, SessionStep::MoodSelect);
        assert_eq!(snapshot.selected_mood, None);
        assert_eq!(snapshot.shown_count, 0);
    }

    #[tokio::test]
    async fn test_history_step_and_back() {
        let h = harness(Catalog::builtin(), MockDiscovery::default()).await;
        let uc = &h.usecase;

        uc.select_mood(Mood::Tired).await.unwrap();
        uc.open_history().await;
        assert_eq!(uc.snapshot().await.step, SessionStep::History);
        assert_eq!(uc.back().await, SessionStep::MoodSelect);
    }

    #[tokio::test]
    async fn test_start_reports_previous_visit() {
        let blobs = MemoryBlobs::default();
        let stored = format!(
            r#"{{"history":[{{"id":"a","userId":"local_user","mood":"Bored","timeSelected":"Short","recommendedGameId":"w-f7","recommendedGameName":"Tetr.io","timestamp":{}}}],"lastVisit":{}}}"#,
            NOW - 86_400_000,
            NOW - 3_600_000
        );
        blobs
            .blobs
            .lock()
            .unwrap()
            .insert(STATS_KEY.to_string(), stored);

        let h = harness_with(
            Catalog::builtin(),
            MockDiscovery::default(),
            blobs,
            DeviceInfo::web(),
        )
        .await;
        let summary = h.usecase.start().await.unwrap();
        assert_eq!(
            summary,
            VisitSummary {
                is_returning: true,
                weekly_count: 1,
                total_count: 1
            }
        );
        assert!(h.usecase.is_returning_visitor().await);
        assert_eq!(h.usecase.weekly_count().await, 1);
    }

    #[tokio::test]
    async fn test_first_visit_is_not_returning() {
        let h = harness(Catalog::builtin(), MockDiscovery::default()).await;
        let summary = h.usecase.start().await.unwrap();
        assert!(!summary.is_returning);

        // the stamp from this start does not count as a previous visit
        assert!(!h.usecase.is_returning_visitor().await);
    }

    #[tokio::test]
    async fn test_history_write_failure_is_not_fatal() {
        let blobs = MemoryBlobs {
            fail_writes: true,
            ..Default::default()
        };
        let h = harness_with(
            minecraft_only(),
            MockDiscovery::default(),
            blobs,
            DeviceInfo::mobile(false),
        )
        .await;
        h.usecase.select_mood(Mood::Relaxed).await.unwrap();
        let selection = h.usecase.select_time(SessionLength::Long).await.unwrap();
        assert_eq!(selection.candidate().map(|c| c.name()), Some("Minecraft"));
        assert!(h.usecase.history().await.is_empty());
    }

    #[tokio::test]
    async fn test_visit_write_failure_is_not_fatal() {
        let blobs = MemoryBlobs {
            fail_writes: true,
            ..Default::default()
        };
        let h = harness_with(
            minecraft_only(),
            MockDiscovery::default(),
            blobs,
            DeviceInfo::mobile(false),
        )
        .await;
        let summary = h.usecase.start().await.unwrap();
        assert!(!summary.is_returning);
        assert_eq!(summary.total_count, 0);

        h.usecase.select_mood(Mood::Relaxed).await.unwrap();
        let selection = h.usecase.select_time(SessionLength::Long).await.unwrap();
        assert_eq!(selection.candidate().map(|c| c.name()), Some("Minecraft"));
    }

    #[tokio::test]
    async fn test_launch_prefers_app_store_on_ios() {
        let h = harness_with(
            minecraft_only(),
            MockDiscovery::default(),
            MemoryBlobs::default(),
            DeviceInfo::mobile(true),
        )
        .await;
        assert!(h.usecase.launch_current().await.is_err());

        h.usecase.select_mood(Mood::Relaxed).await.unwrap();
        h.usecase.select_time(SessionLength::Long).await.unwrap();
        let url = h.usecase.launch_current().await.unwrap();
        assert!(url.starts_with("https://apps.apple.com/"));
        assert_eq!(*h.launcher.opened.lock().unwrap(), vec![url]);
    }
}
