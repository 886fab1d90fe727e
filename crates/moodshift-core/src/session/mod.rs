//! Session state machine.
//!
//! ```text
//! MoodSelect --select_mood--> TimeSelect --select_time--> Result
//!     ^                           |                          |
//!     +----------back-------------+<----------back-----------+
//!
//! any step --open_history--> History --back--> MoodSelect
//! ```
//!
//! Every entry into `Result` opens a fresh [`ResultSlot`] and bumps the
//! generation counter. A discovery response carries the generation it was
//! started under and is dropped if the session moved on in the meantime.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::discovery::DiscoveryResult;
use crate::error::{MoodshiftError, Result};
use crate::selection::{ResultSlot, SelectionQuery};
use crate::tags::{Mood, Platform, SessionLength};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum SessionStep {
    MoodSelect,
    TimeSelect,
    Result,
    History,
}

/// Proof that a discovery call was started for a given Result entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    query: SelectionQuery,
}

impl SearchTicket {
    pub fn query(&self) -> &SelectionQuery {
        &self.query
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Transient per-process session. Nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    step: SessionStep,
    selected_mood: Option<Mood>,
    selected_time: Option<SessionLength>,
    shown_ids: HashSet<String>,
    slot: ResultSlot,
    generation: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            step: SessionStep::MoodSelect,
            selected_mood: None,
            selected_time: None,
            shown_ids: HashSet::new(),
            slot: ResultSlot::new(),
            generation: 0,
        }
    }

    pub fn step(&self) -> SessionStep {
        self.step
    }

    pub fn selected_mood(&self) -> Option<Mood> {
        self.selected_mood
    }

    pub fn selected_time(&self) -> Option<SessionLength> {
        self.selected_time
    }

    pub fn shown_ids(&self) -> &HashSet<String> {
        &self.shown_ids
    }

    pub fn slot(&self) -> &ResultSlot {
        &self.slot
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_searching(&self) -> bool {
        self.step == SessionStep::Result && self.slot.searching
    }

    /// Selection inputs, available only on the Result step.
    pub fn query(&self, platform: Platform) -> Option<SelectionQuery> {
        if self.step != SessionStep::Result {
            return None;
        }
        Some(SelectionQuery::new(
            self.selected_mood?,
            self.selected_time?,
            platform,
        ))
    }

    pub fn select_mood(&mut self, mood: Mood) -> Result<()> {
        self.require(SessionStep::MoodSelect, "select a mood")?;
        self.selected_mood = Some(mood);
        self.step = SessionStep::TimeSelect;
        tracing::debug!(%mood, "mood selected");
        Ok(())
    }

    pub fn select_time(&mut self, length: SessionLength) -> Result<()> {
        self.require(SessionStep::TimeSelect, "select a session length")?;
        if self.selected_mood.is_none() {
            return Err(self.invalid("select a session length"));
        }
        self.selected_time = Some(length);
        self.enter(SessionStep::Result);
        tracing::debug!(time = %length, generation = self.generation, "entered result step");
        Ok(())
    }

    /// Steps back one screen and returns the new step. A no-op on MoodSelect.
    pub fn back(&mut self) -> SessionStep {
        let target = match self.step {
            SessionStep::MoodSelect => return self.step,
            SessionStep::TimeSelect => SessionStep::MoodSelect,
            SessionStep::Result => SessionStep::TimeSelect,
            SessionStep::History => SessionStep::MoodSelect,
        };
        self.enter(target);
        tracing::debug!(step = %target, "stepped back");
        target
    }

    pub fn open_history(&mut self) {
        self.enter(SessionStep::History);
    }

    /// Returns to MoodSelect, clearing both selectors and the shown set.
    pub fn reset(&mut self) {
        self.selected_mood = None;
        self.selected_time = None;
        self.shown_ids.clear();
        self.enter(SessionStep::MoodSelect);
        tracing::debug!("session reset");
    }

    /// Adds a catalog id to the shown set so lookups skip it.
    pub fn mark_shown(&mut self, id: impl Into<String>) -> Result<()> {
        self.require(SessionStep::Result, "mark a game as shown")?;
        self.shown_ids.insert(id.into());
        Ok(())
    }

    /// Moves the Result step into its searching sub-state.
    pub fn begin_search(&mut self, platform: Platform) -> Result<SearchTicket> {
        if self.slot.searching {
            return Err(self.invalid("start a second search"));
        }
        let query = self
            .query(platform)
            .ok_or_else(|| self.invalid("start a search"))?;
        self.slot.searching = true;
        Ok(SearchTicket {
            generation: self.generation,
            query,
        })
    }

    /// Installs a discovery result. Returns `false` and leaves the state
    /// untouched when the ticket is stale.
    pub fn finish_search(&mut self, ticket: &SearchTicket, result: DiscoveryResult) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                name = %result.name,
                "discarding stale discovery result"
            );
            return false;
        }
        self.slot.searching = false;
        self.slot.web_result = Some(result);
        true
    }

    /// Leaves the searching sub-state after a failed call. The displayed
    /// candidate stays as it was.
    pub fn fail_search(&mut self, ticket: &SearchTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.slot.searching = false;
        true
    }

    fn is_current(&self, ticket: &SearchTicket) -> bool {
        self.step == SessionStep::Result && ticket.generation == self.generation
    }

    fn enter(&mut self, step: SessionStep) {
        if self.step == SessionStep::Result || step == SessionStep::Result {
            self.generation += 1;
            self.slot = ResultSlot::new();
        }
        self.step = step;
    }

    fn require(&self, expected: SessionStep, action: &'static str) -> Result<()> {
        if self.step == expected {
            Ok(())
        } else {
            Err(self.invalid(action))
        }
    }

    fn invalid(&self, action: &'static str) -> MoodshiftError {
        MoodshiftError::InvalidTransition {
            from: self.step.to_string(),
            action,
        }
    }
}
