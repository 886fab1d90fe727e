//! Selection engine: turns (mood, length, platform) plus the shown set into
//! a non-repeating stream of candidates.

pub mod model;

use std::collections::HashSet;
use std::sync::Arc;

use crate::catalog::{Catalog, CatalogEntry};

pub use model::{Candidate, DisplayKey, NextStep, ResultSlot, Selection, SelectionQuery};

/// Stateless view over the catalog. All session state is passed in.
#[derive(Debug, Clone)]
pub struct SelectionEngine {
    catalog: Arc<Catalog>,
}

impl SelectionEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Catalog entries still available for `query`, in declaration order.
    pub fn local_matches(
        &self,
        query: &SelectionQuery,
        shown_ids: &HashSet<String>,
    ) -> Vec<&CatalogEntry> {
        self.catalog
            .lookup(query.mood, query.length, query.platform, shown_ids)
    }

    /// The candidate to display. Calling this twice with the same inputs
    /// returns the same answer.
    pub fn current(
        &self,
        query: &SelectionQuery,
        shown_ids: &HashSet<String>,
        slot: &ResultSlot,
    ) -> Selection {
        if slot.searching {
            return Selection::Pending;
        }
        if let Some(result) = &slot.web_result {
            return Selection::Candidate(Candidate::Discovered(result.clone()));
        }
        match self.local_matches(query, shown_ids).first() {
            Some(entry) => Selection::Candidate(Candidate::Local((*entry).clone())),
            None => Selection::Exhausted,
        }
    }

    /// Decides how a "next" request advances the stream.
    ///
    /// Rotation only happens while at least two local entries remain and no
    /// discovered suggestion is showing; everything else asks the provider.
    pub fn next_step(
        &self,
        query: &SelectionQuery,
        shown_ids: &HashSet<String>,
        slot: &ResultSlot,
    ) -> NextStep {
        let matches = self.local_matches(query, shown_ids);
        if matches.len() > 1 && slot.web_result.is_none() {
            let head = matches[0];
            tracing::debug!(shown_id = %head.id, remaining = matches.len() - 1, "rotating local match");
            NextStep::Rotate {
                shown_id: head.id.clone(),
            }
        } else {
            tracing::debug!(local = matches.len(), "switching to discovery");
            NextStep::Discover
        }
    }
}
