//! Static game catalog and tag-based lookup.

mod data;
pub mod model;

use std::collections::{HashMap, HashSet};

use crate::error::{MoodshiftError, Result};
use crate::tags::{Mood, Platform, SessionLength};

pub use model::CatalogEntry;

/// Immutable, in-memory set of candidate entries.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if index.insert(entry.id.clone(), position).is_some() {
                return Err(MoodshiftError::Catalog(format!(
                    "duplicate catalog id '{}'",
                    entry.id
                )));
            }
        }
        Ok(Self { entries, index })
    }

    /// The curated catalog shipped with the application.
    pub fn builtin() -> Self {
        let entries = data::builtin_entries();
        let index = entries
            .iter()
            .enumerate()
            .map(|(position, entry)| (entry.id.clone(), position))
            .collect();
        Self { entries, index }
    }

    /// Returns active entries matching all three tags and not excluded,
    /// in declaration order.
    pub fn lookup(
        &self,
        mood: Mood,
        session_length: SessionLength,
        platform: Platform,
        exclude_ids: &HashSet<String>,
    ) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.matches(mood, session_length, platform))
            .filter(|entry| !exclude_ids.contains(&entry.id))
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.index.get(id).map(|&position| &self.entries[position])
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
