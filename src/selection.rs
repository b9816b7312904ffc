//! Operator selection, keyed by record id.
//!
//! Selection is independent of search and pagination: an id stays selected
//! while the operator navigates away and back. Keeping the set a subset of
//! the store is the engine's job, see `Browser::remove`.

use crate::types::RecordId;
use std::collections::HashSet;

/// Set of selected record ids.
#[derive(Clone, Debug, Default)]
pub struct SelectionSet {
    ids: HashSet<RecordId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, id: &RecordId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Evict one id. Returns whether it was selected.
    pub fn evict(&mut self, id: &RecordId) -> bool {
        self.ids.remove(id)
    }

    /// Keep only ids for which `keep` holds.
    pub fn retain(&mut self, mut keep: impl FnMut(&RecordId) -> bool) {
        self.ids.retain(|id| keep(id));
    }

    pub fn ids(&self) -> &HashSet<RecordId> {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
