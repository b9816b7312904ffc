//! Main Browser struct tying all components together.

use crate::config::BrowserConfig;
use crate::edit::EditSession;
use crate::error::Result;
use crate::records::RecordStore;
use crate::selection::SelectionSet;
use crate::source::{FetchHandle, RecordSource};
use crate::subscriptions::{
    BrowserEvent, SubscriptionConfig, SubscriptionHandle, SubscriptionId, SubscriptionManager,
};
use crate::types::{BrowserStats, Field, Record, RecordFields, RecordId};
use crate::view::{self, PageRequest, Pagination};
use std::collections::HashSet;
use tracing::{debug, error, info};

/// One row of the current page, as a renderer draws it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowView<'a> {
    pub record: &'a Record,
    pub selected: bool,
    /// The draft, when this row is under edit.
    pub draft: Option<&'a RecordFields>,
}

impl RowView<'_> {
    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }
}

/// The record management engine.
///
/// Owns the record store and the cross-cutting state keyed by record id:
/// - Selection set
/// - Edit session
/// - Search term and current page
///
/// Every method runs one operator action to completion. Deletes carry
/// their side effects on selection and the edit session with them, so the
/// selection never names a missing record and an open edit always targets
/// a live one.
pub struct Browser {
    config: BrowserConfig,
    store: RecordStore,
    selection: SelectionSet,
    edit: EditSession,
    search_term: String,
    pagination: Pagination,
    subscriptions: SubscriptionManager,
}

impl Browser {
    /// Create an empty browser.
    pub fn new(config: BrowserConfig) -> Result<Self> {
        config.validate()?;
        let pagination = Pagination::new(config.rows_per_page);

        Ok(Self {
            config,
            store: RecordStore::new(),
            selection: SelectionSet::new(),
            edit: EditSession::default(),
            search_term: String::new(),
            pagination,
            subscriptions: SubscriptionManager::new(),
        })
    }

    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    // --- Loading ---

    /// Replace the store contents with `records`.
    ///
    /// Search term and page are kept. Selected ids and an open edit that no
    /// longer exist in the new data are dropped; everything else survives.
    pub fn load(&mut self, records: Vec<Record>) -> usize {
        let count = self.store.load(records);

        let before = self.selection.len();
        let store = &self.store;
        self.selection.retain(|id| store.contains(id));
        let selection_changed = self.selection.len() != before;

        let stale_edit = self
            .edit
            .editing_id()
            .is_some_and(|id| !self.store.contains(id));
        let cancelled = if stale_edit { self.edit.close() } else { None };

        info!(count, "loaded records");
        self.subscriptions.broadcast(BrowserEvent::Loaded { count });
        if selection_changed {
            self.broadcast_selection();
        }
        if let Some(draft) = cancelled {
            self.subscriptions.broadcast(BrowserEvent::EditClosed {
                id: draft.id,
                saved: false,
            });
        }
        count
    }

    /// Fetch from `source` and load the result.
    ///
    /// Failures are logged and leave the store untouched (empty at
    /// startup). Returns the number of records loaded.
    pub fn load_from(&mut self, source: &impl RecordSource) -> usize {
        let outcome = source.fetch();
        self.apply_fetch_outcome(outcome)
    }

    /// Apply a background fetch if it has finished. Returns true once the
    /// outcome, success or failure, has been applied.
    pub fn apply_fetch(&mut self, handle: &mut FetchHandle) -> bool {
        match handle.try_take() {
            Some(outcome) => {
                self.apply_fetch_outcome(outcome);
                true
            }
            None => false,
        }
    }

    fn apply_fetch_outcome(&mut self, outcome: Result<Vec<Record>>) -> usize {
        match outcome {
            Ok(records) => self.load(records),
            Err(e) => {
                error!(error = %e, "error fetching records");
                self.subscriptions.broadcast(BrowserEvent::LoadFailed {
                    reason: e.to_string(),
                });
                0
            }
        }
    }

    // --- Record Operations ---

    /// Replace the editable fields of a record. No-op for unknown ids.
    pub fn update(&mut self, id: &RecordId, fields: RecordFields) -> Option<Record> {
        let Some(updated) = self.store.update(id, fields).cloned() else {
            debug!(%id, "update of unknown record ignored");
            return None;
        };
        self.subscriptions
            .broadcast(BrowserEvent::RecordUpdated { id: id.clone() });
        Some(updated)
    }

    /// Delete one record.
    ///
    /// Also deselects it and cancels an edit open on it.
    pub fn remove(&mut self, id: &RecordId) -> Option<Record> {
        let Some(removed) = self.store.remove(id) else {
            debug!(%id, "remove of unknown record ignored");
            return None;
        };

        let deselected = self.selection.evict(id);
        let cancelled = self.cancel_edit_on(id);

        self.subscriptions.broadcast(BrowserEvent::RecordsRemoved {
            ids: vec![id.clone()],
        });
        self.after_removal(deselected, cancelled);
        Some(removed)
    }

    /// Delete every record whose id is in `ids`, in one pass.
    ///
    /// Exactly the removed ids leave the selection; an edit open on any of
    /// them is cancelled.
    pub fn remove_many(&mut self, ids: &HashSet<RecordId>) -> Vec<Record> {
        let removed = self.store.remove_many(ids);
        if removed.is_empty() {
            return removed;
        }

        let mut deselected = false;
        let mut cancelled = None;
        for record in &removed {
            deselected |= self.selection.evict(&record.id);
            if cancelled.is_none() {
                cancelled = self.cancel_edit_on(&record.id);
            }
        }

        info!(count = removed.len(), "removed records");
        self.subscriptions.broadcast(BrowserEvent::RecordsRemoved {
            ids: removed.iter().map(|record| record.id.clone()).collect(),
        });
        self.after_removal(deselected, cancelled);
        removed
    }

    /// Delete every selected record, leaving the selection empty.
    pub fn delete_selected(&mut self) -> Vec<Record> {
        let ids = self.selection.ids().clone();
        self.remove_many(&ids)
    }

    fn cancel_edit_on(&mut self, id: &RecordId) -> Option<RecordId> {
        if self.edit.is_editing(id) {
            self.edit.close().map(|draft| draft.id)
        } else {
            None
        }
    }

    fn after_removal(&mut self, deselected: bool, cancelled: Option<RecordId>) {
        if deselected {
            self.broadcast_selection();
        }
        if let Some(id) = cancelled {
            debug!(%id, "edit cancelled by delete");
            self.subscriptions
                .broadcast(BrowserEvent::EditClosed { id, saved: false });
        }
    }

    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.store.get(id)
    }

    /// All records in load order.
    pub fn records(&self) -> &[Record] {
        self.store.records()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    // --- Selection ---

    /// Flip selection of a record. Returns whether it is selected afterwards;
    /// unknown ids are ignored.
    pub fn toggle(&mut self, id: &RecordId) -> bool {
        if !self.store.contains(id) {
            debug!(%id, "toggle of unknown record ignored");
            return false;
        }
        let selected = self.selection.toggle(id);
        self.broadcast_selection();
        selected
    }

    pub fn clear_selection(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        self.selection.clear();
        self.broadcast_selection();
    }

    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.selection.is_selected(id)
    }

    /// Selected ids in store order.
    pub fn selected_ids(&self) -> Vec<&RecordId> {
        self.store
            .ids()
            .filter(|id| self.selection.is_selected(id))
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    fn broadcast_selection(&self) {
        self.subscriptions.broadcast(BrowserEvent::SelectionChanged {
            selected_count: self.selection.len(),
        });
    }

    // --- Edit Session ---

    /// Start editing a record, discarding any other unsaved draft.
    pub fn begin_edit(&mut self, id: &RecordId) -> bool {
        let Some(record) = self.store.get(id) else {
            debug!(%id, "edit of unknown record ignored");
            return false;
        };
        let fields = record.fields();

        if let Some(previous) = self.edit.editing_id().filter(|open| *open != id) {
            debug!(previous = %previous, %id, "edit retargeted, draft discarded");
        }
        self.edit.begin(id.clone(), fields);
        self.subscriptions
            .broadcast(BrowserEvent::EditStarted { id: id.clone() });
        true
    }

    /// Change one field of the draft. The store is not touched.
    pub fn edit_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        let applied = self.edit.edit(field, value);
        if !applied {
            debug!(?field, "edit_field with no open session ignored");
        }
        applied
    }

    /// Discard the draft.
    pub fn cancel_edit(&mut self) -> bool {
        let Some(draft) = self.edit.close() else {
            debug!("cancel_edit with no open session ignored");
            return false;
        };
        self.subscriptions.broadcast(BrowserEvent::EditClosed {
            id: draft.id,
            saved: false,
        });
        true
    }

    /// Commit the draft to the store and close the session.
    ///
    /// Draft values are taken as-is; empty strings are accepted.
    pub fn save_edit(&mut self) -> Option<Record> {
        let Some(draft) = self.edit.close() else {
            debug!("save_edit with no open session ignored");
            return None;
        };
        let updated = self.update(&draft.id, draft.fields);
        self.subscriptions.broadcast(BrowserEvent::EditClosed {
            id: draft.id,
            saved: updated.is_some(),
        });
        updated
    }

    pub fn edit_session(&self) -> &EditSession {
        &self.edit
    }

    // --- View ---

    /// Set the search term. The current page is left alone.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term == self.search_term {
            return;
        }
        self.search_term = term;
        self.subscriptions.broadcast(BrowserEvent::SearchChanged {
            term: self.search_term.clone(),
        });
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Move to another page. Bounds are not checked; see [`Browser::clamp_page`].
    pub fn navigate(&mut self, request: PageRequest) -> usize {
        let before = self.pagination.current_page();
        let total = self.total_pages();
        let page = self.pagination.navigate(request, total);
        if page != before {
            self.subscriptions.broadcast(BrowserEvent::PageChanged { page });
        }
        page
    }

    /// Pull the current page back into the range of the filtered set.
    pub fn clamp_page(&mut self) -> usize {
        let before = self.pagination.current_page();
        let count = self.filtered().len();
        let page = self.pagination.clamp(count);
        if page != before {
            self.subscriptions.broadcast(BrowserEvent::PageChanged { page });
        }
        page
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    pub fn rows_per_page(&self) -> usize {
        self.pagination.rows_per_page()
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Records matching the search term, in store order.
    pub fn filtered(&self) -> Vec<&Record> {
        view::filter(self.store.records(), &self.search_term)
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.filtered().len())
    }

    pub fn page_numbers(&self) -> std::ops::RangeInclusive<usize> {
        self.pagination.page_numbers(self.filtered().len())
    }

    /// Records on the current page.
    pub fn page(&self) -> Vec<&Record> {
        let filtered = self.filtered();
        self.pagination.page(&filtered).to_vec()
    }

    /// Rows of the current page with their selection and edit state.
    pub fn rows(&self) -> Vec<RowView<'_>> {
        let draft = self.edit.draft();
        self.page()
            .into_iter()
            .map(|record| RowView {
                record,
                selected: self.selection.is_selected(&record.id),
                draft: draft
                    .filter(|draft| draft.id == record.id)
                    .map(|draft| &draft.fields),
            })
            .collect()
    }

    pub fn stats(&self) -> BrowserStats {
        let filtered_count = self.filtered().len();
        BrowserStats {
            record_count: self.store.len(),
            filtered_count,
            selected_count: self.selection.len(),
            total_pages: self.pagination.total_pages(filtered_count),
            current_page: self.pagination.current_page(),
        }
    }

    // --- Subscriptions ---

    pub fn subscribe(&self, config: SubscriptionConfig) -> SubscriptionHandle {
        self.subscriptions.subscribe(config)
    }

    /// Subscribe to every event class with the configured buffer size.
    pub fn subscribe_all(&self) -> SubscriptionHandle {
        self.subscriptions.subscribe(SubscriptionConfig {
            buffer_size: self.config.event_buffer_size,
            ..Default::default()
        })
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscriptions.unsubscribe(id);
    }
}
