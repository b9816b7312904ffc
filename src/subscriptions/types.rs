//! Subscription types for browser change notifications.

use crate::types::RecordId;
use serde::{Deserialize, Serialize};

/// Configuration for a subscription.
#[derive(Clone, Debug)]
pub struct SubscriptionConfig {
    /// Max buffered events before dropping the subscriber.
    /// Default: 256
    pub buffer_size: usize,

    /// Which event classes to deliver.
    pub filter: SubscriptionFilter,
}

impl Default for SubscriptionConfig {
    fn default() -> Self {
        Self {
            buffer_size: 256,
            filter: SubscriptionFilter::all(),
        }
    }
}

/// Event classes a subscriber wants.
#[derive(Clone, Debug, Default)]
pub struct SubscriptionFilter {
    /// Loads, load failures, updates and removals.
    pub include_records: bool,

    /// Selection changes.
    pub include_selection: bool,

    /// Edit session transitions.
    pub include_edits: bool,

    /// Search term and page changes.
    pub include_view: bool,
}

impl SubscriptionFilter {
    pub fn records() -> Self {
        Self {
            include_records: true,
            ..Default::default()
        }
    }

    pub fn selection() -> Self {
        Self {
            include_selection: true,
            ..Default::default()
        }
    }

    pub fn edits() -> Self {
        Self {
            include_edits: true,
            ..Default::default()
        }
    }

    pub fn view() -> Self {
        Self {
            include_view: true,
            ..Default::default()
        }
    }

    pub fn all() -> Self {
        Self {
            include_records: true,
            include_selection: true,
            include_edits: true,
            include_view: true,
        }
    }

    pub(crate) fn accepts(&self, event: &BrowserEvent) -> bool {
        match event {
            BrowserEvent::Loaded { .. }
            | BrowserEvent::LoadFailed { .. }
            | BrowserEvent::RecordUpdated { .. }
            | BrowserEvent::RecordsRemoved { .. } => self.include_records,
            BrowserEvent::SelectionChanged { .. } => self.include_selection,
            BrowserEvent::EditStarted { .. } | BrowserEvent::EditClosed { .. } => {
                self.include_edits
            }
            BrowserEvent::SearchChanged { .. } | BrowserEvent::PageChanged { .. } => {
                self.include_view
            }
            BrowserEvent::Dropped { .. } => true,
        }
    }
}

/// Events emitted to subscribers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BrowserEvent {
    // --- Record Events ---
    /// The store was replaced by a fresh record list.
    Loaded { count: usize },

    /// The initial fetch failed; the store stays as it was.
    LoadFailed { reason: String },

    /// A saved edit changed a record.
    RecordUpdated { id: RecordId },

    /// Records were deleted (single or bulk).
    RecordsRemoved { ids: Vec<RecordId> },

    // --- Selection Events ---
    SelectionChanged { selected_count: usize },

    // --- Edit Events ---
    EditStarted { id: RecordId },

    EditClosed { id: RecordId, saved: bool },

    // --- View Events ---
    SearchChanged { term: String },

    PageChanged { page: usize },

    // --- Lifecycle Events ---
    /// Subscription was dropped.
    Dropped { reason: DropReason },
}

/// Why a subscription was dropped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// Send buffer overflowed (slow consumer).
    BufferOverflow,
    /// Explicitly unsubscribed.
    Unsubscribed,
}

/// Unique identifier for a subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Handle to receive events from a subscription.
pub struct SubscriptionHandle {
    pub id: SubscriptionId,
    /// Channel to receive events.
    pub receiver: crossbeam_channel::Receiver<BrowserEvent>,
}

impl SubscriptionHandle {
    /// Receive the next event (blocking).
    pub fn recv(&self) -> Result<BrowserEvent, crossbeam_channel::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive an event (non-blocking).
    pub fn try_recv(&self) -> Result<BrowserEvent, crossbeam_channel::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Receive with timeout.
    pub fn recv_timeout(
        &self,
        timeout: std::time::Duration,
    ) -> Result<BrowserEvent, crossbeam_channel::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }

    /// Everything buffered right now, without blocking.
    pub fn drain(&self) -> Vec<BrowserEvent> {
        self.receiver.try_iter().collect()
    }
}
