//! Inline edit session.
//!
//! At most one record is under edit. The draft holds a copy of its editable
//! fields; the store only changes when the session is saved.

use crate::types::{Field, RecordFields, RecordId};

/// Draft state of an open session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditDraft {
    pub id: RecordId,
    pub fields: RecordFields,
}

/// Edit session state machine: `Closed -> Open -> Closed`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Closed,
    Open(EditDraft),
}

impl EditSession {
    /// Open on `id` with its committed fields, discarding any other draft.
    pub fn begin(&mut self, id: RecordId, fields: RecordFields) {
        *self = EditSession::Open(EditDraft { id, fields });
    }

    /// Change one draft field. Returns false when no session is open.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) -> bool {
        match self {
            EditSession::Open(draft) => {
                draft.fields.set(field, value);
                true
            }
            EditSession::Closed => false,
        }
    }

    /// Close the session, handing back the draft it held.
    pub fn close(&mut self) -> Option<EditDraft> {
        match std::mem::take(self) {
            EditSession::Open(draft) => Some(draft),
            EditSession::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, EditSession::Open(_))
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        match self {
            EditSession::Open(draft) => Some(draft),
            EditSession::Closed => None,
        }
    }

    pub fn editing_id(&self) -> Option<&RecordId> {
        self.draft().map(|draft| &draft.id)
    }

    pub fn is_editing(&self, id: &RecordId) -> bool {
        self.editing_id() == Some(id)
    }
}
