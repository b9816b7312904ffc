//! Identifier index for the record store.

use crate::types::{Record, RecordId};
use std::collections::HashMap;

/// Index mapping record ids to their position in the store.
#[derive(Debug, Default)]
pub struct RecordIndex {
    positions: HashMap<RecordId, usize>,
}

impl RecordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of a record id, if present.
    pub fn position(&self, id: &RecordId) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.positions.contains_key(id)
    }

    /// Register an id at a position. Returns false if the id is already indexed.
    pub fn insert(&mut self, id: RecordId, position: usize) -> bool {
        match self.positions.entry(id) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(position);
                true
            }
        }
    }

    pub fn remove(&mut self, id: &RecordId) -> Option<usize> {
        self.positions.remove(id)
    }

    /// Re-derive positions for `records[from..]` after a shift.
    pub fn reindex_from(&mut self, records: &[Record], from: usize) {
        for (offset, record) in records.iter().enumerate().skip(from) {
            self.positions.insert(record.id.clone(), offset);
        }
    }

    /// Rebuild the whole index from scratch.
    pub fn rebuild(&mut self, records: &[Record]) {
        self.positions.clear();
        self.positions.reserve(records.len());
        self.reindex_from(records, 0);
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_rejects_duplicate() {
        let mut index = RecordIndex::new();
        assert!(index.insert(RecordId::from(1), 0));
        assert!(!index.insert(RecordId::from(1), 5));
        assert_eq!(index.position(&RecordId::from(1)), Some(0));
    }

    #[test]
    fn test_reindex_after_shift() {
        let mut records = vec![
            Record::new(1, "a", "a@x", "r"),
            Record::new(2, "b", "b@x", "r"),
            Record::new(3, "c", "c@x", "r"),
        ];
        let mut index = RecordIndex::new();
        index.rebuild(&records);

        records.remove(0);
        index.remove(&RecordId::from(1));
        index.reindex_from(&records, 0);

        assert_eq!(index.position(&RecordId::from(2)), Some(0));
        assert_eq!(index.position(&RecordId::from(3)), Some(1));
        assert_eq!(index.len(), 2);
    }
}
