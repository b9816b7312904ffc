//! Ordered record store.

use super::RecordIndex;
use crate::types::{Record, RecordFields, RecordId};
use std::collections::HashSet;
use tracing::warn;

/// The authoritative, ordered list of records.
///
/// Guarantees unique ids and that no record ever changes its id. Removal
/// keeps the relative order of survivors.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    index: RecordIndex,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire contents.
    ///
    /// A repeated id keeps its first occurrence; later copies are dropped.
    /// Returns the number of records kept.
    pub fn load(&mut self, records: Vec<Record>) -> usize {
        let mut index = RecordIndex::new();
        let mut kept = Vec::with_capacity(records.len());

        for record in records {
            if index.insert(record.id.clone(), kept.len()) {
                kept.push(record);
            } else {
                warn!(id = %record.id, "dropping record with duplicate id");
            }
        }

        self.records = kept;
        self.index = index;
        self.records.len()
    }

    /// Replace the editable fields of a record. No-op for unknown ids.
    pub fn update(&mut self, id: &RecordId, fields: RecordFields) -> Option<&Record> {
        let position = self.index.position(id)?;
        let record = &mut self.records[position];
        record.apply(fields);
        Some(record)
    }

    /// Remove one record, returning it if it was present.
    pub fn remove(&mut self, id: &RecordId) -> Option<Record> {
        let position = self.index.remove(id)?;
        let record = self.records.remove(position);
        self.index.reindex_from(&self.records, position);
        Some(record)
    }

    /// Remove every record whose id is in `ids`, in a single pass.
    ///
    /// Returns the removed records in their former order.
    pub fn remove_many(&mut self, ids: &HashSet<RecordId>) -> Vec<Record> {
        if ids.is_empty() {
            return Vec::new();
        }

        let (removed, kept): (Vec<Record>, Vec<Record>) = std::mem::take(&mut self.records)
            .into_iter()
            .partition(|record| ids.contains(&record.id));

        self.records = kept;
        if !removed.is_empty() {
            self.index.rebuild(&self.records);
        }
        removed
    }

    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.index.position(id).map(|position| &self.records[position])
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.index.contains(id)
    }

    /// Records in load order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &RecordId> {
        self.records.iter().map(|record| &record.id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> RecordStore {
        let mut store = RecordStore::new();
        store.load(vec![
            Record::new(1, "Alice", "a@x", "Admin"),
            Record::new(2, "Bob", "b@x", "User"),
            Record::new(3, "Carol", "c@x", "User"),
            Record::new(4, "Dan", "d@x", "Admin"),
        ]);
        store
    }

    fn ids(store: &RecordStore) -> Vec<String> {
        store.ids().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_load_drops_duplicate_ids() {
        let mut store = RecordStore::new();
        let kept = store.load(vec![
            Record::new(1, "Alice", "a@x", "Admin"),
            Record::new(1, "Impostor", "i@x", "Admin"),
            Record::new(2, "Bob", "b@x", "User"),
        ]);

        assert_eq!(kept, 2);
        assert_eq!(store.get(&RecordId::from(1)).unwrap().name, "Alice");
    }

    #[test]
    fn test_load_replaces_contents() {
        let mut store = sample_store();
        store.load(vec![Record::new(9, "Zed", "z@x", "User")]);
        assert_eq!(ids(&store), vec!["9"]);
        assert!(!store.contains(&RecordId::from(1)));
    }

    #[test]
    fn test_update_keeps_position_and_id() {
        let mut store = sample_store();
        let updated = store
            .update(&RecordId::from(2), RecordFields::new("Robert", "r@x", "Lead"))
            .unwrap();
        assert_eq!(updated.id, RecordId::from(2));

        assert_eq!(ids(&store), vec!["1", "2", "3", "4"]);
        assert_eq!(store.records()[1].name, "Robert");
    }

    #[test]
    fn test_update_unknown_is_noop() {
        let mut store = sample_store();
        assert!(store
            .update(&RecordId::from(42), RecordFields::default())
            .is_none());
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut store = sample_store();
        let removed = store.remove(&RecordId::from(2)).unwrap();
        assert_eq!(removed.name, "Bob");
        assert_eq!(ids(&store), vec!["1", "3", "4"]);
        assert_eq!(store.get(&RecordId::from(4)).unwrap().name, "Dan");
        assert!(store.remove(&RecordId::from(2)).is_none());
    }

    #[test]
    fn test_remove_many_single_pass() {
        let mut store = sample_store();
        let targets: HashSet<RecordId> = [RecordId::from(1), RecordId::from(3), RecordId::from(99)]
            .into_iter()
            .collect();

        let removed = store.remove_many(&targets);
        assert_eq!(removed.len(), 2);
        assert_eq!(ids(&store), vec!["2", "4"]);
        assert_eq!(store.get(&RecordId::from(4)).unwrap().name, "Dan");
    }
}
