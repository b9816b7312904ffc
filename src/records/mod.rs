//! Authoritative in-memory record list.
//!
//! Records keep their load order; an id index gives O(1) lookup by
//! identifier and is rebuilt whenever positions shift.

mod index;
mod store;

pub use index::RecordIndex;
pub use store::RecordStore;
