//! # Record Browser
//!
//! An in-memory engine for browsing a list of user records: search,
//! paginate, multi-select, inline-edit and delete. Nothing is written back
//! to the source the records came from.
//!
//! ## Core Concepts
//!
//! - **Records**: id, name, email and role, loaded once from a JSON feed
//! - **Filter**: case-insensitive substring match over every column
//! - **Pagination**: fixed-size pages over the filtered records
//! - **Selection**: ids checked for bulk delete, kept across search and paging
//! - **Edit Session**: a draft of at most one record under inline edit
//!
//! ## Example
//!
//! ```ignore
//! use record_browser::{Browser, BrowserConfig, Field, JsonSource, PageRequest, RecordId};
//!
//! let mut browser = Browser::new(BrowserConfig::default())?;
//! browser.load_from(&JsonSource::from_json(body));
//!
//! browser.set_search_term("admin");
//! browser.navigate(PageRequest::Next);
//!
//! browser.begin_edit(&RecordId::from("3"));
//! browser.edit_field(Field::Role, "member");
//! browser.save_edit();
//!
//! for row in browser.rows() {
//!     println!("{} {} selected={}", row.record.id, row.record.name, row.selected);
//! }
//! ```

pub mod browser;
pub mod config;
pub mod edit;
pub mod error;
pub mod records;
pub mod selection;
pub mod source;
pub mod subscriptions;
pub mod types;
pub mod view;

// Re-exports
pub use browser::{Browser, RowView};
pub use config::{BrowserConfig, DEFAULT_SOURCE_URL};
pub use edit::{EditDraft, EditSession};
pub use error::{BrowserError, Result};
pub use records::{RecordIndex, RecordStore};
pub use selection::SelectionSet;
pub use source::{spawn_fetch, FetchHandle, JsonSource, RecordSource};
pub use subscriptions::{
    BrowserEvent, DropReason, SubscriptionConfig, SubscriptionFilter, SubscriptionHandle,
    SubscriptionId, SubscriptionManager,
};
pub use types::*;
pub use view::{filter, paginate, total_pages, PageRequest, Pagination};
