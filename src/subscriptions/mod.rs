//! Change notifications for rendering front ends.
//!
//! The engine broadcasts an event after every operator action that changed
//! something, so a renderer knows when to redraw:
//! - Record loads, updates and removals
//! - Selection changes
//! - Edit session transitions
//! - Search term and page changes
//!
//! Each subscriber gets a bounded buffer; a subscriber that falls behind is
//! dropped rather than stalling the engine.
//!
//! # Example
//!
//! ```ignore
//! let handle = browser.subscribe(SubscriptionConfig {
//!     filter: SubscriptionFilter::records(),
//!     ..Default::default()
//! });
//!
//! browser.remove(&RecordId::from("3"));
//!
//! match handle.try_recv() {
//!     Ok(BrowserEvent::RecordsRemoved { ids }) => println!("removed {:?}", ids),
//!     _ => {}
//! }
//! ```

mod manager;
mod types;

pub use manager::SubscriptionManager;
pub use types::{
    BrowserEvent, DropReason, SubscriptionConfig, SubscriptionFilter, SubscriptionHandle,
    SubscriptionId,
};
