//! Derived views over the record store.
//!
//! Both stages are pure: the filter stage narrows the store by a search
//! term, the pagination stage slices the filtered sequence into one page.
//! Neither mutates the store, and both are recomputed on every call.

mod filter;
mod pagination;

pub use filter::{filter, matches};
pub use pagination::{paginate, total_pages, PageRequest, Pagination};
