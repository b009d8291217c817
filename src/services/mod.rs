//! Service layer for Pocketbook
//!
//! Business logic on top of the storage layer: validation when recording
//! new entries, and search over everything stored.

pub mod records;
pub mod search;

pub use records::RecordService;
pub use search::{SearchResults, SearchService};
