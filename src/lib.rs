//! Pocketbook - personal expense, income and budget tracking
//!
//! The heart of the crate is free-text search: a single string such as
//! `"coffee 12.33 1/1/26 - 1/7/26"` is parsed into text terms, amount digit
//! terms and a date range, then matched against stored records.
//!
//! # Architecture
//!
//! - `search`: query parsing and matching (pure, no I/O)
//! - `models`: expenses, incomes, budgets and money
//! - `storage`: JSON file storage
//! - `services`: record entry and search over storage
//! - `display` / `export`: tables, CSV and JSON output
//! - `cli`: command handlers for the `pocketbook` binary
//! - `config`: paths and user settings
//! - `error`: error types
//!
//! # Example
//!
//! ```rust
//! use pocketbook::search::{matches_amount, parse_search_query};
//!
//! let query = parse_search_query("coffee 33");
//! assert_eq!(query.text_terms, vec!["coffee"]);
//! assert!(matches_amount(&query, &[12.33]));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod search;
pub mod services;
pub mod storage;

pub use error::{PocketError, PocketResult};
pub use search::{parse_search_query, SearchQuery};
