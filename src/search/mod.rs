//! Free-text search over expenses, incomes and budgets
//!
//! A search string is parsed once into a [`SearchQuery`] holding text terms,
//! amount digit terms and an optional date range. Records are then checked
//! against each dimension independently:
//!
//! - `parser`: raw string -> [`SearchQuery`]
//! - `dates`: calendar date recognition used by the parser
//! - `matcher`: text, amount and date predicates
//! - `filter`: per-record-type field selection and combined matching
//!
//! Everything here is pure and safe to call from multiple threads.

pub mod dates;
pub mod filter;
pub mod matcher;
pub mod parser;
pub mod query;

pub use dates::{DateMatch, DateOrder, DateRecognizer};
pub use filter::{filter_records, matches_query, DateSpan, Searchable};
pub use matcher::{amount_digits, matches_amount, matches_date, matches_date_span, matches_text};
pub use parser::{parse_search_query, QueryParser};
pub use query::{DateRange, SearchQuery};

use regex::Regex;

/// Compile a built-in pattern, logging instead of failing
///
/// A recognizer whose pattern cannot be compiled simply finds nothing.
pub(crate) fn compile_pattern(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            log::warn!("search pattern failed to compile, skipping it: {}", e);
            None
        }
    }
}
