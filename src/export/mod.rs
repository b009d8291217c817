//! Export of search results
//!
//! CSV for spreadsheets, JSON for scripting.

pub mod csv;
pub mod json;

pub use self::csv::export_results_csv;
pub use self::json::{export_query_json, export_results_json};
