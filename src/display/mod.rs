//! Display formatting for terminal output

pub mod query;
pub mod records;

pub use query::format_query_summary;
pub use records::{format_budget_table, format_expense_table, format_income_table};
