//! CSV export of search results
//!
//! One row per record, all kinds in a single sheet distinguished by `kind`.

use std::io::Write;

use serde::Serialize;

use crate::error::PocketResult;
use crate::services::SearchResults;

#[derive(Serialize)]
struct CsvRow<'a> {
    kind: &'static str,
    id: String,
    date: String,
    end_date: String,
    description: &'a str,
    category: &'a str,
    card: &'a str,
    amount: String,
}

/// Write search results as CSV
pub fn export_results_csv<W: Write>(results: &SearchResults, writer: W) -> PocketResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for e in &results.expenses {
        csv_writer.serialize(CsvRow {
            kind: "expense",
            id: e.id.to_string(),
            date: e.date.to_string(),
            end_date: String::new(),
            description: &e.description,
            category: &e.category,
            card: e.card_name.as_deref().unwrap_or(""),
            amount: format!("{:.2}", e.amount.as_decimal()),
        })?;
    }

    for i in &results.incomes {
        csv_writer.serialize(CsvRow {
            kind: "income",
            id: i.id.to_string(),
            date: i.date.to_string(),
            end_date: String::new(),
            description: &i.source,
            category: "",
            card: "",
            amount: format!("{:.2}", i.amount.as_decimal()),
        })?;
    }

    for b in &results.budgets {
        csv_writer.serialize(CsvRow {
            kind: "budget",
            id: b.id.to_string(),
            date: b.start.to_string(),
            end_date: b.end.to_string(),
            description: &b.name,
            category: b.category.as_deref().unwrap_or(""),
            card: "",
            amount: format!("{:.2}", b.limit.as_decimal()),
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}
