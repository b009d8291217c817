//! Search CLI commands
//!
//! `search` runs a free-text query over stored records; `parse` shows how a
//! query string is understood without touching any data.

use std::io;

use clap::ValueEnum;

use crate::config::Settings;
use crate::display::{
    format_budget_table, format_expense_table, format_income_table, format_query_summary,
};
use crate::error::PocketResult;
use crate::export::{export_query_json, export_results_csv, export_results_json};
use crate::services::SearchService;
use crate::storage::Storage;

use super::records::KindFilter;

/// Output format for search results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Handle the search command
pub fn handle_search_command(
    storage: &Storage,
    settings: &Settings,
    query: &str,
    kind: KindFilter,
    format: OutputFormat,
) -> PocketResult<()> {
    let service = SearchService::new(storage, settings.query_parser());
    let query = service.parse(query);
    let results = service.search(&query, &kind.kinds())?;

    match format {
        OutputFormat::Json => export_results_json(&query, &results, io::stdout().lock())?,
        OutputFormat::Csv => export_results_csv(&results, io::stdout().lock())?,
        OutputFormat::Table => {
            print!("{}", format_query_summary(&query, settings));
            println!();

            if results.is_empty() {
                println!("No matching records.");
                return Ok(());
            }
            if !results.expenses.is_empty() {
                println!("Expenses");
                print!("{}", format_expense_table(&results.expenses.iter().collect::<Vec<_>>(), settings));
            }
            if !results.incomes.is_empty() {
                println!("Incomes");
                print!("{}", format_income_table(&results.incomes.iter().collect::<Vec<_>>(), settings));
            }
            if !results.budgets.is_empty() {
                println!("Budgets");
                print!("{}", format_budget_table(&results.budgets.iter().collect::<Vec<_>>(), settings));
            }
            println!("{} matching record(s)", results.len());
        }
    }

    Ok(())
}

/// Handle the parse command
pub fn handle_parse_command(settings: &Settings, query: &str, json: bool) -> PocketResult<()> {
    let query = settings.query_parser().parse(query);
    if json {
        export_query_json(&query, io::stdout().lock())
    } else {
        print!("{}", format_query_summary(&query, settings));
        Ok(())
    }
}
