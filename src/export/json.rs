//! JSON export of search results and parsed queries

use std::io::Write;

use serde::Serialize;

use crate::error::{PocketError, PocketResult};
use crate::search::SearchQuery;
use crate::services::SearchResults;

#[derive(Serialize)]
struct SearchExport<'a> {
    query: &'a SearchQuery,
    results: &'a SearchResults,
}

/// Write a query and its results as pretty-printed JSON
pub fn export_results_json<W: Write>(
    query: &SearchQuery,
    results: &SearchResults,
    mut writer: W,
) -> PocketResult<()> {
    serde_json::to_writer_pretty(&mut writer, &SearchExport { query, results })?;
    writeln!(writer).map_err(|e| PocketError::Export(e.to_string()))?;
    Ok(())
}

/// Write a parsed query as pretty-printed JSON
pub fn export_query_json<W: Write>(query: &SearchQuery, mut writer: W) -> PocketResult<()> {
    serde_json::to_writer_pretty(&mut writer, query)?;
    writeln!(writer).map_err(|e| PocketError::Export(e.to_string()))?;
    Ok(())
}
