//! Search service
//!
//! Parses a search string with the user's settings and runs it over the
//! stored records of the requested kinds.

use serde::Serialize;

use crate::error::PocketResult;
use crate::models::{Budget, Expense, Income, RecordKind};
use crate::search::{filter_records, QueryParser, SearchQuery};
use crate::storage::Storage;

/// Records matching a query, grouped by kind
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResults {
    pub expenses: Vec<Expense>,
    pub incomes: Vec<Income>,
    pub budgets: Vec<Budget>,
}

impl SearchResults {
    /// Total number of matching records
    pub fn len(&self) -> usize {
        self.expenses.len() + self.incomes.len() + self.budgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Service for searching stored records
pub struct SearchService<'a> {
    storage: &'a Storage,
    parser: QueryParser,
}

impl<'a> SearchService<'a> {
    /// Create a new search service
    pub fn new(storage: &'a Storage, parser: QueryParser) -> Self {
        Self { storage, parser }
    }

    /// Parse a raw search string
    pub fn parse(&self, raw: &str) -> SearchQuery {
        self.parser.parse(raw)
    }

    /// Search records of the given kinds
    pub fn search(&self, query: &SearchQuery, kinds: &[RecordKind]) -> PocketResult<SearchResults> {
        let mut results = SearchResults::default();

        if kinds.contains(&RecordKind::Expense) {
            let all = self.storage.expenses.get_all()?;
            results.expenses = filter_records(query, &all).into_iter().cloned().collect();
        }
        if kinds.contains(&RecordKind::Income) {
            let all = self.storage.incomes.get_all()?;
            results.incomes = filter_records(query, &all).into_iter().cloned().collect();
        }
        if kinds.contains(&RecordKind::Budget) {
            let all = self.storage.budgets.get_all()?;
            results.budgets = filter_records(query, &all).into_iter().cloned().collect();
        }

        log::debug!("query {:?} matched {} records", query.trimmed, results.len());
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PocketPaths;
    use crate::models::Money;
    use crate::search::DateOrder;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    const ALL: [RecordKind; 3] = [RecordKind::Expense, RecordKind::Income, RecordKind::Budget];

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seeded_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        storage
            .expenses
            .insert(
                Expense::new(date(2026, 1, 7), Money::from_cents(1233), "Starbucks")
                    .with_category("Dining"),
            )
            .unwrap();
        storage
            .expenses
            .insert(Expense::new(date(2026, 2, 1), Money::from_cents(6400), "Groceries"))
            .unwrap();
        storage
            .incomes
            .insert(Income::new(date(2026, 1, 1), Money::from_cents(330000), "Payroll"))
            .unwrap();
        storage
            .budgets
            .insert(
                Budget::new("Dining out", Money::from_cents(20000), date(2026, 1, 1), date(2026, 1, 31))
                    .with_category("Dining"),
            )
            .unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_search_across_kinds() {
        let (_temp_dir, storage) = seeded_storage();
        let service = SearchService::new(&storage, QueryParser::default());

        let results = service.search(&service.parse("dining"), &ALL).unwrap();
        assert_eq!(results.expenses.len(), 1);
        assert_eq!(results.budgets.len(), 1);
        assert!(results.incomes.is_empty());
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_search_restricted_kinds() {
        let (_temp_dir, storage) = seeded_storage();
        let service = SearchService::new(&storage, QueryParser::default());

        let results = service
            .search(&service.parse("dining"), &[RecordKind::Budget])
            .unwrap();
        assert!(results.expenses.is_empty());
        assert_eq!(results.budgets.len(), 1);
    }

    #[test]
    fn test_search_by_amount_digits() {
        let (_temp_dir, storage) = seeded_storage();
        let service = SearchService::new(&storage, QueryParser::default());

        let results = service.search(&service.parse("33"), &ALL).unwrap();
        // 12.33 and 3300.00 both contain "33"
        assert_eq!(results.expenses.len(), 1);
        assert_eq!(results.incomes.len(), 1);
        assert!(results.budgets.is_empty());
    }

    #[test]
    fn test_search_uses_configured_date_order() {
        let (_temp_dir, storage) = seeded_storage();
        let service = SearchService::new(&storage, QueryParser::with_date_order(DateOrder::DayMonthYear));

        // 7/1/26 read day-first is January 7th
        let results = service.search(&service.parse("7/1/26"), &ALL).unwrap();
        assert_eq!(results.expenses.len(), 1);
        assert_eq!(results.expenses[0].description, "Starbucks");
        assert_eq!(results.budgets.len(), 1);
        assert!(results.incomes.is_empty());
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let (_temp_dir, storage) = seeded_storage();
        let service = SearchService::new(&storage, QueryParser::default());
        assert_eq!(service.search(&service.parse(""), &ALL).unwrap().len(), 4);
    }
}
