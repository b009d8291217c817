//! Record-level search
//!
//! Each record type decides which of its fields count as text, which as
//! amounts and what date extent it covers. A record matches a query when the
//! text, amount and date predicates all hold.

use chrono::NaiveDate;

use super::dates::{end_of_day, start_of_day};
use super::matcher::{matches_amount, matches_date, matches_date_span, matches_text};
use super::query::SearchQuery;
use crate::models::{Budget, Expense, Income};

/// The date extent of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSpan {
    /// A record dated on one day
    Day(NaiveDate),
    /// A record covering an inclusive period of days
    Period(NaiveDate, NaiveDate),
}

/// A record that can be matched against a [`SearchQuery`]
pub trait Searchable {
    /// Fields searched by text terms
    fn text_fields(&self) -> Vec<Option<&str>>;

    /// Amounts searched by amount digit terms
    fn amounts(&self) -> Vec<f64>;

    /// Date extent checked against the query's date range
    fn date_span(&self) -> DateSpan;
}

impl Searchable for Expense {
    fn text_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.description.as_str()),
            Some(self.category.as_str()),
            self.card_name.as_deref(),
            Some(self.notes.as_str()),
        ]
    }

    fn amounts(&self) -> Vec<f64> {
        vec![self.amount.as_decimal()]
    }

    fn date_span(&self) -> DateSpan {
        DateSpan::Day(self.date)
    }
}

impl Searchable for Income {
    fn text_fields(&self) -> Vec<Option<&str>> {
        vec![Some(self.source.as_str()), Some(self.notes.as_str())]
    }

    fn amounts(&self) -> Vec<f64> {
        vec![self.amount.as_decimal()]
    }

    fn date_span(&self) -> DateSpan {
        DateSpan::Day(self.date)
    }
}

impl Searchable for Budget {
    fn text_fields(&self) -> Vec<Option<&str>> {
        vec![Some(self.name.as_str()), self.category.as_deref()]
    }

    fn amounts(&self) -> Vec<f64> {
        vec![self.limit.as_decimal()]
    }

    fn date_span(&self) -> DateSpan {
        DateSpan::Period(self.start, self.end)
    }
}

/// Check a record against all three query dimensions
pub fn matches_query<T: Searchable + ?Sized>(query: &SearchQuery, record: &T) -> bool {
    if !matches_text(query, &record.text_fields()) {
        return false;
    }
    if !matches_amount(query, &record.amounts()) {
        return false;
    }
    match record.date_span() {
        DateSpan::Day(day) => matches_date(query, &start_of_day(day)),
        DateSpan::Period(start, end) => {
            matches_date_span(query, &start_of_day(start), &end_of_day(end))
        }
    }
}

/// Records matching the query, in their original order
pub fn filter_records<'a, T: Searchable>(query: &SearchQuery, records: &'a [T]) -> Vec<&'a T> {
    if query.is_unfiltered() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| matches_query(query, *record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::search::parse_search_query;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expenses() -> Vec<Expense> {
        vec![
            Expense::new(date(2026, 1, 2), Money::from_cents(1233), "Starbucks")
                .with_category("Dining")
                .with_card("Visa Gold"),
            Expense::new(date(2026, 1, 9), Money::from_cents(5000), "Shell")
                .with_category("Gas"),
            Expense::new(date(2025, 12, 28), Money::from_cents(899), "Netflix")
                .with_category("Subscriptions")
                .with_card("Amex"),
        ]
    }

    fn descriptions(found: &[&Expense]) -> Vec<String> {
        found.iter().map(|e| e.description.clone()).collect()
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let records = expenses();
        assert_eq!(filter_records(&parse_search_query(""), &records).len(), 3);
    }

    #[test]
    fn test_text_across_fields() {
        let records = expenses();
        let found = filter_records(&parse_search_query("visa dining"), &records);
        assert_eq!(descriptions(&found), vec!["Starbucks"]);
    }

    #[test]
    fn test_amount_term() {
        let records = expenses();
        let found = filter_records(&parse_search_query("99"), &records);
        assert_eq!(descriptions(&found), vec!["Netflix"]);
    }

    #[test]
    fn test_date_range_and_text() {
        let records = expenses();
        let found = filter_records(&parse_search_query("gas 1/1/26 - 1/31/26"), &records);
        assert_eq!(descriptions(&found), vec!["Shell"]);

        let found = filter_records(&parse_search_query("1/1/26 - 1/31/26"), &records);
        assert_eq!(descriptions(&found), vec!["Starbucks", "Shell"]);
    }

    #[test]
    fn test_all_dimensions_must_hold() {
        let records = expenses();
        // Text matches Starbucks, amount matches Shell only
        assert!(filter_records(&parse_search_query("starbucks 50"), &records).is_empty());
    }

    #[test]
    fn test_budget_period_overlap() {
        let budget = Budget::new(
            "Holiday",
            Money::from_cents(30000),
            date(2025, 12, 30),
            date(2026, 1, 2),
        )
        .with_category("Travel");
        assert!(matches_query(&parse_search_query("1/1/26 - 1/7/26"), &budget));
        assert!(!matches_query(&parse_search_query("1/8/26 - 1/10/26"), &budget));
        assert!(matches_query(&parse_search_query("travel 300"), &budget));
    }

    #[test]
    fn test_income_fields() {
        let income = Income::new(date(2026, 1, 15), Money::from_cents(250000), "Acme Corp")
            .with_notes("January paycheck");
        assert!(matches_query(&parse_search_query("paycheck 2500"), &income));
        assert!(!matches_query(&parse_search_query("bonus"), &income));
    }
}
