//! Predicates evaluating a [`SearchQuery`] against record fields
//!
//! Each predicate covers one dimension and returns `true` when the query has
//! nothing to say about that dimension, so an unset filter never excludes a
//! record. Which record fields feed which predicate is up to the caller.

use chrono::{DateTime, Local};

use super::dates::{end_of_day, start_of_day};
use super::query::SearchQuery;

/// Maximum number of fraction digits kept when rendering amounts
const AMOUNT_FRACTION_DIGITS: usize = 6;

/// Every text term must appear in at least one of the fields
pub fn matches_text(query: &SearchQuery, fields: &[Option<&str>]) -> bool {
    if query.text_terms.is_empty() {
        return true;
    }

    let haystacks: Vec<String> = fields
        .iter()
        .flatten()
        .map(|field| field.trim())
        .filter(|field| !field.is_empty())
        .map(str::to_lowercase)
        .collect();

    query
        .text_terms
        .iter()
        .all(|term| haystacks.iter().any(|haystack| haystack.contains(term.as_str())))
}

/// Every amount term must appear in the digit rendering of at least one amount
pub fn matches_amount(query: &SearchQuery, amounts: &[f64]) -> bool {
    if query.amount_digit_terms.is_empty() {
        return true;
    }
    if amounts.is_empty() {
        return false;
    }

    let rendered: Vec<String> = amounts.iter().map(|a| amount_digits(*a)).collect();

    query
        .amount_digit_terms
        .iter()
        .all(|term| rendered.iter().any(|digits| digits.contains(term.as_str())))
}

/// The instant must lie inside the query's date range
pub fn matches_date(query: &SearchQuery, instant: &DateTime<Local>) -> bool {
    match &query.date_range {
        None => true,
        Some(range) => range.contains(instant),
    }
}

/// The record's own interval, widened to whole days, must overlap the range
pub fn matches_date_span(
    query: &SearchQuery,
    start: &DateTime<Local>,
    end: &DateTime<Local>,
) -> bool {
    match &query.date_range {
        None => true,
        Some(range) => {
            let record_start = start_of_day(start.date_naive());
            let record_end = end_of_day(end.date_naive());
            range.overlaps(&record_start, &record_end)
        }
    }
}

/// Digits of an amount's plain decimal rendering
///
/// The absolute value is formatted without grouping, with up to six fraction
/// digits and no trailing zeros, and everything but digits is dropped:
/// `12.33` -> `"1233"`, `50.0` -> `"50"`, `-0.5` -> `"05"`.
pub fn amount_digits(amount: f64) -> String {
    let formatted = format!("{:.*}", AMOUNT_FRACTION_DIGITS, amount.abs());
    let formatted = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };
    formatted.chars().filter(|c| c.is_ascii_digit()).collect()
}
