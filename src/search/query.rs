//! Parsed search query value
//!
//! A [`SearchQuery`] is built once per parse call and never mutated. It holds
//! the three independent filter dimensions a record is checked against: text
//! terms, amount digit terms and an optional day-aligned date range.

use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

use super::dates::{end_of_day, start_of_day};

/// Inclusive, day-aligned interval of local instants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    /// Start of the first day (00:00:00)
    pub start: DateTime<Local>,
    /// Last second of the final day (23:59:59)
    pub end: DateTime<Local>,
}

impl DateRange {
    /// Range covering a single calendar day
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: start_of_day(date),
            end: end_of_day(date),
        }
    }

    /// Range covering both days and everything between them, in either order
    pub fn between(a: NaiveDate, b: NaiveDate) -> Self {
        let (first, last) = if a <= b { (a, b) } else { (b, a) };
        Self {
            start: start_of_day(first),
            end: end_of_day(last),
        }
    }

    /// Check whether an instant lies inside the range (inclusive)
    pub fn contains(&self, instant: &DateTime<Local>) -> bool {
        *instant >= self.start && *instant <= self.end
    }

    /// Check whether another inclusive interval overlaps this one
    pub fn overlaps(&self, start: &DateTime<Local>, end: &DateTime<Local>) -> bool {
        *start <= self.end && *end >= self.start
    }
}

/// Structured form of a free-text search string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    /// Input exactly as the user typed it
    pub raw: String,

    /// `raw` without leading and trailing whitespace
    pub trimmed: String,

    /// Lower-cased tokens matched against text fields (all must match)
    pub text_terms: Vec<String>,

    /// Digit-only tokens matched against amount renderings (all must match)
    pub amount_digit_terms: Vec<String>,

    /// Date range recognized in the input, if any
    pub date_range: Option<DateRange>,
}

impl SearchQuery {
    /// Query that matches every record
    pub fn empty(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            trimmed: String::new(),
            text_terms: Vec::new(),
            amount_digit_terms: Vec::new(),
            date_range: None,
        }
    }

    /// True when the trimmed input is empty
    pub fn is_empty(&self) -> bool {
        self.trimmed.is_empty()
    }

    /// True when no dimension would exclude anything
    pub fn is_unfiltered(&self) -> bool {
        self.text_terms.is_empty() && self.amount_digit_terms.is_empty() && self.date_range.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_single_day_spans_whole_day() {
        let range = DateRange::single_day(date(2026, 1, 1));
        assert_eq!(range.start.date_naive(), date(2026, 1, 1));
        assert_eq!(range.end.date_naive(), date(2026, 1, 1));
        assert_eq!(range.end - range.start, Duration::hours(24) - Duration::seconds(1));
    }

    #[test]
    fn test_between_is_order_independent() {
        let a = DateRange::between(date(2026, 1, 7), date(2026, 1, 1));
        let b = DateRange::between(date(2026, 1, 1), date(2026, 1, 7));
        assert_eq!(a, b);
        assert_eq!(a.start.date_naive(), date(2026, 1, 1));
        assert_eq!(a.end.date_naive(), date(2026, 1, 7));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = DateRange::single_day(date(2026, 3, 4));
        assert!(range.contains(&range.start));
        assert!(range.contains(&range.end));
        assert!(!range.contains(&(range.end + Duration::seconds(1))));
        assert!(!range.contains(&(range.start - Duration::seconds(1))));
    }

    #[test]
    fn test_empty_query() {
        let query = SearchQuery::empty("   ");
        assert!(query.is_empty());
        assert!(query.is_unfiltered());
        assert_eq!(query.raw, "   ");
    }
}
