//! Free-text search query parser
//!
//! Turns whatever the user typed into a [`SearchQuery`]. A number in the input
//! can be part of a date, an amount, or plain text; dates win over amounts,
//! and digit-only tokens become amount terms rather than text terms.
//!
//! Parsing is total: empty or unrecognizable input produces a query that
//! matches everything.

use std::sync::OnceLock;

use regex::Regex;

use super::compile_pattern;
use super::dates::{DateMatch, DateOrder, DateRecognizer};
use super::query::{DateRange, SearchQuery};

/// Digit runs with at most one decimal separator, or a bare fraction like `.33`
const AMOUNT_PATTERN: &str = r"[0-9]+(?:[.,][0-9]+)?|[.,][0-9]+";

/// Characters that split text terms besides whitespace
const TERM_SEPARATORS: [char; 5] = ['-', '\u{2013}', '\u{2014}', '/', ','];

/// Parses raw search strings into structured queries
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParser {
    dates: DateRecognizer,
}

impl QueryParser {
    /// Create a parser reading numeric dates month-first
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with an explicit numeric date component order
    pub fn with_date_order(order: DateOrder) -> Self {
        Self {
            dates: DateRecognizer::new(order),
        }
    }

    /// Use a fixed year for month-name dates typed without one
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.dates = self.dates.with_reference_year(year);
        self
    }

    /// Numeric date component order in use
    pub fn date_order(&self) -> DateOrder {
        self.dates.order()
    }

    /// Parse a raw search string
    pub fn parse(&self, raw: &str) -> SearchQuery {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return SearchQuery::empty(raw);
        }

        let dates = self.dates.recognize(trimmed);
        let date_range = date_range_from(&dates);
        let amount_digit_terms = amount_terms(trimmed, &dates);
        let text_terms = text_terms(trimmed, &dates);

        log::debug!(
            "parsed {:?}: text={:?} amounts={:?} dates={}",
            trimmed,
            text_terms,
            amount_digit_terms,
            dates.len()
        );

        SearchQuery {
            raw: raw.to_string(),
            trimmed: trimmed.to_string(),
            text_terms,
            amount_digit_terms,
            date_range,
        }
    }
}

/// Parse a raw search string with the default parser settings
pub fn parse_search_query(raw: &str) -> SearchQuery {
    QueryParser::default().parse(raw)
}

/// Only the first two dates in source order define the range
fn date_range_from(dates: &[DateMatch]) -> Option<DateRange> {
    match dates {
        [] => None,
        [only] => Some(DateRange::single_day(only.date)),
        [first, second, ..] => Some(DateRange::between(first.date, second.date)),
    }
}

fn amount_terms(text: &str, dates: &[DateMatch]) -> Vec<String> {
    let Some(re) = amount_regex() else {
        return Vec::new();
    };

    let mut terms: Vec<String> = Vec::new();
    for m in re.find_iter(text) {
        let range = m.range();
        if dates.iter().any(|d| d.intersects(&range)) {
            continue;
        }
        let digits: String = m.as_str().chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() || terms.contains(&digits) {
            continue;
        }
        terms.push(digits);
    }
    terms
}

fn text_terms(text: &str, dates: &[DateMatch]) -> Vec<String> {
    let blanked: String = text
        .char_indices()
        .map(|(i, c)| {
            if dates.iter().any(|d| d.range.contains(&i)) {
                ' '
            } else {
                c
            }
        })
        .collect();

    blanked
        .split(|c: char| c.is_whitespace() || TERM_SEPARATORS.contains(&c))
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty() && !is_numeric_token(token))
        .collect()
}

/// Digits with optional decimal points; these already became amount terms
fn is_numeric_token(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit()) && token.chars().all(|c| c.is_ascii_digit() || c == '.')
}

fn amount_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| compile_pattern(AMOUNT_PATTERN)).as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_and_blank_input() {
        for raw in ["", "   ", "\t\n"] {
            let query = parse_search_query(raw);
            assert!(query.is_empty());
            assert!(query.text_terms.is_empty());
            assert!(query.amount_digit_terms.is_empty());
            assert!(query.date_range.is_none());
            assert_eq!(query.raw, raw);
        }
    }

    #[test]
    fn test_single_word() {
        let query = parse_search_query("starbucks");
        assert_eq!(query.text_terms, vec!["starbucks"]);
        assert!(query.amount_digit_terms.is_empty());
        assert!(query.date_range.is_none());
    }

    #[test]
    fn test_words_are_lowercased_and_trimmed() {
        let query = parse_search_query("  Whole Foods  ");
        assert_eq!(query.trimmed, "Whole Foods");
        assert_eq!(query.text_terms, vec!["whole", "foods"]);
    }

    #[test]
    fn test_digits_become_amount_terms() {
        let query = parse_search_query("33");
        assert!(query.text_terms.is_empty());
        assert_eq!(query.amount_digit_terms, vec!["33"]);
    }

    #[test]
    fn test_decimal_amount() {
        let query = parse_search_query("coffee 12.33");
        assert_eq!(query.text_terms, vec!["coffee"]);
        assert_eq!(query.amount_digit_terms, vec!["1233"]);
    }

    #[test]
    fn test_leading_fraction_amount() {
        let query = parse_search_query(".33");
        assert_eq!(query.amount_digit_terms, vec!["33"]);
        assert!(query.text_terms.is_empty());
    }

    #[test]
    fn test_amount_terms_deduplicated_in_order() {
        let query = parse_search_query("5 12 5 7");
        assert_eq!(query.amount_digit_terms, vec!["5", "12", "7"]);
    }

    #[test]
    fn test_mixed_token_stays_text() {
        let query = parse_search_query("2nd avenue $40");
        assert_eq!(query.text_terms, vec!["2nd", "avenue", "$40"]);
        assert_eq!(query.amount_digit_terms, vec!["2", "40"]);
    }

    #[test]
    fn test_separators_split_text() {
        let query = parse_search_query("gas/fuel,food\u{2013}drink");
        assert_eq!(query.text_terms, vec!["gas", "fuel", "food", "drink"]);
    }

    #[test]
    fn test_single_date() {
        let query = parse_search_query("1/1/26");
        let range = query.date_range.expect("date range");
        assert_eq!(range.start.date_naive(), date(2026, 1, 1));
        assert_eq!(range.end.date_naive(), date(2026, 1, 1));
        assert_eq!(range.end - range.start, Duration::hours(24) - Duration::seconds(1));
        assert!(query.text_terms.is_empty());
        assert!(query.amount_digit_terms.is_empty());
    }

    #[test]
    fn test_date_range_between_two_dates() {
        let forward = parse_search_query("1/1/26 - 1/7/26");
        let backward = parse_search_query("1/7/26 - 1/1/26");
        let range = forward.date_range.expect("date range");
        assert_eq!(range.start.date_naive(), date(2026, 1, 1));
        assert_eq!(range.end.date_naive(), date(2026, 1, 7));
        assert_eq!(forward.date_range, backward.date_range);
        assert!(forward.text_terms.is_empty());
        assert!(forward.amount_digit_terms.is_empty());
    }

    #[test]
    fn test_only_first_two_dates_form_range() {
        let query = parse_search_query("1/5/26 1/6/26 12/31/26");
        let range = query.date_range.expect("date range");
        assert_eq!(range.start.date_naive(), date(2026, 1, 5));
        assert_eq!(range.end.date_naive(), date(2026, 1, 6));
        // The third date is still excluded from amounts
        assert!(query.amount_digit_terms.is_empty());
    }

    #[test]
    fn test_partial_month_date_left_as_terms() {
        let query = parse_search_query("Jan 1");
        assert!(query.date_range.is_none());
        assert_eq!(query.text_terms, vec!["jan"]);
        assert_eq!(query.amount_digit_terms, vec!["1"]);
    }

    #[test]
    fn test_month_day_without_year() {
        let parser = QueryParser::new().with_reference_year(2025);
        let query = parser.parse("Dec 25");
        let range = query.date_range.expect("date range");
        assert_eq!(range.start.date_naive(), date(2025, 12, 25));
        assert_eq!(range.end.date_naive(), date(2025, 12, 25));
        assert!(query.text_terms.is_empty());
        assert!(query.amount_digit_terms.is_empty());

        let query = parser.parse("presents Dec 20 - Dec 24 40.00");
        let range = query.date_range.expect("date range");
        assert_eq!(range.start.date_naive(), date(2025, 12, 20));
        assert_eq!(range.end.date_naive(), date(2025, 12, 24));
        assert_eq!(query.text_terms, vec!["presents"]);
        assert_eq!(query.amount_digit_terms, vec!["4000"]);
    }

    #[test]
    fn test_incomplete_numeric_date_leaves_amounts() {
        let query = parse_search_query("lunch 1/7");
        assert!(query.date_range.is_none());
        assert_eq!(query.text_terms, vec!["lunch"]);
        assert_eq!(query.amount_digit_terms, vec!["1", "7"]);

        let query = parse_search_query("12.5");
        assert!(query.date_range.is_none());
        assert_eq!(query.amount_digit_terms, vec!["125"]);
    }

    #[test]
    fn test_date_after_rejected_prefix() {
        let query = parse_search_query("5-1/1/26");
        let range = query.date_range.expect("date range");
        assert_eq!(range.start.date_naive(), date(2026, 1, 1));
        assert_eq!(query.amount_digit_terms, vec!["5"]);
        assert!(query.text_terms.is_empty());
    }

    #[test]
    fn test_month_name_date_with_terms() {
        let query = parse_search_query("Target Jan 3, 2026 45.10");
        let range = query.date_range.expect("date range");
        assert_eq!(range.start.date_naive(), date(2026, 1, 3));
        assert_eq!(query.text_terms, vec!["target"]);
        assert_eq!(query.amount_digit_terms, vec!["4510"]);
    }

    #[test]
    fn test_day_month_order() {
        let parser = QueryParser::with_date_order(DateOrder::DayMonthYear);
        assert_eq!(parser.date_order(), DateOrder::DayMonthYear);
        let range = parser.parse("7/1/26").date_range.expect("date range");
        assert_eq!(range.start.date_naive(), date(2026, 1, 7));
    }

    #[test]
    fn test_parse_is_repeatable() {
        let raw = "lunch 12/3/25 - Dec 9 2025 18.50";
        assert_eq!(parse_search_query(raw), parse_search_query(raw));
    }
}
