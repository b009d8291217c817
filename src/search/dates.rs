//! Calendar date recognition for search input
//!
//! Finds substrings that read as complete calendar dates, either numeric
//! (`1/1/26`, `01-01-2026`, `2026.01.01`) or with a month name
//! (`Jan 1, 2026`, `January 1 26`, `Dec 25`). Candidates are found first and
//! then filtered for completeness: the last token must be 2 or 4 digits,
//! otherwise the text is left for the text and amount extractors. A month-name
//! date without a year falls in the recognizer's reference year.

use std::ops::Range;
use std::sync::OnceLock;

use chrono::{Datelike, DateTime, Duration, Local, LocalResult, NaiveDate, NaiveTime, TimeZone};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::compile_pattern;

/// Two to three numeric components joined by `/`, `-` or `.`
const NUMERIC_DATE_PATTERN: &str = r"\b[0-9]{1,4}(?:[/.\-][0-9]{1,4}){1,2}\b";

/// Month name, day with optional ordinal suffix, optional year
const MONTH_NAME_DATE_PATTERN: &str = concat!(
    r"(?i)\b(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|",
    r"aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\b",
    r"\.?\s+([0-9]{1,2})(?:st|nd|rd|th)?\b(?:,?\s+([0-9]{1,4})\b)?"
);

const NUMERIC_SEPARATORS: [char; 3] = ['/', '-', '.'];

/// Component order for numeric dates whose first part is not a 4-digit year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    /// `1/7/26` is January 7th
    #[default]
    MonthDayYear,
    /// `1/7/26` is July 1st
    DayMonthYear,
}

/// A substring accepted as a complete date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch {
    /// Byte range of the match in the scanned text
    pub range: Range<usize>,
    /// Calendar day the match resolves to
    pub date: NaiveDate,
    /// The matched substring
    pub text: String,
}

impl DateMatch {
    /// Check whether a byte range shares at least one byte with this match
    pub fn intersects(&self, other: &Range<usize>) -> bool {
        self.range.start < other.end && other.start < self.range.end
    }
}

/// Scans text for complete calendar dates
#[derive(Debug, Clone, Copy)]
pub struct DateRecognizer {
    order: DateOrder,
    reference_year: i32,
}

impl Default for DateRecognizer {
    fn default() -> Self {
        Self::new(DateOrder::default())
    }
}

impl DateRecognizer {
    /// Create a recognizer using the given numeric component order, with the
    /// current local year as reference year
    pub fn new(order: DateOrder) -> Self {
        Self {
            order,
            reference_year: Local::now().year(),
        }
    }

    /// Year given to month-name dates typed without one
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = year;
        self
    }

    /// Numeric component order in use
    pub fn order(&self) -> DateOrder {
        self.order
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Find every accepted date in `text`, in source order, non-overlapping
    pub fn recognize(&self, text: &str) -> Vec<DateMatch> {
        let mut candidates: Vec<DateMatch> = Vec::new();

        if let Some(re) = numeric_date_regex() {
            let mut pos = 0;
            while let Some(m) = re.find_at(text, pos) {
                let matched = m.as_str();
                let resolved = if qualifies_numeric(matched) {
                    self.resolve_numeric(matched)
                } else {
                    None
                };
                match resolved {
                    Some(date) => {
                        candidates.push(DateMatch {
                            range: m.range(),
                            date,
                            text: matched.to_string(),
                        });
                        pos = m.end();
                    }
                    None => {
                        log::trace!("rejected numeric candidate {:?}", matched);
                        // Later components may still start a date of their own
                        pos = matched
                            .find(&NUMERIC_SEPARATORS[..])
                            .map_or(m.end(), |sep| m.start() + sep + 1);
                    }
                }
            }
        }

        if let Some(re) = month_name_date_regex() {
            for caps in re.captures_iter(text) {
                let (Some(whole), Some(month), Some(day)) = (caps.get(0), caps.get(1), caps.get(2))
                else {
                    continue;
                };
                // A year swallowed from a decimal amount does not count
                let year = caps
                    .get(3)
                    .filter(|y| !followed_by_fraction(text, y.end()));
                let range = match year {
                    Some(y) => whole.start()..y.end(),
                    None => whole.start()..day.end() + ordinal_suffix_len(&text[day.end()..]),
                };
                let matched = &text[range.clone()];
                let last_token = year.map_or(day.as_str(), |y| y.as_str());
                if !qualifies_month_name(last_token) {
                    log::trace!("rejected partial month-name date {:?}", matched);
                    continue;
                }
                match self.resolve_month_name(month.as_str(), day.as_str(), year.map(|y| y.as_str())) {
                    Some(date) => candidates.push(DateMatch {
                        range,
                        date,
                        text: matched.to_string(),
                    }),
                    None => log::trace!("month-name candidate {:?} is not a calendar day", matched),
                }
            }
        }

        candidates.sort_by_key(|c| c.range.start);

        let mut accepted: Vec<DateMatch> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if accepted.iter().any(|a| a.intersects(&candidate.range)) {
                continue;
            }
            log::debug!("recognized date {:?} as {}", candidate.text, candidate.date);
            accepted.push(candidate);
        }
        accepted
    }

    fn resolve_numeric(&self, text: &str) -> Option<NaiveDate> {
        let parts: Vec<&str> = text.split(&NUMERIC_SEPARATORS[..]).collect();
        let [first, second, third] = parts.as_slice() else {
            return None;
        };

        let (year, month, day) = if first.len() == 4 {
            (*first, *second, *third)
        } else {
            match self.order {
                DateOrder::MonthDayYear => (*third, *first, *second),
                DateOrder::DayMonthYear => (*third, *second, *first),
            }
        };

        NaiveDate::from_ymd_opt(expand_year(year)?, month.parse().ok()?, day.parse().ok()?)
    }

    fn resolve_month_name(&self, month: &str, day: &str, year: Option<&str>) -> Option<NaiveDate> {
        let year = match year {
            Some(year) => expand_year(year)?,
            None => self.reference_year,
        };
        NaiveDate::from_ymd_opt(year, month_from_name(month)?, day.parse().ok()?)
    }
}

/// A numeric match needs at least three components and one that reads as a
/// day-or-year token (2 or 4 digits)
fn qualifies_numeric(text: &str) -> bool {
    let parts: Vec<&str> = text.split(&NUMERIC_SEPARATORS[..]).collect();
    parts.len() >= 3 && parts.iter().any(|p| p.len() == 2 || p.len() == 4)
}

/// A month-name match needs its last token (year, or day when no year was
/// typed) to be 2 or 4 digits
fn qualifies_month_name(last_token: &str) -> bool {
    (last_token.len() == 2 || last_token.len() == 4)
        && last_token.chars().all(|c| c.is_ascii_digit())
}

fn ordinal_suffix_len(rest: &str) -> usize {
    match rest.get(..2).map(str::to_ascii_lowercase).as_deref() {
        Some("st" | "nd" | "rd" | "th") => 2,
        _ => 0,
    }
}

fn followed_by_fraction(text: &str, end: usize) -> bool {
    let mut rest = text[end..].chars();
    matches!(rest.next(), Some('.') | Some(','))
        && rest.next().is_some_and(|c| c.is_ascii_digit())
}

/// Two-digit (and shorter) years pivot like `%y`: 00-68 -> 20xx, 69-99 -> 19xx
fn expand_year(text: &str) -> Option<i32> {
    let value: i32 = text.parse().ok()?;
    if text.len() <= 2 {
        Some(if value < 69 { 2000 + value } else { 1900 + value })
    } else {
        Some(value)
    }
}

fn month_from_name(name: &str) -> Option<u32> {
    let prefix: String = name.chars().take(3).collect::<String>().to_lowercase();
    let month = match prefix.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

fn numeric_date_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| compile_pattern(NUMERIC_DATE_PATTERN)).as_ref()
}

fn month_name_date_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| compile_pattern(MONTH_NAME_DATE_PATTERN)).as_ref()
}

/// First instant of a local calendar day
///
/// Where midnight falls into a DST gap the UTC reading of midnight is used.
pub fn start_of_day(date: NaiveDate) -> DateTime<Local> {
    let midnight = date.and_time(NaiveTime::MIN);
    match Local.from_local_datetime(&midnight) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => Local.from_utc_datetime(&midnight),
    }
}

/// Last second of a local calendar day (start of the next day minus one second)
pub fn end_of_day(date: NaiveDate) -> DateTime<Local> {
    match date.succ_opt() {
        Some(next) => start_of_day(next) - Duration::seconds(1),
        None => start_of_day(date) + Duration::seconds(86_399),
    }
}
