//! Parsed query formatting
//!
//! Shows how a search string was understood, so users can see which parts
//! became dates, amounts and words.

use crate::config::Settings;
use crate::search::SearchQuery;

/// Human-readable breakdown of a parsed query
pub fn format_query_summary(query: &SearchQuery, settings: &Settings) -> String {
    if query.is_empty() {
        return "Empty query (matches everything)\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("Query:   {}\n", query.trimmed));

    if query.text_terms.is_empty() {
        output.push_str("Text:    (any)\n");
    } else {
        output.push_str(&format!("Text:    {}\n", query.text_terms.join(", ")));
    }

    if query.amount_digit_terms.is_empty() {
        output.push_str("Amounts: (any)\n");
    } else {
        output.push_str(&format!("Amounts: {}\n", query.amount_digit_terms.join(", ")));
    }

    match &query.date_range {
        Some(range) => output.push_str(&format!(
            "Dates:   {} - {}\n",
            range.start.format(&settings.date_format),
            range.end.format(&settings.date_format)
        )),
        None => output.push_str("Dates:   (any)\n"),
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::parse_search_query;

    #[test]
    fn test_summary() {
        let settings = Settings::default();
        let output = format_query_summary(&parse_search_query("Coffee 4.50 1/1/26 - 1/7/26"), &settings);
        assert!(output.contains("Text:    coffee"));
        assert!(output.contains("Amounts: 450"));
        assert!(output.contains("Dates:   2026-01-01 - 2026-01-07"));
    }

    #[test]
    fn test_empty_summary() {
        let output = format_query_summary(&parse_search_query("  "), &Settings::default());
        assert!(output.starts_with("Empty query"));
    }
}
