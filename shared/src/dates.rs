use chrono::{DateTime, Datelike, NaiveDate};

use crate::error::{ContentError, ContentResult};

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date
pub fn parse_content_date(raw: &str) -> ContentResult<NaiveDate> {
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ContentError::InvalidDate(raw.to_string()))
}

/// English ordinal suffix for a day of the month
pub fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Format a date like "June 27th, 2025"
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}

/// Format a content date for display, falling back to the raw text when it does not parse
pub fn format_publish_date(raw: &str) -> String {
    match parse_content_date(raw) {
        Ok(date) => format_long_date(date),
        Err(e) => {
            tracing::warn!(error = %e, "showing unparsed publish date");
            raw.to_string()
        }
    }
}
