//! Date and time utility functions
//!
//! Records carry dates either as plain `YYYY-MM-DD` strings or as RFC 3339
//! timestamps. Filtering compares calendar dates; the table shows timestamps in a
//! short human-readable form.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, Utc};

/// Standard date format for filters, exports and file names
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// Current local date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format current local date to YYYY-MM-DD string
pub fn format_today() -> String {
    format_ymd(today())
}

/// Extract the calendar date from a record field.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 (date taken in UTC) and `YYYY-MM-DD HH:MM:SS`.
pub fn parse_record_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = parse_date(value) {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.date())
        .ok()
}

/// Inclusive range check with optional bounds.
pub fn date_in_range(date: NaiveDate, start: Option<NaiveDate>, end: Option<NaiveDate>) -> bool {
    start.map_or(true, |s| date >= s) && end.map_or(true, |e| date <= e)
}

/// Format a date relative to `today`: "today", "yesterday", "3 days ago", "Jan 15"...
pub fn format_human_date(date: NaiveDate, today: NaiveDate) -> String {
    let days_diff = (date - today).num_days();

    match days_diff {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        diff if (-7..-1).contains(&diff) => format!("{} days ago", -diff),
        diff if diff > 1 && diff <= 7 => format!("in {} days", diff),
        _ => {
            if date.year() == today.year() {
                date.format("%b %d").to_string()
            } else {
                date.format("%b %d, %Y").to_string()
            }
        }
    }
}

/// Short form of an RFC 3339 timestamp for table cells, e.g. "today at 14:30".
///
/// Returns the input unchanged when it is not a timestamp.
pub fn format_human_datetime(value: &str, today: NaiveDate) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => {
            let utc = dt.with_timezone(&Utc);
            format!("{} at {}", format_human_date(utc.date_naive(), today), utc.format("%H:%M"))
        }
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_rfc3339_dates() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(parse_record_date("2024-01-15"), Some(expected));
        assert_eq!(parse_record_date("2024-01-15T10:30:00Z"), Some(expected));
        assert_eq!(parse_record_date("2024-01-15 10:30:00"), Some(expected));
        assert_eq!(parse_record_date("yesterday"), None);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert!(date_in_range(day, Some(day), Some(day)));
        assert!(date_in_range(day, None, None));
        assert!(!date_in_range(day, day.succ_opt(), None));
    }
}
