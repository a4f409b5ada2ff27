//! Wire date formats
//!
//! Release dates travel as `YYYY-MM-DD`, add-dates as
//! `YYYY-MM-DDTHH:MM:SS`. Parsing a datetime falls back to the date-only
//! form at midnight.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Calendar date wire format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Datetime wire format
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a `YYYY-MM-DD` string; `None` for blank or malformed input
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.trim().is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Format a date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DDTHH:MM:SS` string, falling back to date-only at
/// midnight; `None` for blank or malformed input
pub fn parse_date_time(s: &str) -> Option<NaiveDateTime> {
    if s.trim().is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(s, DATE_TIME_FORMAT)
        .ok()
        .or_else(|| parse_date(s).and_then(|d| d.and_hms_opt(0, 0, 0)))
}

/// Format a datetime as `YYYY-MM-DDTHH:MM:SS`
pub fn format_date_time(date_time: NaiveDateTime) -> String {
    date_time.format(DATE_TIME_FORMAT).to_string()
}

/// Current timestamp, truncated to whole seconds to match the wire format
pub fn now() -> NaiveDateTime {
    let now = chrono::Utc::now().naive_utc();
    now.with_nanosecond(0).unwrap_or(now)
}
