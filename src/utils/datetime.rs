//! Date and time utility functions
//!
//! The backend sends timestamps as strings (usually RFC 3339). They are only
//! parsed for display; unparseable values are shown unchanged.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Default format for date-only values
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default format for timestamps, 12-hour clock
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %I:%M %p";

const NAIVE_DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Check that a strftime format string has no invalid specifiers
pub fn is_valid_format(format: &str) -> bool {
    !format.is_empty() && !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Parse a server timestamp into wall-clock time of `tz`.
///
/// Values with an offset are converted; naive values are taken as already local.
pub fn parse_timestamp_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz).naive_local());
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Format a timestamp in `tz`, shifted by `offset_hours`.
pub fn format_timestamp_in<Tz: TimeZone>(raw: &str, format: &str, offset_hours: i64, tz: &Tz) -> String {
    match parse_timestamp_in(raw, tz) {
        Some(dt) => (dt + Duration::hours(offset_hours)).format(format).to_string(),
        None => raw.to_string(),
    }
}

/// Format a timestamp in local time, shifted by `offset_hours`.
pub fn format_timestamp(raw: &str, format: &str, offset_hours: i64) -> String {
    format_timestamp_in(raw, format, offset_hours, &Local)
}

/// Format the date part of a value in `tz`.
pub fn format_date_in<Tz: TimeZone>(raw: &str, format: &str, tz: &Tz) -> String {
    match parse_timestamp_in(raw, tz) {
        Some(dt) => dt.date().format(format).to_string(),
        None => raw.to_string(),
    }
}

/// Format the date part of a value in local time.
pub fn format_date(raw: &str, format: &str) -> String {
    format_date_in(raw, format, &Local)
}
