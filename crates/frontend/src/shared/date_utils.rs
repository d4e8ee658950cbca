//! Timestamp formatting for admin tables
//!
//! The services are not consistent about timestamps: orders and reports are
//! ISO-8601 strings while products come back in RFC 2822 form
//! ("Fri, 15 Mar 2024 14:02:26 GMT"). Both render as `DD.MM.YYYY HH:MM:SS`.

use chrono::{DateTime, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Placeholder for a missing timestamp
pub const NO_VALUE: &str = "-";

/// Format a service timestamp, leaving unrecognised input untouched
pub fn format_datetime(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format(DISPLAY_FORMAT).to_string();
        }
    }
    raw.to_string()
}

/// Table cell text for an optional timestamp
pub fn format_optional(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => format_datetime(raw),
        None => NO_VALUE.to_string(),
    }
}
