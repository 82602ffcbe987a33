//! Lenient date parsing for spreadsheet-style values.
//!
//! Dates arrive in whatever format the exporting tool produced. Parsing
//! tries a fixed format list in order; ambiguous day/month values resolve to
//! the first format that accepts them (US order before European, matching
//! the original dashboard). Unparseable values are represented downstream as
//! the empty string.

use chrono::{NaiveDate, NaiveDateTime};

use enroll_model::schema::{DATE_FORMATS, MONTH_LABEL_FORMATS};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parses a date cell, trying date formats first and then datetime formats
/// with the time discarded. Returns `None` for empty or unparseable values.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(date);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(datetime.date());
        }
    }
    None
}

/// Interprets a column label as a calendar month ("Mar-2025", "March-2025",
/// "03-2025"), anchored to the first of the month.
pub fn parse_month_label(label: &str) -> Option<NaiveDate> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return None;
    }
    // chrono requires a day component, so anchor one before parsing.
    let anchored = format!("{trimmed}-01");
    for fmt in MONTH_LABEL_FORMATS {
        let fmt_with_day = format!("{fmt}-%d");
        if let Ok(date) = NaiveDate::parse_from_str(&anchored, &fmt_with_day) {
            return Some(date);
        }
    }
    None
}

/// Coerces a date cell to ISO-8601 (`YYYY-MM-DD`); unparseable values become
/// the empty string, the pipeline's null marker.
pub fn to_iso_date(value: &str) -> String {
    parse_date(value)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Parses an already-coerced ISO date cell.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
