//! Claim date handling
//!
//! Exports arrive with dates in whatever shape the source system produced.
//! Parsing is best-effort: a date that cannot be read is dropped, the claim
//! is kept.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date-only layouts, tried in order after RFC 3339
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%B %d, %Y",
];

/// Date-time layouts whose time part is discarded
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parses a claim date cell.
///
/// Returns `None` for blank or unrecognised input.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use core_kernel::parse_claim_date;
///
/// assert_eq!(parse_claim_date("2024-03-15"), NaiveDate::from_ymd_opt(2024, 3, 15));
/// assert_eq!(parse_claim_date("March 15, 2024"), NaiveDate::from_ymd_opt(2024, 3, 15));
/// assert_eq!(parse_claim_date("sometime"), None);
/// ```
pub fn parse_claim_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.date_naive());
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
                .map(|datetime| datetime.date())
        })
}

/// Renders an optional claim date as ISO `YYYY-MM-DD`, or an empty string
pub fn format_claim_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
