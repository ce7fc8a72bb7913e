//! Tests for best-effort claim date parsing

use chrono::NaiveDate;
use core_kernel::{format_claim_date, parse_claim_date};

fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

#[test]
fn test_iso_date() {
    assert_eq!(parse_claim_date("2023-07-01"), ymd(2023, 7, 1));
}

#[test]
fn test_rfc3339_timestamp_keeps_date() {
    assert_eq!(parse_claim_date("2023-07-01T10:15:00Z"), ymd(2023, 7, 1));
}

#[test]
fn test_naive_datetime_keeps_date() {
    assert_eq!(parse_claim_date("2023-07-01 23:59:59"), ymd(2023, 7, 1));
}

#[test]
fn test_slash_dates_prefer_month_first() {
    assert_eq!(parse_claim_date("03/04/2023"), ymd(2023, 3, 4));
    // day-first only when month-first is impossible
    assert_eq!(parse_claim_date("25/12/2023"), ymd(2023, 12, 25));
}

#[test]
fn test_named_months() {
    assert_eq!(parse_claim_date("5 Jan 2022"), ymd(2022, 1, 5));
    assert_eq!(parse_claim_date("January 5, 2022"), ymd(2022, 1, 5));
}

#[test]
fn test_blank_and_garbage_are_none() {
    assert_eq!(parse_claim_date(""), None);
    assert_eq!(parse_claim_date("   "), None);
    assert_eq!(parse_claim_date("yesterday-ish"), None);
    assert_eq!(parse_claim_date("2023-02-30"), None);
}

#[test]
fn test_format_claim_date() {
    assert_eq!(format_claim_date(ymd(2024, 1, 9)), "2024-01-09");
    assert_eq!(format_claim_date(None), "");
}
