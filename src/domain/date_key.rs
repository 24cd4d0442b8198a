//! Ledger date keys (`YYYY-M-D`).

use chrono::{Datelike, NaiveDate};

/// Parse a ledger date key.
///
/// Month and day may be one or two digits. Returns `None` for anything that is
/// not exactly three dash-separated numeric parts forming a real calendar date.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    let mut parts = key.split('-');
    let year = parts.next()?;
    let month = parts.next()?;
    let day = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    if !is_digits(year, 4, 4) || !is_digits(month, 1, 2) || !is_digits(day, 1, 2) {
        return None;
    }

    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

/// Format a date as a zero-padded ledger key (`2024-03-05`).
pub fn format_date_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

fn is_digits(s: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}
