// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Display formatting of dates for the dashboard tables.
//!
//! Every date is rendered in Indian English with a two-digit day, the short
//! month name and the full year: `2024-03-05` becomes `05 Mar 2024`. Input that
//! does not describe a date renders as [`INVALID_DATE`] instead of failing.
//!
//! No timezone conversion happens. A timestamp carrying an offset is shown as
//! the calendar date in that offset; naive timestamps keep their own date.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use shelfmark_core::{Result, ShelfmarkError};

/// Locale whose conventions [`format_naive_date`] follows.
pub const DISPLAY_LOCALE: &str = "en-IN";

/// Rendered in place of a date that could not be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

// en-IN abbreviates September to four letters
const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
];

const MONTHS_LONG: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Format a date string for display, e.g. `"2024-03-05"` → `"05 Mar 2024"`.
///
/// Returns [`INVALID_DATE`] when `input` is not a recognised date.
///
/// ```
/// use shelfmark::date_format::{format_date, INVALID_DATE};
///
/// assert_eq!(format_date("2024-03-05"), "05 Mar 2024");
/// assert_eq!(format_date("2024-09-17T08:15:00+05:30"), "17 Sept 2024");
/// assert_eq!(format_date("not a date"), INVALID_DATE);
/// ```
pub fn format_date(input: &str) -> String {
    try_format_date(input).unwrap_or_else(|_| INVALID_DATE.to_string())
}

/// Like [`format_date`] but reports unparseable input as an error.
///
/// # Errors
/// Returns [`ShelfmarkError::InvalidDate`] if `input` is not a recognised date.
pub fn try_format_date(input: &str) -> Result<String> {
    parse_date(input).map(format_naive_date)
}

/// Render a calendar date as `dd Mon yyyy` in the display locale.
pub fn format_naive_date(date: NaiveDate) -> String {
    let month = MONTHS_SHORT[date.month0() as usize];
    format!("{:02} {} {}", date.day(), month, date.year())
}

/// Parse the date forms the dashboard receives.
///
/// Accepted, after trimming surrounding whitespace:
///
/// - RFC 3339 timestamps: `2024-03-05T10:00:00Z`, `2024-03-05T23:30:00+05:30`
/// - naive timestamps: `2024-03-05T10:00[:00[.000]]`, also with a space separator
/// - plain dates: `2024-03-05`, `2024/03/05`
/// - RFC 2822: `Tue, 5 Mar 2024 10:00:00 +0000`
/// - the display form itself: `05 Mar 2024`, `5 Sept 2024`, `5 March 2024`
///
/// # Errors
/// Returns [`ShelfmarkError::InvalidDate`] for anything else, including
/// well-formed strings naming impossible dates such as `2023-02-29`.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.date_naive());
    }

    if let Some(timestamp) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
    {
        return Ok(timestamp.date());
    }

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
    {
        return Ok(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(timestamp.date_naive());
    }

    parse_display_form(trimmed).ok_or_else(|| ShelfmarkError::invalid_date(input))
}

fn parse_display_form(input: &str) -> Option<NaiveDate> {
    let mut parts = input.split_whitespace();
    let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let day = day.parse().ok()?;
    let month = month_number(month)?;
    let year = year.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_number(name: &str) -> Option<u32> {
    MONTHS_SHORT
        .iter()
        .zip(MONTHS_LONG)
        .position(|(short, long)| {
            name.eq_ignore_ascii_case(short)
                || name.eq_ignore_ascii_case(long)
                || name.eq_ignore_ascii_case(&long[..3])
        })
        .and_then(|index| u32::try_from(index + 1).ok())
}
