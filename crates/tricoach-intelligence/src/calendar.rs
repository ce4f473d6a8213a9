// ABOUTME: Calendar-date arithmetic for week bucketing and race countdowns
// ABOUTME: Works on NaiveDate only so timezone and DST shifts cannot move a boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

//! Calendar helpers.
//!
//! History dates arrive as `YYYY-MM-DD` strings and are held as
//! [`NaiveDate`], a date with no time-of-day and no offset. Subtracting two of
//! them counts calendar days exactly, so a daylight-saving change can never
//! turn a 24-hour gap into 23 and shift a week start by one day.

use chrono::{Datelike, Duration, Local, NaiveDate};

use tricoach_core::constants::limits::DATE_FORMAT;

use crate::errors::{AppError, AppResult};

/// Monday that starts the ISO week containing `date`
///
/// Sunday belongs to the week that started six days earlier.
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let days_since_monday = i64::from(date.weekday().num_days_from_monday());
    date - Duration::days(days_since_monday)
}

/// Whole calendar days from `from` to `to`, negative when `to` is earlier
#[must_use]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Today's date on the local calendar
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a strict `YYYY-MM-DD` calendar date
///
/// # Errors
///
/// Returns `AppError` with `InvalidFormat` when the string is not a valid date
pub fn parse_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
        AppError::invalid_format(format!("Invalid date '{value}', expected YYYY-MM-DD"))
            .with_source(e)
    })
}
