// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and fitness/activity history builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::cast_possible_wrap
)]
//! Shared test utilities for `tricoach`

use std::sync::Once;

use chrono::{Duration, NaiveDate};
use tricoach::models::{ActivityRecord, FitnessDataPoint};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Shorthand for a calendar date
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Consecutive daily points starting at `start`, one per `(ctl, atl)` pair
pub fn daily_points(start: NaiveDate, loads: &[(f64, f64)]) -> Vec<FitnessDataPoint> {
    loads
        .iter()
        .enumerate()
        .map(|(offset, &(ctl, atl))| {
            FitnessDataPoint::from_loads(start + Duration::days(offset as i64), ctl, atl)
        })
        .collect()
}

/// `count` consecutive daily points with constant CTL/ATL
pub fn flat_points(start: NaiveDate, count: usize, ctl: f64, atl: f64) -> Vec<FitnessDataPoint> {
    daily_points(start, &vec![(ctl, atl); count])
}

/// Daily points with CTL fixed at 50 and the given TSB values
pub fn points_with_tsb(start: NaiveDate, tsb_values: &[f64]) -> Vec<FitnessDataPoint> {
    let loads: Vec<(f64, f64)> = tsb_values.iter().map(|tsb| (50.0, 50.0 - tsb)).collect();
    daily_points(start, &loads)
}

/// One activity per day from `start` with constant TSS and duration
pub fn daily_activities(start: NaiveDate, days: usize, tss: f64) -> Vec<ActivityRecord> {
    (0..days)
        .map(|offset| ActivityRecord::new(start + Duration::days(offset as i64), 60.0, tss))
        .collect()
}
