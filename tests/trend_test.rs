// ABOUTME: Integration tests for form trend analysis over fitness history
// ABOUTME: Covers absent results, direction thresholds, and trailing windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{daily_points, date, points_with_tsb};
use tricoach::intelligence::{analyze_recent_trend, analyze_trend, TrendDirection};

#[test]
fn test_trend_needs_two_points() {
    common::init_test_logging();
    assert!(analyze_trend(&[]).is_none());
    assert!(analyze_trend(&points_with_tsb(date(2024, 5, 1), &[4.0])).is_none());
}

#[test]
fn test_rising_tsb_is_improving() {
    let points = points_with_tsb(date(2024, 5, 1), &[-2.0, 2.0]);
    let trend = analyze_trend(&points).unwrap();
    assert_eq!(trend.direction, TrendDirection::Improving);
    assert!((trend.tsb_change - 4.0).abs() < 1e-9);
}

#[test]
fn test_falling_tsb_is_declining() {
    let points = points_with_tsb(date(2024, 5, 1), &[10.0, 5.0, 0.0]);
    let trend = analyze_trend(&points).unwrap();
    assert_eq!(trend.direction, TrendDirection::Declining);
    assert!((trend.current_tsb - 0.0).abs() < 1e-9);
    assert!((trend.average_tsb - 5.0).abs() < 1e-9);
}

#[test]
fn test_change_of_exactly_three_is_stable() {
    let up = points_with_tsb(date(2024, 5, 1), &[0.0, 3.0]);
    let down = points_with_tsb(date(2024, 5, 1), &[0.0, -3.0]);
    assert_eq!(analyze_trend(&up).unwrap().direction, TrendDirection::Stable);
    assert_eq!(analyze_trend(&down).unwrap().direction, TrendDirection::Stable);
}

#[test]
fn test_load_changes_use_first_and_last_point() {
    let points = daily_points(date(2024, 5, 1), &[(40.0, 50.0), (90.0, 10.0), (44.0, 47.0)]);
    let trend = analyze_trend(&points).unwrap();
    assert!((trend.ctl_change - 4.0).abs() < 1e-9);
    assert!((trend.atl_change - -3.0).abs() < 1e-9);
    assert!((trend.tsb_change - 7.0).abs() < 1e-9);
    assert_eq!(trend.direction, TrendDirection::Improving);
}

#[test]
fn test_recent_trend_uses_trailing_window() {
    let points = points_with_tsb(
        date(2024, 5, 1),
        &[-20.0, -20.0, -20.0, 5.0, 5.0, 5.0, 5.0],
    );
    let full = analyze_trend(&points).unwrap();
    assert_eq!(full.direction, TrendDirection::Improving);

    let recent = analyze_recent_trend(&points, 4).unwrap();
    assert_eq!(recent.direction, TrendDirection::Stable);
    assert!((recent.average_tsb - 5.0).abs() < 1e-9);
}

#[test]
fn test_recent_trend_window_larger_than_history() {
    let points = points_with_tsb(date(2024, 5, 1), &[0.0, 8.0]);
    let recent = analyze_recent_trend(&points, 30).unwrap();
    assert_eq!(recent, analyze_trend(&points).unwrap());
    assert!(analyze_recent_trend(&points, 1).is_none());
}
