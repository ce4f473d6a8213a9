// ABOUTME: Daily fitness/fatigue/form data point (CTL, ATL, TSB)
// ABOUTME: Supplied by external history sources in ascending date order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of fitness/fatigue/form history
///
/// Sequences of these points must be sorted ascending by `date`. Window
/// computations (trend deltas, ramp rate) index into the slice and assume one
/// point per calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitnessDataPoint {
    /// Calendar date of the snapshot (`YYYY-MM-DD`)
    pub date: NaiveDate,
    /// Chronic Training Load - long-term fitness proxy
    pub ctl: f64,
    /// Acute Training Load - short-term fatigue proxy
    pub atl: f64,
    /// Training Stress Balance (`ctl - atl`), negative when fatigued
    pub tsb: f64,
}

impl FitnessDataPoint {
    /// Build a point from CTL and ATL, deriving TSB
    #[must_use]
    pub fn from_loads(date: NaiveDate, ctl: f64, atl: f64) -> Self {
        Self {
            date,
            ctl,
            atl,
            tsb: ctl - atl,
        }
    }
}
