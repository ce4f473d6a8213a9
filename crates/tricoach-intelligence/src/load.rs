// ABOUTME: Weekly training load aggregation over Monday-anchored calendar weeks
// ABOUTME: Sparse per-week totals of TSS and duration, sorted by week start
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::week_start;
use crate::models::ActivityRecord;

/// Training load totals for one calendar week
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklyLoadSummary {
    /// Monday that starts the week
    pub week_start: NaiveDate,
    /// Sum of TSS across the week's activities
    pub total_tss: f64,
    /// Number of activities in the week
    pub activity_count: u32,
    /// `total_tss / activity_count`, 0 for an empty week
    pub average_tss_per_activity: f64,
    /// Sum of activity durations in minutes
    pub total_duration: f64,
}

#[derive(Default)]
struct WeekAccumulator {
    total_tss: f64,
    total_duration: f64,
    activity_count: u32,
}

impl WeekAccumulator {
    fn add(&mut self, activity: &ActivityRecord) {
        self.total_tss += activity.tss;
        self.total_duration += activity.duration;
        self.activity_count += 1;
    }

    fn into_summary(self, week_start: NaiveDate) -> WeeklyLoadSummary {
        let average_tss_per_activity = if self.activity_count == 0 {
            0.0
        } else {
            self.total_tss / f64::from(self.activity_count)
        };
        WeeklyLoadSummary {
            week_start,
            total_tss: self.total_tss,
            activity_count: self.activity_count,
            average_tss_per_activity,
            total_duration: self.total_duration,
        }
    }
}

/// Group activities into Monday-start weeks and total each week
///
/// Only weeks containing at least one activity appear in the result, in
/// ascending week order. Input order does not matter here.
#[must_use]
pub fn aggregate_weekly_load(activities: &[ActivityRecord]) -> Vec<WeeklyLoadSummary> {
    let mut weeks: BTreeMap<NaiveDate, WeekAccumulator> = BTreeMap::new();
    for activity in activities {
        weeks.entry(week_start(activity.date)).or_default().add(activity);
    }

    weeks
        .into_iter()
        .map(|(start, totals)| totals.into_summary(start))
        .collect()
}
