// ABOUTME: Coaching snapshot bundling trend, weekly load, recovery, and readiness for one athlete
// ABOUTME: The decision-facing artifact handed to the coaching context builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::load::{aggregate_weekly_load, WeeklyLoadSummary};
use crate::models::{ActivityRecord, FitnessDataPoint};
use crate::recovery::{
    assess_race_readiness, assess_recovery, classify_form, FormStatus, RaceReadiness,
    RecoveryAssessment,
};
use crate::trend::{analyze_recent_trend, FormTrend};

/// Everything the engine can say about an athlete's current state
///
/// Each part keeps its own absent semantics: a short history leaves
/// `recovery` empty without affecting `weekly_load`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachingSnapshot {
    /// Date the snapshot was taken for
    pub as_of: NaiveDate,
    /// Latest fitness point, if any history exists
    pub latest: Option<FitnessDataPoint>,
    /// Form band of the latest TSB
    pub current_form: Option<FormStatus>,
    /// Trend over the trailing window
    pub trend: Option<FormTrend>,
    /// Per-week load totals
    pub weekly_load: Vec<WeeklyLoadSummary>,
    /// Fatigue and overreaching assessment
    pub recovery: Option<RecoveryAssessment>,
    /// Race readiness, when a race date was given and has not passed
    pub race_readiness: Option<RaceReadiness>,
}

impl CoachingSnapshot {
    /// Assemble a snapshot from sorted history
    #[must_use]
    pub fn build(
        points: &[FitnessDataPoint],
        activities: &[ActivityRecord],
        race_date: Option<NaiveDate>,
        as_of: NaiveDate,
        trend_window: usize,
    ) -> Self {
        let latest = points.last().copied();
        Self {
            as_of,
            latest,
            current_form: latest.map(|p| classify_form(p.tsb)),
            trend: analyze_recent_trend(points, trend_window),
            weekly_load: aggregate_weekly_load(activities),
            recovery: assess_recovery(points),
            race_readiness: race_date.and_then(|race| assess_race_readiness(points, race, as_of)),
        }
    }
}
