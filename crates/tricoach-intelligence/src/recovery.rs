// ABOUTME: Recovery state and race readiness assessment from fitness/fatigue/form history
// ABOUTME: Fatigue banding, CTL ramp overreaching flag, TSB form bands, and race-day projection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

//! Recovery & readiness assessor
//!
//! Both assessments need at least seven daily points and return `None`
//! otherwise. A race date in the past also yields `None`; neither case is an
//! error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::{days_between, today};
use crate::models::FitnessDataPoint;
use crate::physiological_constants::{form, readiness, recovery};
use crate::trend::{analyze_trend, trailing};

/// Fatigue band derived from acute training load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FatigueLevel {
    /// ATL of 40 or less
    Low,
    /// ATL above 40
    Moderate,
    /// ATL above 70
    High,
    /// ATL above 90
    VeryHigh,
}

impl FatigueLevel {
    /// Band an ATL value; each boundary belongs to the lower band
    #[must_use]
    pub fn from_atl(atl: f64) -> Self {
        if atl > recovery::VERY_HIGH_ATL {
            Self::VeryHigh
        } else if atl > recovery::HIGH_ATL {
            Self::High
        } else if atl > recovery::MODERATE_ATL {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Rest days suggested for this band
    #[must_use]
    pub const fn suggested_recovery_days(self) -> u32 {
        match self {
            Self::VeryHigh => recovery::VERY_HIGH_REST_DAYS,
            Self::High => recovery::HIGH_REST_DAYS,
            Self::Moderate => recovery::MODERATE_REST_DAYS,
            Self::Low => 0,
        }
    }
}

/// Current recovery state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecoveryAssessment {
    /// Fatigue band of the latest ATL
    pub fatigue_level: FatigueLevel,
    /// Rest days suggested for the band
    pub suggested_recovery_days: u32,
    /// CTL gained across the seven-point window
    pub ramp_rate: f64,
    /// Whether `ramp_rate` exceeds 7
    pub is_overreaching: bool,
}

/// Form band of a TSB value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    /// TSB above 15
    RaceReady,
    /// TSB above 5
    Fresh,
    /// TSB from -10 to 5
    Optimal,
    /// TSB from -25 to below -10
    Tired,
    /// TSB below -25
    Overtrained,
}

/// Classify a TSB value into a form band
#[must_use]
pub fn classify_form(tsb: f64) -> FormStatus {
    if tsb > form::RACE_READY_TSB {
        FormStatus::RaceReady
    } else if tsb > form::FRESH_TSB {
        FormStatus::Fresh
    } else if tsb >= form::OPTIMAL_MIN_TSB {
        FormStatus::Optimal
    } else if tsb >= form::TIRED_MIN_TSB {
        FormStatus::Tired
    } else {
        FormStatus::Overtrained
    }
}

/// Assess fatigue and overreaching from the latest seven points
///
/// `ramp_rate` compares the latest CTL with the CTL seven points back,
/// counting the latest point as the last of the seven. The caller supplies
/// one point per day for this to be a weekly ramp.
#[must_use]
pub fn assess_recovery(points: &[FitnessDataPoint]) -> Option<RecoveryAssessment> {
    if points.len() < recovery::MIN_POINTS {
        debug!(points = points.len(), "Not enough data points for recovery assessment");
        return None;
    }
    let latest = points.last()?;
    let window_start = points.get(points.len() - recovery::RAMP_WINDOW_POINTS)?;

    let ramp_rate = latest.ctl - window_start.ctl;
    let is_overreaching = ramp_rate > recovery::OVERREACHING_RAMP_RATE;
    let fatigue_level = FatigueLevel::from_atl(latest.atl);

    if is_overreaching {
        debug!(ramp_rate, "CTL ramp rate indicates overreaching");
    }

    Some(RecoveryAssessment {
        fatigue_level,
        suggested_recovery_days: fatigue_level.suggested_recovery_days(),
        ramp_rate,
        is_overreaching,
    })
}

/// Time-to-race bucket driving the readiness recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaceWindow {
    /// Two days or fewer to go
    RaceWeek,
    /// Up to two weeks to go
    Taper,
    /// Up to four weeks to go
    FinalBuild,
    /// More than four weeks to go
    GeneralBuild,
}

impl RaceWindow {
    /// Bucket a countdown in days
    #[must_use]
    pub const fn from_days(days_until_race: u32) -> Self {
        if days_until_race <= readiness::RACE_WEEK_DAYS {
            Self::RaceWeek
        } else if days_until_race <= readiness::TAPER_DAYS {
            Self::Taper
        } else if days_until_race <= readiness::FINAL_BUILD_DAYS {
            Self::FinalBuild
        } else {
            Self::GeneralBuild
        }
    }

    /// Short advisory for the bucket
    #[must_use]
    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::RaceWeek => {
                "Race is imminent. Keep sessions short with a few race-pace openers and prioritize sleep."
            }
            Self::Taper => {
                "Taper window. Cut volume while keeping some intensity so form rises into race day."
            }
            Self::FinalBuild => {
                "Final build. Complete the last key race-specific sessions, then begin the taper."
            }
            Self::GeneralBuild => {
                "Plenty of time before race day. Keep building fitness with consistent training."
            }
        }
    }
}

/// Confidence tier of a readiness projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessConfidence {
    /// Race within a week and at least 14 points of history
    High,
    /// Race within three weeks
    Medium,
    /// Anything further out
    Low,
}

impl ReadinessConfidence {
    fn assess(days_until_race: u32, history_points: usize) -> Self {
        if days_until_race <= readiness::HIGH_CONFIDENCE_MAX_DAYS
            && history_points >= readiness::HIGH_CONFIDENCE_MIN_POINTS
        {
            Self::High
        } else if days_until_race <= readiness::MEDIUM_CONFIDENCE_MAX_DAYS {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Race readiness verdict and projected race-day form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceReadiness {
    /// Calendar days from today to the race
    pub days_until_race: u32,
    /// Form band of the latest TSB
    pub current_form: FormStatus,
    /// Latest TSB extrapolated to race day at the recent daily rate
    pub projected_tsb: f64,
    /// Countdown bucket the recommendation was chosen from
    pub race_window: RaceWindow,
    /// Short advisory for the countdown bucket
    pub recommendation: String,
    /// Confidence tier of the projection
    pub confidence: ReadinessConfidence,
}

/// Assess readiness for a race on `race_date`, as seen on `today`
///
/// The daily TSB rate is the trend of the last seven points spread over seven
/// days. Returns `None` with fewer than seven points or when the race date is
/// before `today`.
#[must_use]
pub fn assess_race_readiness(
    points: &[FitnessDataPoint],
    race_date: NaiveDate,
    today: NaiveDate,
) -> Option<RaceReadiness> {
    if points.len() < readiness::MIN_POINTS {
        debug!(points = points.len(), "Not enough data points for race readiness");
        return None;
    }
    let Ok(days_until_race) = u32::try_from(days_between(today, race_date)) else {
        debug!(%race_date, %today, "Race date has already passed");
        return None;
    };
    let latest = points.last()?;

    let daily_tsb_change = analyze_trend(trailing(points, readiness::PROJECTION_WINDOW_POINTS))
        .map_or(0.0, |trend| {
            trend.tsb_change / readiness::PROJECTION_WINDOW_DAYS
        });
    let projected_tsb = daily_tsb_change.mul_add(f64::from(days_until_race), latest.tsb);
    let race_window = RaceWindow::from_days(days_until_race);

    Some(RaceReadiness {
        days_until_race,
        current_form: classify_form(latest.tsb),
        projected_tsb,
        race_window,
        recommendation: race_window.recommendation().to_owned(),
        confidence: ReadinessConfidence::assess(days_until_race, points.len()),
    })
}

/// [`assess_race_readiness`] with today taken from the local calendar
#[must_use]
pub fn assess_race_readiness_from_today(
    points: &[FitnessDataPoint],
    race_date: NaiveDate,
) -> Option<RaceReadiness> {
    assess_race_readiness(points, race_date, today())
}
