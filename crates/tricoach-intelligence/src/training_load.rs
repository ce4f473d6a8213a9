// ABOUTME: Daily CTL/ATL/TSB series derived from activity history with exponential moving averages
// ABOUTME: Fills rest days with zero TSS so the series has exactly one point per calendar day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

//! Training load series
//!
//! EMA formula: `EMA_today = TSS_today x α + EMA_yesterday x (1 - α)` with
//! `α = 2 / (N + 1)`, N being the window in days.
//!
//! # Scientific References
//!
//! - Coggan, A. (2003). "Training and Racing Using a Power Meter." *Peaksware LLC*.
//! - Banister, E.W. (1991). "Modeling elite athletic performance." *Physiological Testing of Elite Athletes*.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::days_between;
use crate::errors::{AppError, AppResult};
use crate::models::{ActivityRecord, FitnessDataPoint};
use crate::physiological_constants::training_load::{ATL_WINDOW_DAYS, CTL_WINDOW_DAYS};

/// Smoothing windows for chronic and acute load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingLoadWindows {
    /// CTL window in days (default 42 for fitness)
    pub ctl_days: i64,
    /// ATL window in days (default 7 for fatigue)
    pub atl_days: i64,
}

impl Default for TrainingLoadWindows {
    fn default() -> Self {
        Self {
            ctl_days: CTL_WINDOW_DAYS,
            atl_days: ATL_WINDOW_DAYS,
        }
    }
}

impl TrainingLoadWindows {
    /// Custom windows, validated
    ///
    /// # Errors
    ///
    /// Returns `AppError::invalid_input` if either window is not positive
    pub fn new(ctl_days: i64, atl_days: i64) -> AppResult<Self> {
        if ctl_days <= 0 || atl_days <= 0 {
            return Err(AppError::invalid_input(format!(
                "Window sizes must be positive, got ctl={ctl_days} atl={atl_days}"
            )));
        }
        Ok(Self { ctl_days, atl_days })
    }

    #[allow(clippy::cast_precision_loss)]
    fn alpha(window_days: i64) -> f64 {
        2.0 / (window_days as f64 + 1.0)
    }
}

/// Derive a daily fitness series from activities
///
/// Produces one point per calendar day from the earliest to the latest
/// activity. Several activities on one day add up; days without activities
/// count as zero TSS. Both averages start from zero.
///
/// # Errors
///
/// Returns `AppError::invalid_input` if a window is not positive
pub fn fitness_series(
    activities: &[ActivityRecord],
    windows: TrainingLoadWindows,
) -> AppResult<Vec<FitnessDataPoint>> {
    let windows = TrainingLoadWindows::new(windows.ctl_days, windows.atl_days)?;

    let (Some(first_date), Some(last_date)) = (
        activities.iter().map(|a| a.date).min(),
        activities.iter().map(|a| a.date).max(),
    ) else {
        return Ok(Vec::new());
    };

    let mut daily_tss: HashMap<NaiveDate, f64> = HashMap::new();
    for activity in activities {
        *daily_tss.entry(activity.date).or_insert(0.0) += activity.tss;
    }

    let ctl_alpha = TrainingLoadWindows::alpha(windows.ctl_days);
    let atl_alpha = TrainingLoadWindows::alpha(windows.atl_days);
    let span = days_between(first_date, last_date);

    let mut ctl = 0.0;
    let mut atl = 0.0;
    let mut series = Vec::with_capacity(usize::try_from(span + 1).unwrap_or_default());
    for day_offset in 0..=span {
        let date = first_date + Duration::days(day_offset);
        let tss = daily_tss.get(&date).copied().unwrap_or(0.0);
        ctl = tss.mul_add(ctl_alpha, ctl * (1.0 - ctl_alpha));
        atl = tss.mul_add(atl_alpha, atl * (1.0 - atl_alpha));
        series.push(FitnessDataPoint::from_loads(date, ctl, atl));
    }

    debug!(
        days = series.len(),
        activities = activities.len(),
        "Derived daily fitness series"
    );

    Ok(series)
}
