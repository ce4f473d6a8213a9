// ABOUTME: Core history provider trait and query types
// ABOUTME: Inclusive date ranges and the per-athlete history container shared by providers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::{ActivityRecord, FitnessDataPoint};

/// Inclusive calendar range; an open end is unbounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    /// First date included
    pub start: Option<NaiveDate>,
    /// Last date included
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Range covering all history
    #[must_use]
    pub const fn all() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Build a range, rejecting one that ends before it starts
    ///
    /// # Errors
    ///
    /// Returns `AppError::invalid_input` if `start` is after `end`
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> AppResult<Self> {
        if let (Some(from), Some(to)) = (start, end) {
            if from > to {
                return Err(AppError::invalid_input(format!(
                    "Date range start {from} is after end {to}"
                )));
            }
        }
        Ok(Self { start, end })
    }

    /// Whether `date` falls inside the range
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        !matches!(self.start, Some(start) if date < start)
            && !matches!(self.end, Some(end) if date > end)
    }
}

/// Everything a source knows about one athlete
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AthleteHistory {
    /// Completed sessions
    #[serde(default)]
    pub activities: Vec<ActivityRecord>,
    /// Daily fitness/fatigue/form series
    #[serde(default)]
    pub fitness: Vec<FitnessDataPoint>,
}

impl AthleteHistory {
    /// Activities inside `range`, ascending by date
    #[must_use]
    pub fn activities_in(&self, range: DateRange) -> Vec<ActivityRecord> {
        let mut selected: Vec<ActivityRecord> = self
            .activities
            .iter()
            .filter(|activity| range.contains(activity.date))
            .cloned()
            .collect();
        selected.sort_by_key(|activity| activity.date);
        selected
    }

    /// Fitness points inside `range`, ascending by date
    #[must_use]
    pub fn fitness_in(&self, range: DateRange) -> Vec<FitnessDataPoint> {
        let mut selected: Vec<FitnessDataPoint> = self
            .fitness
            .iter()
            .filter(|point| range.contains(point.date))
            .copied()
            .collect();
        selected.sort_by_key(|point| point.date);
        selected
    }
}

/// Source of athlete training history
///
/// Implementations return data sorted ascending by date and restricted to
/// the requested inclusive range. An unknown athlete is
/// `ErrorCode::ResourceNotFound`.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &'static str;

    /// Activities for `athlete_id` within `range`
    async fn activities(&self, athlete_id: &str, range: DateRange)
        -> AppResult<Vec<ActivityRecord>>;

    /// Fitness points for `athlete_id` within `range`
    async fn fitness(&self, athlete_id: &str, range: DateRange)
        -> AppResult<Vec<FitnessDataPoint>>;
}
