// ABOUTME: Raw activity record used for weekly load aggregation
// ABOUTME: Date, duration in minutes, training stress score, and optional sport type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::SportType;

/// A completed training session as reported by the training log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Calendar date the session took place (`YYYY-MM-DD`)
    pub date: NaiveDate,
    /// Session duration in minutes
    pub duration: f64,
    /// Training Stress Score for the session
    pub tss: f64,
    /// Discipline, when the source reports one
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<SportType>,
}

impl ActivityRecord {
    /// Create a record without a sport type
    #[must_use]
    pub const fn new(date: NaiveDate, duration: f64, tss: f64) -> Self {
        Self {
            date,
            duration,
            tss,
            activity_type: None,
        }
    }

    /// Attach a sport type
    #[must_use]
    pub fn with_type(mut self, activity_type: SportType) -> Self {
        self.activity_type = Some(activity_type);
        self
    }
}
