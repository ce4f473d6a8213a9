// ABOUTME: Error type for periodization planning
// ABOUTME: The only raising path of the analytics engine: plan length outside the accepted range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

use thiserror::Error;

use crate::errors::AppError;
use crate::physiological_constants::periodization::{MAX_PLAN_WEEKS, MIN_PLAN_WEEKS};

/// Periodization planning errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PeriodizationError {
    /// Requested plan length is outside the supported range
    #[error(
        "Invalid plan length: {total_weeks} weeks (must be between {min} and {max})",
        min = MIN_PLAN_WEEKS,
        max = MAX_PLAN_WEEKS
    )]
    InvalidPlanLength {
        /// The rejected week count
        total_weeks: u32,
    },
}

impl From<PeriodizationError> for AppError {
    fn from(error: PeriodizationError) -> Self {
        Self::out_of_range(error.to_string()).with_source(error)
    }
}
