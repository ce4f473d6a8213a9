// ABOUTME: Plan assembler composing the phase planner and the volume curve generator
// ABOUTME: Produces the immutable PeriodizationPlan artifact from a plan length
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

use serde::{Deserialize, Serialize};

use super::error::PeriodizationError;
use super::planner::{plan_phases, PhaseConfig};
use super::volume::{volumes_for, WeeklyVolume};

/// A complete periodized plan
///
/// `phases` week counts sum to `total_weeks`, and `weekly_volumes` holds one
/// entry per week numbered 1..=`total_weeks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodizationPlan {
    /// Plan length in weeks
    pub total_weeks: u32,
    /// Ordered phase blocks
    pub phases: Vec<PhaseConfig>,
    /// Per-week volume multipliers
    pub weekly_volumes: Vec<WeeklyVolume>,
}

/// Build the periodized plan for `total_weeks`
///
/// # Errors
///
/// Returns `PeriodizationError::InvalidPlanLength` when `total_weeks` is
/// outside 4..=52.
pub fn build_plan(total_weeks: u32) -> Result<PeriodizationPlan, PeriodizationError> {
    let phases = plan_phases(total_weeks)?;
    let weekly_volumes = volumes_for(&phases);
    Ok(PeriodizationPlan {
        total_weeks,
        phases,
        weekly_volumes,
    })
}
