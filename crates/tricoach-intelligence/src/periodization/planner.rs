// ABOUTME: Phase planner splitting a plan length into ordered training phases
// ABOUTME: Short plans get base/build/taper, longer plans add a peak block
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::PeriodizationError;
use super::phase::{IntensityDistribution, PeriodizationPhase, TrainingFocus};
use crate::physiological_constants::periodization::{
    MAX_PLAN_WEEKS, MAX_TAPER_WEEKS, MIN_PLAN_WEEKS, SHORT_BASE_PERCENT, SHORT_MIN_BASE_WEEKS,
    SHORT_PLAN_MAX_WEEKS, SHORT_TAPER_PERCENT, STANDARD_BASE_PERCENT, STANDARD_MIN_BASE_WEEKS,
    STANDARD_MIN_PEAK_WEEKS, STANDARD_PEAK_PERCENT, STANDARD_TAPER_PERCENT,
};

/// One phase of a plan with its length and prescription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseConfig {
    /// Which phase this block is
    pub phase: PeriodizationPhase,
    /// Length of the block in weeks (never zero)
    pub weeks: u32,
    /// Training emphasis of the block
    pub focus: TrainingFocus,
    /// Time-in-zone split of the block
    pub intensity_distribution: IntensityDistribution,
}

impl PhaseConfig {
    /// Block of `weeks` for `phase`, with the phase's table values
    #[must_use]
    pub const fn new(phase: PeriodizationPhase, weeks: u32) -> Self {
        Self {
            phase,
            weeks,
            focus: phase.training_focus(),
            intensity_distribution: phase.intensity_distribution(),
        }
    }
}

/// Split `total_weeks` into ordered phases
///
/// Plans of up to eight weeks are base, build, taper. Longer plans are base,
/// build, peak, and a taper of at most two weeks. Blocks that would be zero
/// weeks long are left out, and the week counts always sum to `total_weeks`.
///
/// # Errors
///
/// Returns `PeriodizationError::InvalidPlanLength` when `total_weeks` is
/// outside 4..=52.
pub fn plan_phases(total_weeks: u32) -> Result<Vec<PhaseConfig>, PeriodizationError> {
    if !(MIN_PLAN_WEEKS..=MAX_PLAN_WEEKS).contains(&total_weeks) {
        return Err(PeriodizationError::InvalidPlanLength { total_weeks });
    }

    let blocks = if total_weeks <= SHORT_PLAN_MAX_WEEKS {
        short_plan_blocks(total_weeks)
    } else {
        standard_plan_blocks(total_weeks)
    };

    let phases: Vec<PhaseConfig> = blocks
        .into_iter()
        .filter(|(_, weeks)| *weeks > 0)
        .map(|(phase, weeks)| PhaseConfig::new(phase, weeks))
        .collect();

    debug!(
        total_weeks,
        phase_count = phases.len(),
        "Planned periodization phases"
    );

    Ok(phases)
}

/// Share of `total_weeks`, floored
const fn percent_of(total_weeks: u32, percent: u32) -> u32 {
    total_weeks * percent / 100
}

fn short_plan_blocks(total_weeks: u32) -> Vec<(PeriodizationPhase, u32)> {
    let base = percent_of(total_weeks, SHORT_BASE_PERCENT).max(SHORT_MIN_BASE_WEEKS);
    let taper = percent_of(total_weeks, SHORT_TAPER_PERCENT).min(MAX_TAPER_WEEKS);
    let build = total_weeks.saturating_sub(base + taper);

    vec![
        (PeriodizationPhase::Base, base),
        (PeriodizationPhase::Build, build),
        (PeriodizationPhase::Taper, taper),
    ]
}

fn standard_plan_blocks(total_weeks: u32) -> Vec<(PeriodizationPhase, u32)> {
    let base = percent_of(total_weeks, STANDARD_BASE_PERCENT).max(STANDARD_MIN_BASE_WEEKS);
    let taper = percent_of(total_weeks, STANDARD_TAPER_PERCENT).min(MAX_TAPER_WEEKS);
    let peak = percent_of(total_weeks, STANDARD_PEAK_PERCENT).max(STANDARD_MIN_PEAK_WEEKS);
    let build = total_weeks.saturating_sub(base + peak + taper);

    vec![
        (PeriodizationPhase::Base, base),
        (PeriodizationPhase::Build, build),
        (PeriodizationPhase::Peak, peak),
        (PeriodizationPhase::Taper, taper),
    ]
}
