// ABOUTME: Weekly volume curve generator with overload/recovery cycling and taper decay
// ABOUTME: Produces one rounded volume multiplier per plan week, numbered globally from 1
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

use serde::{Deserialize, Serialize};

use super::phase::PeriodizationPhase;
use super::planner::PhaseConfig;
use crate::physiological_constants::volume::{
    BASE_PHASE_MULTIPLIER, BUILD_PHASE_MULTIPLIER, CYCLE_LENGTH, CYCLE_RECOVERY_WEEK_FACTOR,
    CYCLE_WEEK_ONE_FACTOR, CYCLE_WEEK_THREE_FACTOR, CYCLE_WEEK_TWO_FACTOR, PEAK_PHASE_MULTIPLIER,
    RECOVERY_PHASE_MULTIPLIER, TAPER_DECAY_FRACTION, TAPER_PHASE_MULTIPLIER,
};

/// Planned training volume for one week of a plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklyVolume {
    /// Plan week, starting at 1 and contiguous across phases
    pub week: u32,
    /// Volume relative to the athlete's reference week, rounded to 0.01
    pub volume_multiplier: f64,
    /// Phase the week belongs to
    pub phase: PeriodizationPhase,
}

/// Baseline volume multiplier for a phase before cycling is applied
#[must_use]
pub const fn phase_base_multiplier(phase: PeriodizationPhase) -> f64 {
    match phase {
        PeriodizationPhase::Base => BASE_PHASE_MULTIPLIER,
        PeriodizationPhase::Build => BUILD_PHASE_MULTIPLIER,
        PeriodizationPhase::Peak => PEAK_PHASE_MULTIPLIER,
        PeriodizationPhase::Taper => TAPER_PHASE_MULTIPLIER,
        PeriodizationPhase::Recovery => RECOVERY_PHASE_MULTIPLIER,
    }
}

/// Volume multiplier for every week of `phases`
///
/// Non-taper phases run a four-week cycle of 0.85, 0.95, 1.05 and 0.70 times
/// the phase baseline, so every fourth week of a block is a recovery week.
/// The taper sheds volume linearly from its baseline. Multipliers are rounded
/// with [`round_multiplier`].
#[must_use]
pub fn volumes_for(phases: &[PhaseConfig]) -> Vec<WeeklyVolume> {
    let total_weeks: u32 = phases.iter().map(|p| p.weeks).sum();
    let mut volumes = Vec::with_capacity(total_weeks as usize);
    let mut week = 0;

    for config in phases {
        let base = phase_base_multiplier(config.phase);
        for week_in_phase in 0..config.weeks {
            week += 1;
            let raw = match config.phase {
                PeriodizationPhase::Taper => taper_multiplier(base, week_in_phase, config.weeks),
                PeriodizationPhase::Base
                | PeriodizationPhase::Build
                | PeriodizationPhase::Peak
                | PeriodizationPhase::Recovery => base * cycle_factor(week_in_phase),
            };
            volumes.push(WeeklyVolume {
                week,
                volume_multiplier: round_multiplier(raw),
                phase: config.phase,
            });
        }
    }

    volumes
}

/// Overload/recovery factor for the zero-based week within a phase
fn cycle_factor(week_in_phase: u32) -> f64 {
    match (week_in_phase + 1) % CYCLE_LENGTH {
        1 => CYCLE_WEEK_ONE_FACTOR,
        2 => CYCLE_WEEK_TWO_FACTOR,
        3 => CYCLE_WEEK_THREE_FACTOR,
        _ => CYCLE_RECOVERY_WEEK_FACTOR,
    }
}

fn taper_multiplier(base: f64, week_in_phase: u32, phase_weeks: u32) -> f64 {
    let progress = f64::from(week_in_phase) / f64::from(phase_weeks);
    base * TAPER_DECAY_FRACTION.mul_add(-progress, 1.0)
}

/// Absorbs binary representation error so decimal ties round up
const ROUNDING_GUARD: f64 = 1e-9;

/// Round to the nearest hundredth, decimal ties rounding up
///
/// `1.1 * 0.95` is 1.045 in decimal but slightly below it in binary; the guard
/// makes it round to 1.05 rather than 1.04.
#[must_use]
pub fn round_multiplier(value: f64) -> f64 {
    value.mul_add(100.0, ROUNDING_GUARD).round() / 100.0
}
