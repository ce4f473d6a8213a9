// ABOUTME: Periodization planning: phase classification, phase split, volume curve, and plan assembly
// ABOUTME: Independent of training history; a plan is derived from its length alone
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

//! Periodization engine
//!
//! ```rust
//! use tricoach_intelligence::periodization::{build_plan, PeriodizationPhase};
//!
//! let plan = build_plan(12)?;
//! assert_eq!(plan.weekly_volumes.len(), 12);
//! assert_eq!(plan.phases[0].phase, PeriodizationPhase::Base);
//! # Ok::<(), tricoach_intelligence::periodization::PeriodizationError>(())
//! ```

/// Planning error type
pub mod error;
/// Phase lookup tables (intensity distribution, training focus)
pub mod phase;
/// Plan assembly
pub mod plan;
/// Phase split by plan length
pub mod planner;
/// Weekly volume curve
pub mod volume;

pub use error::PeriodizationError;
pub use phase::{
    intensity_distribution_for, training_focus_for, IntensityDistribution, PeriodizationPhase,
    TrainingFocus,
};
pub use plan::{build_plan, PeriodizationPlan};
pub use planner::{plan_phases, PhaseConfig};
pub use volume::{phase_base_multiplier, round_multiplier, volumes_for, WeeklyVolume};
