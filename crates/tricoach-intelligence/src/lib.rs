// ABOUTME: Periodization and training-load analytics engine for endurance coaching
// ABOUTME: Pure, synchronous functions over immutable history values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

#![deny(unsafe_code)]

//! # TriCoach Intelligence
//!
//! Turns raw training history into phase plans, volume curves, and readiness
//! verdicts. Every function here is pure: it reads its arguments, allocates
//! its result, and touches no shared state, so all of them can be called
//! concurrently without synchronization.
//!
//! History slices (`FitnessDataPoint`, `ActivityRecord`) must be sorted
//! ascending by date. Nothing here re-sorts them.
//!
//! ## Modules
//!
//! - **periodization**: phase tables, phase planner, volume curve, plan assembly
//! - **trend**: form trend over a window of fitness points
//! - **load**: weekly training load aggregation
//! - **recovery**: recovery state, form bands, and race readiness
//! - **training_load**: daily CTL/ATL/TSB series from activities
//! - **snapshot**: combined coaching snapshot

// Re-export core modules so engine files can keep `use crate::errors::*` style paths
pub use tricoach_core::errors;
pub use tricoach_core::models;

/// Calendar-date helpers (week start, days between, date parsing)
pub mod calendar;
/// Weekly load aggregation
pub mod load;
/// Periodization planning
pub mod periodization;
/// Fixed coaching thresholds
pub mod physiological_constants;
/// Recovery and race readiness assessment
pub mod recovery;
/// Combined coaching snapshot
pub mod snapshot;
/// Daily fitness series from activities
pub mod training_load;
/// Form trend analysis
pub mod trend;

pub use load::{aggregate_weekly_load, WeeklyLoadSummary};
pub use periodization::{
    build_plan, intensity_distribution_for, plan_phases, training_focus_for, volumes_for,
    IntensityDistribution, PeriodizationError, PeriodizationPhase, PeriodizationPlan, PhaseConfig,
    TrainingFocus, WeeklyVolume,
};
pub use recovery::{
    assess_race_readiness, assess_race_readiness_from_today, assess_recovery, classify_form,
    FatigueLevel, FormStatus, RaceReadiness, RaceWindow, ReadinessConfidence, RecoveryAssessment,
};
pub use snapshot::CoachingSnapshot;
pub use training_load::{fitness_series, TrainingLoadWindows};
pub use trend::{analyze_recent_trend, analyze_trend, FormTrend, TrendDirection};
