// ABOUTME: Fixed coaching constants for periodization, trend, recovery, and readiness analysis
// ABOUTME: Thresholds are deliberately not configurable so coaching decisions are reproducible
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

//! Physiological and coaching constants
//!
//! Every threshold the engine classifies against lives here. None of them are
//! read from configuration.

/// Plan length bounds and phase split ratios
///
/// Ratios are expressed in percent so the planner can floor with integer
/// arithmetic.
pub mod periodization {
    /// Shortest plan the planner accepts (weeks)
    pub const MIN_PLAN_WEEKS: u32 = 4;
    /// Longest plan the planner accepts (weeks)
    pub const MAX_PLAN_WEEKS: u32 = 52;
    /// Plans up to this length use the short (base/build/taper) split
    pub const SHORT_PLAN_MAX_WEEKS: u32 = 8;

    /// Short plan: base share of total weeks (%)
    pub const SHORT_BASE_PERCENT: u32 = 40;
    /// Short plan: minimum base weeks
    pub const SHORT_MIN_BASE_WEEKS: u32 = 2;
    /// Short plan: taper share of total weeks (%)
    pub const SHORT_TAPER_PERCENT: u32 = 20;

    /// Standard plan: base share of total weeks (%)
    pub const STANDARD_BASE_PERCENT: u32 = 35;
    /// Standard plan: minimum base weeks
    pub const STANDARD_MIN_BASE_WEEKS: u32 = 3;
    /// Standard plan: taper share of total weeks (%)
    pub const STANDARD_TAPER_PERCENT: u32 = 15;
    /// Standard plan: peak share of total weeks (%)
    pub const STANDARD_PEAK_PERCENT: u32 = 15;
    /// Standard plan: minimum peak weeks
    pub const STANDARD_MIN_PEAK_WEEKS: u32 = 2;

    /// Upper bound on taper length for any plan
    pub const MAX_TAPER_WEEKS: u32 = 2;
}

/// Weekly volume curve multipliers
pub mod volume {
    /// Base phase volume relative to the athlete's reference week
    pub const BASE_PHASE_MULTIPLIER: f64 = 0.8;
    /// Build phase volume
    pub const BUILD_PHASE_MULTIPLIER: f64 = 1.0;
    /// Peak phase volume
    pub const PEAK_PHASE_MULTIPLIER: f64 = 1.1;
    /// Taper phase starting volume
    pub const TAPER_PHASE_MULTIPLIER: f64 = 0.5;
    /// Recovery phase volume
    pub const RECOVERY_PHASE_MULTIPLIER: f64 = 0.6;

    /// Length of the overload/recovery cycle (weeks)
    pub const CYCLE_LENGTH: u32 = 4;
    /// First week of the cycle
    pub const CYCLE_WEEK_ONE_FACTOR: f64 = 0.85;
    /// Second week of the cycle
    pub const CYCLE_WEEK_TWO_FACTOR: f64 = 0.95;
    /// Third (overload) week of the cycle
    pub const CYCLE_WEEK_THREE_FACTOR: f64 = 1.05;
    /// Fourth (recovery) week of the cycle
    pub const CYCLE_RECOVERY_WEEK_FACTOR: f64 = 0.70;

    /// Fraction of taper starting volume shed linearly across the taper
    pub const TAPER_DECAY_FRACTION: f64 = 0.4;
}

/// Form trend classification
pub mod trend {
    /// TSB rise over the window above which form is improving
    pub const IMPROVING_TSB_DELTA: f64 = 3.0;
    /// TSB drop over the window below which form is declining
    pub const DECLINING_TSB_DELTA: f64 = -3.0;
    /// Minimum points for a trend
    pub const MIN_POINTS: usize = 2;
}

/// Recovery assessment thresholds
///
/// Reference: Allen, H. & Coggan, A. (2010). Training and Racing with a Power Meter,
/// Performance Manager chapter (CTL ramp rate guidance).
pub mod recovery {
    /// Minimum history (points) for an assessment
    pub const MIN_POINTS: usize = 7;
    /// Points back from the latest used for the ramp rate
    pub const RAMP_WINDOW_POINTS: usize = 7;
    /// CTL ramp above which the athlete is overreaching
    pub const OVERREACHING_RAMP_RATE: f64 = 7.0;

    /// ATL above which fatigue is very high
    pub const VERY_HIGH_ATL: f64 = 90.0;
    /// ATL above which fatigue is high
    pub const HIGH_ATL: f64 = 70.0;
    /// ATL above which fatigue is moderate
    pub const MODERATE_ATL: f64 = 40.0;

    /// Suggested rest days at very high fatigue
    pub const VERY_HIGH_REST_DAYS: u32 = 3;
    /// Suggested rest days at high fatigue
    pub const HIGH_REST_DAYS: u32 = 2;
    /// Suggested rest days at moderate fatigue
    pub const MODERATE_REST_DAYS: u32 = 1;
}

/// TSB form bands
pub mod form {
    /// TSB above which the athlete is race ready
    pub const RACE_READY_TSB: f64 = 15.0;
    /// TSB above which the athlete is fresh
    pub const FRESH_TSB: f64 = 5.0;
    /// Lowest TSB still considered optimal training stress
    pub const OPTIMAL_MIN_TSB: f64 = -10.0;
    /// Lowest TSB considered tired rather than overtrained
    pub const TIRED_MIN_TSB: f64 = -25.0;
}

/// Race readiness projection
pub mod readiness {
    /// Minimum history (points) for a readiness verdict
    pub const MIN_POINTS: usize = 7;
    /// Trailing points used to project TSB change
    pub const PROJECTION_WINDOW_POINTS: usize = 7;
    /// Days the trailing TSB change is spread over
    pub const PROJECTION_WINDOW_DAYS: f64 = 7.0;

    /// Race week bucket upper bound (days)
    pub const RACE_WEEK_DAYS: u32 = 2;
    /// Taper bucket upper bound (days)
    pub const TAPER_DAYS: u32 = 14;
    /// Final build bucket upper bound (days)
    pub const FINAL_BUILD_DAYS: u32 = 28;

    /// High confidence requires the race within this many days
    pub const HIGH_CONFIDENCE_MAX_DAYS: u32 = 7;
    /// High confidence requires at least this much history
    pub const HIGH_CONFIDENCE_MIN_POINTS: usize = 14;
    /// Medium confidence requires the race within this many days
    pub const MEDIUM_CONFIDENCE_MAX_DAYS: u32 = 21;
}

/// Exponential moving average windows for CTL/ATL derivation
///
/// Reference: Coggan, A. (2003). Training and Racing Using a Power Meter. Peaksware LLC.
pub mod training_load {
    /// Chronic Training Load window (days)
    pub const CTL_WINDOW_DAYS: i64 = 42;
    /// Acute Training Load window (days)
    pub const ATL_WINDOW_DAYS: i64 = 7;
}
