// ABOUTME: Form trend analysis over a caller-chosen window of fitness data points
// ABOUTME: Net CTL/ATL/TSB deltas, mean TSB, and improving/stable/declining classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::FitnessDataPoint;
use crate::physiological_constants::trend::{DECLINING_TSB_DELTA, IMPROVING_TSB_DELTA, MIN_POINTS};

/// Direction of form over the analyzed window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// TSB rose by more than 3
    Improving,
    /// TSB moved by 3 or less
    Stable,
    /// TSB fell by more than 3
    Declining,
}

impl TrendDirection {
    /// Classify a net TSB change
    #[must_use]
    pub fn from_tsb_change(tsb_change: f64) -> Self {
        if tsb_change > IMPROVING_TSB_DELTA {
            Self::Improving
        } else if tsb_change < DECLINING_TSB_DELTA {
            Self::Declining
        } else {
            Self::Stable
        }
    }
}

/// Net movement of fitness, fatigue, and form across a window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormTrend {
    /// Classified direction from `tsb_change`
    pub direction: TrendDirection,
    /// Last TSB minus first TSB
    pub tsb_change: f64,
    /// Last CTL minus first CTL
    pub ctl_change: f64,
    /// Last ATL minus first ATL
    pub atl_change: f64,
    /// TSB of the last point
    pub current_tsb: f64,
    /// Mean TSB over every point in the window
    pub average_tsb: f64,
}

/// Analyze the trend across `points`
///
/// The whole slice is the window: deltas are last minus first, so callers
/// pick the window by slicing (see [`analyze_recent_trend`]). Returns `None`
/// for fewer than two points.
#[must_use]
pub fn analyze_trend(points: &[FitnessDataPoint]) -> Option<FormTrend> {
    if points.len() < MIN_POINTS {
        debug!(points = points.len(), "Not enough data points for a form trend");
        return None;
    }
    let (first, last) = (points.first()?, points.last()?);

    let tsb_change = last.tsb - first.tsb;
    let average_tsb = points.iter().map(|p| p.tsb).sum::<f64>() / points.len() as f64;

    Some(FormTrend {
        direction: TrendDirection::from_tsb_change(tsb_change),
        tsb_change,
        ctl_change: last.ctl - first.ctl,
        atl_change: last.atl - first.atl,
        current_tsb: last.tsb,
        average_tsb,
    })
}

/// Analyze the trend over the trailing `window` points
#[must_use]
pub fn analyze_recent_trend(points: &[FitnessDataPoint], window: usize) -> Option<FormTrend> {
    analyze_trend(trailing(points, window))
}

/// The last `window` points of `points` (all of them when shorter)
pub(crate) fn trailing(points: &[FitnessDataPoint], window: usize) -> &[FitnessDataPoint] {
    &points[points.len().saturating_sub(window)..]
}
