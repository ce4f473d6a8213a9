// ABOUTME: Benchmark fixtures generating deterministic multisport training history
// ABOUTME: Activities rotate through swim, bike, run, and rest days with varying load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

//! Benchmark fixtures generating deterministic training history.

use chrono::{Duration, NaiveDate};
use tricoach::models::{ActivityRecord, SportType};

/// Predefined history lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistoryLength {
    /// Six weeks, roughly one training block
    Block,
    /// One season
    Season,
    /// Three seasons
    MultiYear,
}

impl HistoryLength {
    #[must_use]
    pub const fn days(self) -> usize {
        match self {
            Self::Block => 42,
            Self::Season => 365,
            Self::MultiYear => 1095,
        }
    }
}

/// Generate a day-by-day history; every seventh day is a rest day
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_history(length: HistoryLength) -> Vec<ActivityRecord> {
    let start = NaiveDate::from_ymd_opt(2022, 1, 3).unwrap_or_default();
    (0..length.days())
        .filter(|day| day % 7 != 6)
        .map(|day| {
            let sport = match day % 3 {
                0 => SportType::Swim,
                1 => SportType::Ride,
                _ => SportType::Run,
            };
            let tss = 40.0 + ((day * 37) % 80) as f64;
            let duration = 45.0 + ((day * 53) % 120) as f64;
            ActivityRecord::new(start + Duration::days(day as i64), duration, tss).with_type(sport)
        })
        .collect()
}
