// ABOUTME: Periodization phases with their intensity distribution and training focus
// ABOUTME: Exhaustive lookups so a new phase cannot be added without its table entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

use std::fmt;

use serde::{Deserialize, Serialize};

/// Training phase within a periodized plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodizationPhase {
    /// Aerobic foundation, high volume at low intensity
    Base,
    /// Threshold development with rising intensity
    Build,
    /// Race-specific sharpening at highest volume
    Peak,
    /// Pre-race volume reduction
    Taper,
    /// Regeneration block
    Recovery,
}

impl PeriodizationPhase {
    /// Every phase, in canonical plan order
    pub const ALL: [Self; 5] = [
        Self::Base,
        Self::Build,
        Self::Peak,
        Self::Taper,
        Self::Recovery,
    ];

    /// Time-in-zone split prescribed for this phase
    #[must_use]
    pub const fn intensity_distribution(self) -> IntensityDistribution {
        match self {
            Self::Base => IntensityDistribution::new(80, 15, 5),
            Self::Build => IntensityDistribution::new(70, 20, 10),
            Self::Peak => IntensityDistribution::new(60, 25, 15),
            Self::Taper => IntensityDistribution::new(90, 5, 5),
            Self::Recovery => IntensityDistribution::new(95, 5, 0),
        }
    }

    /// Primary training emphasis for this phase
    #[must_use]
    pub const fn training_focus(self) -> TrainingFocus {
        match self {
            Self::Base => TrainingFocus::AerobicEndurance,
            Self::Build => TrainingFocus::ThresholdWork,
            Self::Peak => TrainingFocus::RaceSpecific,
            Self::Taper | Self::Recovery => TrainingFocus::Recovery,
        }
    }

    /// Stable snake_case label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Build => "build",
            Self::Peak => "peak",
            Self::Taper => "taper",
            Self::Recovery => "recovery",
        }
    }
}

impl fmt::Display for PeriodizationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Low / moderate / high intensity time share, in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntensityDistribution {
    /// Share of time at low intensity (zones 1-2)
    pub low: u8,
    /// Share of time at moderate intensity (zone 3)
    pub moderate: u8,
    /// Share of time at high intensity (zones 4-5)
    pub high: u8,
}

impl IntensityDistribution {
    const fn new(low: u8, moderate: u8, high: u8) -> Self {
        Self {
            low,
            moderate,
            high,
        }
    }

    /// Sum of the three shares; 100 for every phase table entry
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.low as u32 + self.moderate as u32 + self.high as u32
    }
}

/// Training emphasis of a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingFocus {
    /// Long aerobic work
    AerobicEndurance,
    /// Sustained efforts around threshold
    ThresholdWork,
    /// Short intervals near maximal aerobic power
    Vo2max,
    /// Efforts at goal race pace and race simulations
    RaceSpecific,
    /// Reduced load for adaptation and freshness
    Recovery,
    /// Gym and strength conditioning
    Strength,
}

/// Intensity distribution for `phase`
#[must_use]
pub const fn intensity_distribution_for(phase: PeriodizationPhase) -> IntensityDistribution {
    phase.intensity_distribution()
}

/// Training focus for `phase`
#[must_use]
pub const fn training_focus_for(phase: PeriodizationPhase) -> TrainingFocus {
    phase.training_focus()
}
