// ABOUTME: Sport type enumeration for endurance training activities
// ABOUTME: Defines triathlon disciplines with parsing and display implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Enumeration of supported activity types
///
/// Covers the three triathlon disciplines plus the supporting work a
/// coaching plan schedules. Provider-specific types map to `Other`.
///
/// On the wire a sport is a plain string parsed through [`FromStr`], so
/// aliases such as `bike` or `yoga` and unknown labels such as `rowing` are
/// accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SportType {
    /// Swimming (pool or open water)
    Swim,
    /// Cycling, indoor or outdoor
    Ride,
    /// Running, treadmill or outdoor
    Run,
    /// Combined bike-to-run session
    Brick,
    /// Weight/strength training
    StrengthTraining,
    /// Mobility, yoga, or stretching
    Mobility,
    /// Anything else, keeping the provider's label
    Other(String),
}

impl SportType {
    /// Stable snake_case label
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Swim => "swim",
            Self::Ride => "ride",
            Self::Run => "run",
            Self::Brick => "brick",
            Self::StrengthTraining => "strength_training",
            Self::Mobility => "mobility",
            Self::Other(label) => label,
        }
    }
}

impl fmt::Display for SportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SportType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(AppError::invalid_input("Sport type must not be empty"));
        }
        Ok(match normalized.as_str() {
            "swim" | "swimming" | "open_water_swim" => Self::Swim,
            "ride" | "bike" | "cycling" | "virtual_ride" => Self::Ride,
            "run" | "running" | "virtual_run" => Self::Run,
            "brick" => Self::Brick,
            "strength" | "strength_training" | "weight_training" => Self::StrengthTraining,
            "mobility" | "yoga" | "stretching" => Self::Mobility,
            _ => Self::Other(normalized),
        })
    }
}

impl TryFrom<String> for SportType {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SportType> for String {
    fn from(sport: SportType) -> Self {
        match sport {
            SportType::Other(label) => label,
            known => known.as_str().to_owned(),
        }
    }
}
