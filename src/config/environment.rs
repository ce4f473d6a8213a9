// ABOUTME: Environment-based configuration for the TriCoach CLI and library callers
// ABOUTME: Reads history location, athlete, trend window, output format, and load windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

use std::env::{self, VarError};
use std::path::PathBuf;
use std::str::FromStr;

use tracing::debug;

use crate::config::error::ConfigError;
use crate::constants::{defaults, env_config, limits};
use crate::formatters::OutputFormat;
use crate::intelligence::TrainingLoadWindows;

/// Settings shared by every command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoachConfig {
    /// JSON history document, if configured
    pub history_path: Option<PathBuf>,
    /// Athlete whose history is analyzed
    pub athlete_id: String,
    /// Trailing number of points used for the displayed trend
    pub trend_window: usize,
    /// Output rendering
    pub output_format: OutputFormat,
    /// Smoothing windows used when a fitness series is derived from activities
    pub training_load: TrainingLoadWindows,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            history_path: None,
            athlete_id: defaults::ATHLETE_ID.to_owned(),
            trend_window: defaults::TREND_WINDOW,
            output_format: OutputFormat::default(),
            training_load: TrainingLoadWindows::default(),
        }
    }
}

impl CoachConfig {
    /// Load configuration from environment variables, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable or
    /// out-of-range value
    pub fn from_env() -> Result<Self, ConfigError> {
        let base = Self::default();

        let config = Self {
            history_path: env_var(env_config::HISTORY_PATH)?.map(PathBuf::from),
            athlete_id: env_var(env_config::ATHLETE_ID)?.unwrap_or(base.athlete_id),
            trend_window: parse_env(env_config::TREND_WINDOW)?.unwrap_or(base.trend_window),
            output_format: parse_env(env_config::OUTPUT_FORMAT)?.unwrap_or(base.output_format),
            training_load: TrainingLoadWindows {
                ctl_days: parse_env(env_config::CTL_DAYS)?
                    .unwrap_or(base.training_load.ctl_days),
                atl_days: parse_env(env_config::ATL_DAYS)?
                    .unwrap_or(base.training_load.atl_days),
            },
        };
        config.validate()?;

        debug!(
            athlete_id = %config.athlete_id,
            trend_window = config.trend_window,
            output_format = %config.output_format,
            "Loaded configuration from environment"
        );
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for a trend window below two
    /// points or a non-positive smoothing window
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trend_window < limits::MIN_TREND_WINDOW {
            return Err(ConfigError::ValueOutOfRange(
                "TRICOACH_TREND_WINDOW must be at least 2",
            ));
        }
        if self.training_load.ctl_days <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "TRICOACH_CTL_DAYS must be positive",
            ));
        }
        if self.training_load.atl_days <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "TRICOACH_ATL_DAYS must be positive",
            ));
        }
        Ok(())
    }
}

fn env_var(name: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}

fn parse_env<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    env_var(name)?
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse { var: name, value })
        })
        .transpose()
}
