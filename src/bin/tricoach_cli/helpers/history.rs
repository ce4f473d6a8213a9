// ABOUTME: History loading helpers for tricoach-cli
// ABOUTME: Resolves the history file and derives a fitness series when the file has none
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

use std::path::PathBuf;

use tracing::debug;
use tricoach::config::CoachConfig;
use tricoach::errors::{AppError, AppResult, ErrorCode};
use tricoach::intelligence::fitness_series;
use tricoach::models::{ActivityRecord, FitnessDataPoint};
use tricoach::providers::{DateRange, HistoryProvider, JsonFileHistoryProvider};

/// Apply `--history` and `--athlete` on top of environment configuration
pub fn apply_overrides(config: &mut CoachConfig, history: Option<PathBuf>, athlete: Option<String>) {
    if history.is_some() {
        config.history_path = history;
    }
    if let Some(athlete_id) = athlete {
        config.athlete_id = athlete_id;
    }
}

/// Open the configured history file
pub fn open_provider(config: &CoachConfig) -> AppResult<JsonFileHistoryProvider> {
    config
        .history_path
        .as_ref()
        .map(JsonFileHistoryProvider::new)
        .ok_or_else(|| {
            AppError::new(
                ErrorCode::ConfigMissing,
                "No history file given (use --history or TRICOACH_HISTORY_PATH)",
            )
        })
}

/// Fitness points from the provider, derived from `activities` if it has none
pub async fn load_fitness(
    provider: &impl HistoryProvider,
    config: &CoachConfig,
    activities: &[ActivityRecord],
    range: DateRange,
) -> AppResult<Vec<FitnessDataPoint>> {
    let points = provider.fitness(&config.athlete_id, range).await?;
    if !points.is_empty() {
        return Ok(points);
    }

    debug!(
        provider = provider.name(),
        activities = activities.len(),
        "No fitness series recorded, deriving from activities"
    );
    fitness_series(activities, config.training_load)
}
