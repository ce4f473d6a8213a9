// ABOUTME: Status command for tricoach-cli
// ABOUTME: Builds a coaching snapshot from history as of a given date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

use chrono::NaiveDate;
use tracing::info;
use tricoach::config::CoachConfig;
use tricoach::errors::AppResult;
use tricoach::formatters::format_output;
use tricoach::intelligence::{calendar, CoachingSnapshot};
use tricoach::providers::{DateRange, HistoryProvider};

use crate::helpers::history::{load_fitness, open_provider};

pub async fn run(
    config: &CoachConfig,
    race_date: Option<NaiveDate>,
    today: Option<NaiveDate>,
) -> AppResult<String> {
    let as_of = today.unwrap_or_else(calendar::today);
    let range = DateRange::new(None, Some(as_of))?;
    let provider = open_provider(config)?;

    let activities = provider.activities(&config.athlete_id, range).await?;
    let points = load_fitness(&provider, config, &activities, range).await?;

    let snapshot = CoachingSnapshot::build(
        &points,
        &activities,
        race_date,
        as_of,
        config.trend_window,
    );
    info!(
        athlete_id = %config.athlete_id,
        %as_of,
        points = points.len(),
        has_readiness = snapshot.race_readiness.is_some(),
        "Built coaching snapshot"
    );
    format_output(&snapshot, config.output_format)
}
