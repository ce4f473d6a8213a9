// ABOUTME: Load command for tricoach-cli
// ABOUTME: Aggregates an athlete's activities into Monday-start weekly totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

use chrono::NaiveDate;
use tracing::info;
use tricoach::config::CoachConfig;
use tricoach::errors::AppResult;
use tricoach::formatters::format_output;
use tricoach::intelligence::aggregate_weekly_load;
use tricoach::providers::{DateRange, HistoryProvider};

use crate::helpers::history::open_provider;

pub async fn run(
    config: &CoachConfig,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> AppResult<String> {
    let range = DateRange::new(from, to)?;
    let provider = open_provider(config)?;
    let activities = provider.activities(&config.athlete_id, range).await?;

    let weeks = aggregate_weekly_load(&activities);
    info!(
        athlete_id = %config.athlete_id,
        activities = activities.len(),
        weeks = weeks.len(),
        "Aggregated weekly load"
    );
    format_output(&weeks, config.output_format)
}
