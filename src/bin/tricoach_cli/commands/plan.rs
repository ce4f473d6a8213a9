// ABOUTME: Plan command for tricoach-cli
// ABOUTME: Builds a periodization plan for the requested number of weeks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

use tracing::info;
use tricoach::config::CoachConfig;
use tricoach::errors::AppResult;
use tricoach::formatters::format_output;
use tricoach::intelligence::build_plan;

pub fn run(weeks: u32, config: &CoachConfig) -> AppResult<String> {
    let plan = build_plan(weeks)?;
    info!(
        total_weeks = plan.total_weeks,
        phases = plan.phases.len(),
        "Generated periodization plan"
    );
    format_output(&plan, config.output_format)
}
