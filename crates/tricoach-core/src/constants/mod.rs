// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Service names, environment variable keys, and input limits for TriCoach
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

//! Constants module
//!
//! Analytics thresholds live next to the algorithms in the intelligence crate.
//! This module only carries service-level values shared by every crate.

/// Service identity used in structured logs
pub mod service_names {
    /// Library/service name reported by the logging layer
    pub const TRICOACH: &str = "tricoach";
    /// Command-line binary name
    pub const TRICOACH_CLI: &str = "tricoach-cli";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Path of the JSON history document
    pub const HISTORY_PATH: &str = "TRICOACH_HISTORY_PATH";
    /// Default athlete identifier
    pub const ATHLETE_ID: &str = "TRICOACH_ATHLETE_ID";
    /// Trailing window (in points) for the displayed form trend
    pub const TREND_WINDOW: &str = "TRICOACH_TREND_WINDOW";
    /// Output format for the CLI (`json` or `pretty`)
    pub const OUTPUT_FORMAT: &str = "TRICOACH_OUTPUT_FORMAT";
    /// CTL smoothing window in days
    pub const CTL_DAYS: &str = "TRICOACH_CTL_DAYS";
    /// ATL smoothing window in days
    pub const ATL_DAYS: &str = "TRICOACH_ATL_DAYS";
}

/// Default values for configurable settings
pub mod defaults {
    /// Default trailing trend window in points
    pub const TREND_WINDOW: usize = 7;
    /// Default athlete identifier when none is configured
    pub const ATHLETE_ID: &str = "default";
}

/// Input limits
pub mod limits {
    /// Smallest trend window that can produce a trend (two points)
    pub const MIN_TREND_WINDOW: usize = 2;
    /// Calendar date format accepted on every interface
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
}
