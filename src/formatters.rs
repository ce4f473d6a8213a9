// ABOUTME: Output format selection and rendering for command results
// ABOUTME: Compact JSON for piping into other tools, indented JSON for reading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::{AppError, AppResult};

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Single-line JSON
    Json,
    /// Indented JSON
    #[default]
    Pretty,
}

impl OutputFormat {
    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Pretty => "pretty",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => Err(AppError::invalid_input(format!(
                "Unknown output format '{other}' (expected json or pretty)"
            ))),
        }
    }
}

/// Render serializable data in the requested format
///
/// # Errors
///
/// Returns a serialization error if `data` cannot be represented as JSON
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> AppResult<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(data)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(data)?,
    };
    Ok(rendered)
}
