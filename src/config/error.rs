// ABOUTME: Configuration error types for environment parsing and validation
// ABOUTME: Converts into AppError so callers see a single error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

use std::env;

use thiserror::Error;

use crate::errors::{AppError, ErrorCode};

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable present but not valid unicode
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Environment value could not be parsed into the expected type
    #[error("Invalid value '{value}' for {var}")]
    Parse {
        /// Variable name
        var: &'static str,
        /// Raw value found in the environment
        value: String,
    },

    /// Numeric value outside its valid range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string()).with_source(error)
    }
}
