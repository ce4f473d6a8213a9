// ABOUTME: Configuration module for environment-driven TriCoach settings
// ABOUTME: Exposes the coach configuration and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

//! Configuration
//!
//! All settings come from environment variables; command-line flags override
//! them. Analytics thresholds are fixed and not part of configuration.

/// Coach settings read from the environment
pub mod environment;

/// Configuration error types
pub mod error;

pub use environment::CoachConfig;
pub use error::ConfigError;
