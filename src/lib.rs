// ABOUTME: Main library entry point for the TriCoach training analytics engine
// ABOUTME: Wires the analytics crates to history providers, configuration, logging, and output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

#![deny(unsafe_code)]

//! # TriCoach
//!
//! Periodization planning and training-load analytics for multisport
//! athletes. The analytics themselves live in `tricoach-intelligence` and are
//! pure functions over already-loaded history; this crate adds the pieces an
//! application needs around them.
//!
//! ## Architecture
//!
//! - **intelligence**: plan generation, trend, load, recovery, and readiness
//! - **providers**: where athlete history comes from (`HistoryProvider`)
//! - **config**: environment-driven settings for the CLI
//! - **logging**: `tracing` subscriber setup
//! - **formatters**: JSON rendering of results
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use tricoach::errors::AppResult;
//! use tricoach::intelligence::build_plan;
//!
//! fn main() -> AppResult<()> {
//!     let plan = build_plan(16)?;
//!     println!("{} phases over {} weeks", plan.phases.len(), plan.total_weeks);
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Output rendering for command results
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Sources of athlete training history
pub mod providers;

pub use tricoach_core::{constants, errors, models};
pub use tricoach_intelligence as intelligence;
