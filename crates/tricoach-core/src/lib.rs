// ABOUTME: Core types and constants for the TriCoach training analytics workspace
// ABOUTME: Foundation crate with error handling, history models, and service constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

#![deny(unsafe_code)]

//! # TriCoach Core
//!
//! Foundation crate providing shared types and constants for the TriCoach
//! analytics engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Service names and environment variable keys
//! - **models**: Training history models (`FitnessDataPoint`, `ActivityRecord`, `SportType`)

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Training history data models supplied by external data sources
pub mod models;
