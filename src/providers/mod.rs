// ABOUTME: History provider module for loading athlete training history
// ABOUTME: Provider trait plus in-memory and JSON document implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

//! History providers
//!
//! The analytics functions never fetch data themselves. Callers load an
//! athlete's history through a [`HistoryProvider`] and pass the slices in.

/// Provider trait and shared query types
pub mod core;

/// Pre-loaded, lock-protected provider for tests and demos
pub mod memory;

/// Provider backed by a JSON history document on disk
pub mod json_file;

pub use self::core::{AthleteHistory, DateRange, HistoryProvider};
pub use json_file::{HistoryDocument, JsonFileHistoryProvider};
pub use memory::InMemoryHistoryProvider;
