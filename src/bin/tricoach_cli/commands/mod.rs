// ABOUTME: Re-exports command modules for tricoach-cli
// ABOUTME: Provides the plan, load, and status commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

pub mod load;
pub mod plan;
pub mod status;
