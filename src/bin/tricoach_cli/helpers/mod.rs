// ABOUTME: Re-exports helper modules for tricoach-cli
// ABOUTME: Provides history provider setup shared by the commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

pub mod history;
