// ABOUTME: Integration tests for output format parsing and rendering
// ABOUTME: Compact versus indented JSON for command results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use tricoach::errors::ErrorCode;
use tricoach::formatters::{format_output, OutputFormat};
use tricoach::intelligence::build_plan;

#[test]
fn test_parse_output_format() {
    assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!(" Pretty ".parse::<OutputFormat>().unwrap(), OutputFormat::Pretty);
    let err = "yaml".parse::<OutputFormat>().unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(OutputFormat::Json.to_string(), "json");
}

#[test]
fn test_json_is_single_line_and_pretty_is_indented() {
    let plan = build_plan(8).unwrap();

    let compact = format_output(&plan, OutputFormat::Json).unwrap();
    assert!(!compact.contains('\n'));

    let pretty = format_output(&plan, OutputFormat::Pretty).unwrap();
    assert!(pretty.contains("\n  \"total_weeks\": 8"));

    let reparsed: serde_json::Value = serde_json::from_str(&pretty).unwrap();
    assert_eq!(reparsed, serde_json::from_str::<serde_json::Value>(&compact).unwrap());
}
