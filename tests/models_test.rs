// ABOUTME: Integration tests for history models and the shared error type
// ABOUTME: Sport type parsing, record wire format, and error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::date;
use tricoach::errors::{AppError, ErrorCode};
use tricoach::models::{ActivityRecord, FitnessDataPoint, SportType};

#[test]
fn test_sport_type_aliases() {
    assert_eq!("Bike".parse::<SportType>().unwrap(), SportType::Ride);
    assert_eq!("open_water_swim".parse::<SportType>().unwrap(), SportType::Swim);
    assert_eq!("yoga".parse::<SportType>().unwrap(), SportType::Mobility);
    assert_eq!(
        "Rowing".parse::<SportType>().unwrap(),
        SportType::Other("rowing".to_owned())
    );
    assert!("  ".parse::<SportType>().is_err());
}

#[test]
fn test_sport_type_serializes_as_label() {
    assert_eq!(SportType::StrengthTraining.to_string(), "strength_training");
    assert_eq!(
        serde_json::to_value(SportType::StrengthTraining).unwrap(),
        "strength_training"
    );
    assert_eq!(
        serde_json::to_value(SportType::Other("rowing".to_owned())).unwrap(),
        "rowing"
    );
    assert!(serde_json::from_str::<SportType>("\"  \"").is_err());
}

#[test]
fn test_activity_record_wire_format() {
    let record: ActivityRecord =
        serde_json::from_str(r#"{"date":"2024-03-10","duration":90,"tss":85.5,"type":"ride"}"#)
            .unwrap();
    assert_eq!(record.date, date(2024, 3, 10));
    assert_eq!(record.activity_type, Some(SportType::Ride));
    assert_eq!(serde_json::to_value(&record).unwrap()["type"], "ride");

    let untyped = serde_json::to_value(ActivityRecord::new(date(2024, 3, 10), 30.0, 20.0)).unwrap();
    assert!(untyped.get("type").is_none());
}

#[test]
fn test_fitness_point_derives_balance() {
    let point = FitnessDataPoint::from_loads(date(2024, 3, 10), 62.0, 70.0);
    assert!((point.tsb - -8.0).abs() < f64::EPSILON);
}

#[test]
fn test_error_display_and_exit_codes() {
    let err = AppError::not_found("Athlete 'zoe'");
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(
        err.to_string(),
        "The requested resource was not found: Athlete 'zoe' not found"
    );

    assert_eq!(ErrorCode::ValueOutOfRange.exit_code(), 2);
    assert_eq!(ErrorCode::ResourceNotFound.exit_code(), 3);
    assert_eq!(ErrorCode::ConfigMissing.exit_code(), 4);
    assert_eq!(ErrorCode::ConfigInvalid.exit_code(), 4);
    assert_eq!(ErrorCode::StorageError.exit_code(), 1);
    assert_eq!(
        serde_json::to_value(ErrorCode::ConfigMissing).unwrap(),
        "CONFIG_MISSING"
    );
}
