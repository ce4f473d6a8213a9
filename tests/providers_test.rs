// ABOUTME: Integration tests for history providers
// ABOUTME: In-memory and JSON file providers: range filtering, ordering, and error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::io::Write;

use common::{date, flat_points};
use tempfile::NamedTempFile;
use tricoach::errors::ErrorCode;
use tricoach::models::{ActivityRecord, FitnessDataPoint, SportType};
use tricoach::providers::{
    AthleteHistory, DateRange, HistoryDocument, HistoryProvider, InMemoryHistoryProvider,
    JsonFileHistoryProvider,
};

const HISTORY_JSON: &str = r#"{
  "athletes": {
    "ana": {
      "activities": [
        { "date": "2024-03-12", "duration": 45, "tss": 40, "type": "swim" },
        { "date": "2024-03-04", "duration": 60, "tss": 55, "type": "run" },
        { "date": "2024-03-10", "duration": 180, "tss": 150 }
      ],
      "fitness": [
        { "date": "2024-03-11", "ctl": 51.0, "atl": 60.0, "tsb": -9.0 },
        { "date": "2024-03-10", "ctl": 50.0, "atl": 58.0, "tsb": -8.0 }
      ]
    },
    "ben": {
      "activities": [{ "date": "2024-03-05", "duration": 30, "tss": 20 }]
    }
  }
}"#;

fn write_history(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_date_range_rules() {
    let range = DateRange::new(Some(date(2024, 3, 5)), Some(date(2024, 3, 10))).unwrap();
    assert!(range.contains(date(2024, 3, 5)));
    assert!(range.contains(date(2024, 3, 10)));
    assert!(!range.contains(date(2024, 3, 4)));
    assert!(!range.contains(date(2024, 3, 11)));
    assert!(DateRange::all().contains(date(1999, 1, 1)));

    let err = DateRange::new(Some(date(2024, 3, 10)), Some(date(2024, 3, 5))).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_json_provider_sorts_and_filters() {
    common::init_test_logging();
    let file = write_history(HISTORY_JSON);
    let provider = JsonFileHistoryProvider::new(file.path());
    assert_eq!(provider.path(), file.path());

    let all = provider.activities("ana", DateRange::all()).await.unwrap();
    let dates: Vec<_> = all.iter().map(|a| a.date).collect();
    assert_eq!(
        dates,
        vec![date(2024, 3, 4), date(2024, 3, 10), date(2024, 3, 12)]
    );
    assert_eq!(all[0].activity_type, Some(SportType::Run));
    assert_eq!(all[1].activity_type, None);

    let range = DateRange::new(Some(date(2024, 3, 5)), Some(date(2024, 3, 10))).unwrap();
    let within = provider.activities("ana", range).await.unwrap();
    assert_eq!(within.len(), 1);
    assert!((within[0].tss - 150.0).abs() < f64::EPSILON);

    let fitness = provider.fitness("ana", DateRange::all()).await.unwrap();
    assert_eq!(fitness[0].date, date(2024, 3, 10));
    assert_eq!(fitness[1].date, date(2024, 3, 11));
}

#[tokio::test]
async fn test_json_provider_missing_fitness_list() {
    let file = write_history(HISTORY_JSON);
    let provider = JsonFileHistoryProvider::new(file.path());
    assert!(provider.fitness("ben", DateRange::all()).await.unwrap().is_empty());
    assert_eq!(
        provider.activities("ben", DateRange::all()).await.unwrap().len(),
        1
    );
}

#[tokio::test]
async fn test_json_provider_accepts_provider_sport_labels() {
    let file = write_history(
        r#"{
  "athletes": {
    "ana": {
      "activities": [
        { "date": "2024-06-03", "duration": 90, "tss": 80, "type": "bike" },
        { "date": "2024-06-04", "duration": 50, "tss": 35, "type": "rowing" },
        { "date": "2024-06-05", "duration": 30, "tss": 10, "type": "Yoga" }
      ]
    }
  }
}"#,
    );
    let provider = JsonFileHistoryProvider::new(file.path());

    let activities = provider.activities("ana", DateRange::all()).await.unwrap();
    let sports: Vec<_> = activities
        .iter()
        .map(|a| a.activity_type.clone())
        .collect();
    assert_eq!(
        sports,
        vec![
            Some(SportType::Ride),
            Some(SportType::Other("rowing".to_owned())),
            Some(SportType::Mobility),
        ]
    );
}

#[tokio::test]
async fn test_json_provider_unknown_athlete() {
    let file = write_history(HISTORY_JSON);
    let provider = JsonFileHistoryProvider::new(file.path());
    let err = provider.activities("zoe", DateRange::all()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_json_provider_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let provider = JsonFileHistoryProvider::new(dir.path().join("absent.json"));
    let err = provider.fitness("ana", DateRange::all()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
}

#[tokio::test]
async fn test_json_provider_malformed_document() {
    let file = write_history("{ \"athletes\": [ }");
    let provider = JsonFileHistoryProvider::new(file.path());
    let err = provider.activities("ana", DateRange::all()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_history_document_round_trip() {
    let document = HistoryDocument::from_json(HISTORY_JSON).unwrap();
    assert_eq!(document.athletes.len(), 2);
    let reparsed =
        HistoryDocument::from_json(&serde_json::to_string(&document).unwrap()).unwrap();
    assert_eq!(reparsed, document);
}

#[tokio::test]
async fn test_memory_provider() {
    let history = AthleteHistory {
        activities: vec![
            ActivityRecord::new(date(2024, 5, 3), 60.0, 50.0),
            ActivityRecord::new(date(2024, 5, 1), 40.0, 30.0).with_type(SportType::Swim),
        ],
        fitness: flat_points(date(2024, 5, 1), 3, 50.0, 40.0),
    };
    let provider = InMemoryHistoryProvider::new()
        .with_athlete("ana", history)
        .unwrap();

    let activities = provider.activities("ana", DateRange::all()).await.unwrap();
    assert_eq!(activities[0].date, date(2024, 5, 1));

    provider
        .add_fitness_point("ana", FitnessDataPoint::from_loads(date(2024, 4, 30), 49.0, 41.0))
        .unwrap();
    let range = DateRange::new(None, Some(date(2024, 5, 1))).unwrap();
    let fitness = provider.fitness("ana", range).await.unwrap();
    assert_eq!(fitness.len(), 2);
    assert_eq!(fitness[0].date, date(2024, 4, 30));

    let err = provider.fitness("ben", DateRange::all()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    provider
        .add_activity("ben", ActivityRecord::new(date(2024, 5, 2), 30.0, 20.0))
        .unwrap();
    assert_eq!(
        provider.activities("ben", DateRange::all()).await.unwrap().len(),
        1
    );

    provider.set_history("ben", AthleteHistory::default()).unwrap();
    assert!(provider.activities("ben", DateRange::all()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_providers_behind_trait_object() {
    let file = write_history(HISTORY_JSON);
    let providers: Vec<Box<dyn HistoryProvider>> = vec![
        Box::new(JsonFileHistoryProvider::new(file.path())),
        Box::new(
            InMemoryHistoryProvider::new()
                .with_athlete(
                    "ana",
                    HistoryDocument::from_json(HISTORY_JSON).unwrap().athletes["ana"].clone(),
                )
                .unwrap(),
        ),
    ];

    for provider in &providers {
        let activities = provider.activities("ana", DateRange::all()).await.unwrap();
        assert_eq!(activities.len(), 3, "{}", provider.name());
    }
}
