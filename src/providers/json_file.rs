// ABOUTME: History provider reading a JSON document of per-athlete activities and fitness points
// ABOUTME: The file is read with tokio::fs on first use and cached for the provider's lifetime
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

//! JSON history document
//!
//! ```json
//! {
//!   "athletes": {
//!     "ana": {
//!       "activities": [{ "date": "2024-03-04", "duration": 60, "tss": 55, "type": "run" }],
//!       "fitness": [{ "date": "2024-03-04", "ctl": 50, "atl": 55, "tsb": -5 }]
//!     }
//!   }
//! }
//! ```
//!
//! Either list may be omitted for an athlete.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::models::{ActivityRecord, FitnessDataPoint};
use crate::providers::core::{AthleteHistory, DateRange, HistoryProvider};

/// On-disk layout of a history file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryDocument {
    /// History keyed by athlete identifier
    #[serde(default)]
    pub athletes: HashMap<String, AthleteHistory>,
}

impl HistoryDocument {
    /// Parse a document from JSON text
    ///
    /// # Errors
    ///
    /// Returns `AppError` with `ErrorCode::InvalidFormat` if the text is not a
    /// valid history document
    pub fn from_json(text: &str) -> AppResult<Self> {
        serde_json::from_str(text).map_err(|e| {
            AppError::invalid_format(format!("Malformed history document: {e}")).with_source(e)
        })
    }

    fn athlete(&self, athlete_id: &str) -> AppResult<&AthleteHistory> {
        self.athletes
            .get(athlete_id)
            .ok_or_else(|| AppError::not_found(format!("Athlete '{athlete_id}'")))
    }
}

/// Provider backed by a JSON history file
#[derive(Debug)]
pub struct JsonFileHistoryProvider {
    path: PathBuf,
    document: OnceCell<HistoryDocument>,
}

impl JsonFileHistoryProvider {
    /// Create a provider for `path`; the file is read lazily
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            document: OnceCell::new(),
        }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn document(&self) -> AppResult<&HistoryDocument> {
        self.document
            .get_or_try_init(|| load_document(&self.path))
            .await
    }
}

async fn load_document(path: &Path) -> AppResult<HistoryDocument> {
    let text = fs::read_to_string(path).await.map_err(|e| {
        AppError::storage(format!("Failed to read history file {}: {e}", path.display()))
            .with_source(e)
    })?;
    let document = HistoryDocument::from_json(&text)?;
    debug!(
        path = %path.display(),
        athletes = document.athletes.len(),
        "Loaded history document"
    );
    Ok(document)
}

#[async_trait]
impl HistoryProvider for JsonFileHistoryProvider {
    fn name(&self) -> &'static str {
        "json_file"
    }

    async fn activities(
        &self,
        athlete_id: &str,
        range: DateRange,
    ) -> AppResult<Vec<ActivityRecord>> {
        Ok(self.document().await?.athlete(athlete_id)?.activities_in(range))
    }

    async fn fitness(
        &self,
        athlete_id: &str,
        range: DateRange,
    ) -> AppResult<Vec<FitnessDataPoint>> {
        Ok(self.document().await?.athlete(athlete_id)?.fitness_in(range))
    }
}
