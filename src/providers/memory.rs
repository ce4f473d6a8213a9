// ABOUTME: In-memory history provider for tests, demos, and embedding callers
// ABOUTME: Per-athlete history behind an RwLock, mutable after construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TriCoach

// RwLock poisoning is reported as an internal AppError rather than a panic

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::errors::{AppError, AppResult};
use crate::models::{ActivityRecord, FitnessDataPoint};
use crate::providers::core::{AthleteHistory, DateRange, HistoryProvider};

/// Pre-loaded history keyed by athlete identifier
///
/// # Examples
///
/// ```rust,no_run
/// use tricoach::providers::{AthleteHistory, DateRange, HistoryProvider, InMemoryHistoryProvider};
///
/// # async fn example() -> tricoach::errors::AppResult<()> {
/// let provider = InMemoryHistoryProvider::new().with_athlete("ana", AthleteHistory::default())?;
/// let activities = provider.activities("ana", DateRange::all()).await?;
/// assert!(activities.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistoryProvider {
    athletes: Arc<RwLock<HashMap<String, AthleteHistory>>>,
}

impl InMemoryHistoryProvider {
    /// Create an empty provider
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration of an athlete's history
    ///
    /// # Errors
    ///
    /// Returns `AppError::internal` if the internal lock is poisoned
    pub fn with_athlete(
        self,
        athlete_id: impl Into<String>,
        history: AthleteHistory,
    ) -> AppResult<Self> {
        self.set_history(athlete_id, history)?;
        Ok(self)
    }

    /// Register or replace an athlete's history
    ///
    /// # Errors
    ///
    /// Returns `AppError::internal` if the internal lock is poisoned
    pub fn set_history(
        &self,
        athlete_id: impl Into<String>,
        history: AthleteHistory,
    ) -> AppResult<()> {
        self.athletes
            .write()
            .map_err(|_| AppError::internal("RwLock poisoned: athletes lock"))?
            .insert(athlete_id.into(), history);
        Ok(())
    }

    /// Append one activity, creating the athlete if needed
    ///
    /// # Errors
    ///
    /// Returns `AppError::internal` if the internal lock is poisoned
    pub fn add_activity(&self, athlete_id: &str, activity: ActivityRecord) -> AppResult<()> {
        self.athletes
            .write()
            .map_err(|_| AppError::internal("RwLock poisoned: athletes lock"))?
            .entry(athlete_id.to_owned())
            .or_default()
            .activities
            .push(activity);
        Ok(())
    }

    /// Append one fitness point, creating the athlete if needed
    ///
    /// # Errors
    ///
    /// Returns `AppError::internal` if the internal lock is poisoned
    pub fn add_fitness_point(&self, athlete_id: &str, point: FitnessDataPoint) -> AppResult<()> {
        self.athletes
            .write()
            .map_err(|_| AppError::internal("RwLock poisoned: athletes lock"))?
            .entry(athlete_id.to_owned())
            .or_default()
            .fitness
            .push(point);
        Ok(())
    }

    fn with_history<T>(
        &self,
        athlete_id: &str,
        select: impl FnOnce(&AthleteHistory) -> T,
    ) -> AppResult<T> {
        let athletes = self
            .athletes
            .read()
            .map_err(|_| AppError::internal("RwLock poisoned: athletes lock"))?;
        athletes
            .get(athlete_id)
            .map(select)
            .ok_or_else(|| AppError::not_found(format!("Athlete '{athlete_id}'")))
    }
}

#[async_trait]
impl HistoryProvider for InMemoryHistoryProvider {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn activities(
        &self,
        athlete_id: &str,
        range: DateRange,
    ) -> AppResult<Vec<ActivityRecord>> {
        self.with_history(athlete_id, |history| history.activities_in(range))
    }

    async fn fitness(
        &self,
        athlete_id: &str,
        range: DateRange,
    ) -> AppResult<Vec<FitnessDataPoint>> {
        self.with_history(athlete_id, |history| history.fitness_in(range))
    }
}
