// ABOUTME: Training history data models shared across the workspace
// ABOUTME: Re-exports activity records, fitness data points, and sport types

//! Training history models.
//!
//! These are the shapes supplied by external history sources. The analytics
//! engine only reads them; it never mutates or re-sorts them.

/// Raw per-workout activity records
pub mod activity;

/// Daily fitness/fatigue/form snapshots
pub mod fitness;

/// Sport type enumeration for triathlon disciplines
pub mod sport;

pub use activity::ActivityRecord;
pub use fitness::FitnessDataPoint;
pub use sport::SportType;
