use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::links::WorkoutLink;

/// Raw session fields as submitted by the volume form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInput {
  pub exercise: String,
  pub weight: f64,
  pub reps: i64,
  pub sets: i64,
}

/// Session fields that passed every validation rule.
/// Only `validation::validate` constructs this.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedSession {
  pub exercise: String,
  pub weight: f64,
  pub reps: u32,
  pub sets: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Volume {
  pub per_set: f64,
  pub total: f64,
}

/// One logged session with every derived metric.
/// Immutable after creation; the history only reorders and drops records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
  /// Creation time in epoch milliseconds, strictly increasing per history
  pub id: i64,
  pub logged_at: DateTime<Utc>,
  pub exercise: String,
  pub weight: f64,
  pub reps: u32,
  pub sets: u32,
  pub volume_per_set: f64,
  pub total_volume: f64,
  pub estimated_one_rep_max: f64,
  pub target_weight: f64,
  pub weight_difference: f64,
  pub workout_link: WorkoutLink,
}
