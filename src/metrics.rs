//! Deterministic session metrics
//!
//! Pure functions over validated inputs: volume, estimated 1RM and the
//! suggested weight for the next session. Calling any of them twice with the
//! same arguments gives the same answer.

use chrono::{DateTime, Utc};

use crate::links::classify_workout;
use crate::models::{SessionRecord, ValidatedSession, Volume};

/// ---------------------------------------------------------------------------
/// Progression Constants
/// ---------------------------------------------------------------------------

/// Sets at or above this rep count take the larger jump
const HIGH_REP_THRESHOLD: u32 = 8;
const HIGH_REP_INCREASE: f64 = 0.025;
const LOW_REP_INCREASE: f64 = 0.02;

/// Smallest practical plate increment
const PLATE_STEP: f64 = 0.5;

/// ---------------------------------------------------------------------------
/// Formulas
/// ---------------------------------------------------------------------------

/// Rounds half-up to one decimal. Inputs are positive so `round` is half-up.
fn round_to_tenth(value: f64) -> f64 {
  (value * 10.0).round() / 10.0
}

fn round_to_plate(value: f64) -> f64 {
  (value / PLATE_STEP).round() * PLATE_STEP
}

/// Estimated one-rep-max using Epley: w × (1 + reps/30).
///
/// A single rep already is the max and is returned untouched.
pub fn one_rep_max(weight: f64, reps: u32) -> f64 {
  if reps == 1 {
    return weight;
  }
  round_to_tenth(weight * (1.0 + reps as f64 / 30.0))
}

/// Suggested weight for the next session, rounded to the nearest 0.5.
///
/// 2.5% for sets of 8+ reps, 2% below that.
pub fn target_weight(weight: f64, reps: u32) -> f64 {
  let increase = if reps >= HIGH_REP_THRESHOLD {
    HIGH_REP_INCREASE
  } else {
    LOW_REP_INCREASE
  };
  round_to_plate(weight * (1.0 + increase))
}

/// Exact products, no rounding
pub fn volume(weight: f64, reps: u32, sets: u32) -> Volume {
  let per_set = weight * reps as f64;
  Volume {
    per_set,
    total: per_set * sets as f64,
  }
}

/// ---------------------------------------------------------------------------
/// Session Record
/// ---------------------------------------------------------------------------

impl SessionRecord {
  /// Compute every derived metric for a validated session.
  /// The id is the creation instant in epoch milliseconds.
  pub fn compute(session: &ValidatedSession, logged_at: DateTime<Utc>) -> Self {
    let Volume { per_set, total } = volume(session.weight, session.reps, session.sets);
    let estimated_one_rep_max = one_rep_max(session.weight, session.reps);
    let target = target_weight(session.weight, session.reps);
    let weight_difference = target - session.weight;
    let workout_link = classify_workout(&session.exercise, weight_difference);

    Self {
      id: logged_at.timestamp_millis(),
      logged_at,
      exercise: session.exercise.clone(),
      weight: session.weight,
      reps: session.reps,
      sets: session.sets,
      volume_per_set: per_set,
      total_volume: total,
      estimated_one_rep_max,
      target_weight: target,
      weight_difference,
      workout_link,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::assert_approx_eq;
  use crate::links::{ExerciseFamily, JumpCategory};
  use crate::test_utils::{datetime_now, mock_validated_session};

  #[test]
  fn test_one_rep_max_single_rep() {
    assert_eq!(one_rep_max(100.0, 1), 100.0);
    assert_eq!(one_rep_max(142.7, 1), 142.7);
  }

  #[test]
  fn test_one_rep_max_ten_reps() {
    // 100 × (1 + 10/30) = 133.33 → 133.3
    assert_eq!(one_rep_max(100.0, 10), 133.3);
  }

  #[test]
  fn test_one_rep_max_rounds_half_up() {
    // 90 × (1 + 5/30) = 105.0
    assert_eq!(one_rep_max(90.0, 5), 105.0);
    // 61 × (1 + 3/30) = 67.1
    assert_eq!(one_rep_max(61.0, 3), 67.1);
    // 100 × (1 + 2/30) = 106.67 → 106.7
    assert_eq!(one_rep_max(100.0, 2), 106.7);
  }

  #[test]
  fn test_target_weight_high_reps() {
    // 100 × 1.025 = 102.5
    assert_eq!(target_weight(100.0, 10), 102.5);
    assert_eq!(target_weight(100.0, 8), 102.5);
  }

  #[test]
  fn test_target_weight_low_reps() {
    // 100 × 1.02 = 102.0
    assert_eq!(target_weight(100.0, 5), 102.0);
    assert_eq!(target_weight(100.0, 7), 102.0);
  }

  #[test]
  fn test_target_weight_snaps_to_plates() {
    // 135 × 1.025 = 138.375 → 138.5
    assert_eq!(target_weight(135.0, 10), 138.5);
    // 45 × 1.02 = 45.9 → 46.0
    assert_eq!(target_weight(45.0, 3), 46.0);
  }

  #[test]
  fn test_volume() {
    let v = volume(100.0, 10, 3);
    assert_eq!(v.per_set, 1000.0);
    assert_eq!(v.total, 3000.0);
  }

  #[test]
  fn test_volume_keeps_fractional_weights() {
    let v = volume(22.5, 12, 4);
    assert_approx_eq!(v.per_set, 270.0, 1e-9);
    assert_approx_eq!(v.total, 1080.0, 1e-9);
  }

  #[test]
  fn test_formulas_are_idempotent() {
    assert_eq!(one_rep_max(87.5, 6), one_rep_max(87.5, 6));
    assert_eq!(target_weight(87.5, 6), target_weight(87.5, 6));
    assert_eq!(volume(87.5, 6, 4), volume(87.5, 6, 4));
  }

  #[test]
  fn test_record_compute() {
    let now = datetime_now();
    let record = SessionRecord::compute(&mock_validated_session(), now);

    assert_eq!(record.id, now.timestamp_millis());
    assert_eq!(record.exercise, "Bench Press");
    assert_eq!(record.volume_per_set, 1000.0);
    assert_eq!(record.total_volume, 3000.0);
    assert_eq!(record.estimated_one_rep_max, 133.3);
    assert_eq!(record.target_weight, 102.5);
    assert_approx_eq!(record.weight_difference, 2.5, 1e-9);
    assert_eq!(record.workout_link.family, ExerciseFamily::Bench);
    assert_eq!(record.workout_link.category, JumpCategory::Small);
  }

  #[test]
  fn test_record_heavy_jump_is_large() {
    let mut session = mock_validated_session();
    session.exercise = "Back Squat".to_string();
    session.weight = 600.0;
    // 600 × 1.025 = 615 → difference 15
    let record = SessionRecord::compute(&session, datetime_now());
    assert_eq!(record.target_weight, 615.0);
    assert_eq!(record.workout_link.category, JumpCategory::Large);
    assert_eq!(record.workout_link.label, "Advanced Squat Training");
  }
}
