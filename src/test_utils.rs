//! Test utilities and helpers for unit testing
//!
//! This module provides common test infrastructure including:
//! - Mock data factories
//! - Fixed timestamps
//! - Helper assertions

use crate::config::AppConfig;
use crate::models::{SessionInput, SessionRecord, ValidatedSession};
use crate::state::AppState;
use chrono::{DateTime, TimeZone, Utc};

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// 3 × 10 bench press at 100, as typed into the volume form
pub fn mock_session_input() -> SessionInput {
  SessionInput {
    exercise: "Bench Press".to_string(),
    weight: 100.0,
    reps: 10,
    sets: 3,
  }
}

pub fn mock_validated_session() -> ValidatedSession {
  ValidatedSession {
    exercise: "Bench Press".to_string(),
    weight: 100.0,
    reps: 10,
    sets: 3,
  }
}

/// A fully computed record for the mock session with a caller-chosen id
pub fn mock_record(id: i64) -> SessionRecord {
  let logged_at = datetime_at(2026, 1, 5, 18, 30);
  let mut record = SessionRecord::compute(&mock_validated_session(), logged_at);
  record.id = id;
  record
}

/// App state labelled in pounds with links enabled
pub fn mock_app_state() -> AppState {
  AppState::new(AppConfig {
    weight_unit: "lbs".to_string(),
    ..AppConfig::default()
  })
}

/// ---------------------------------------------------------------------------
/// Date/Time Helpers
/// ---------------------------------------------------------------------------

pub fn datetime_now() -> DateTime<Utc> {
  Utc::now()
}

pub fn datetime_at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
  Utc
    .with_ymd_and_hms(year, month, day, hour, minute, 0)
    .unwrap()
}

/// ---------------------------------------------------------------------------
/// Custom Assertions
/// ---------------------------------------------------------------------------

/// Assert that two floating point values are approximately equal
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_mock_factories_create_valid_data() {
    let input = mock_session_input();
    assert_eq!(input.exercise, "Bench Press");
    assert_eq!(input.reps, 10);

    let record = mock_record(42);
    assert_eq!(record.id, 42);
    assert_eq!(record.total_volume, 3000.0);

    let state = mock_app_state();
    assert_eq!(state.config.weight_unit, "lbs");
    assert!(state.config.open_links);
  }

  #[test]
  fn test_datetime_at_is_exact() {
    let at = datetime_at(2026, 10, 17, 8, 5);
    assert_eq!(at.to_rfc3339(), "2026-10-17T08:05:00+00:00");
  }

  #[test]
  fn test_assert_approx_eq_macro() {
    assert_approx_eq!(1.0_f64, 1.0001_f64, 0.001);
    assert_approx_eq!(133.33_f64, 133.3_f64, 0.05);
  }

  #[test]
  #[should_panic(expected = "Values not approximately equal")]
  fn test_assert_approx_eq_macro_fails() {
    assert_approx_eq!(1.0_f64, 2.0_f64, 0.001);
  }
}
