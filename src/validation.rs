//! Input validation for the volume form
//!
//! Two layers:
//! - `validate` is the blocking check run before any metric is computed.
//! - `check_field` gives live per-field feedback and never blocks submission.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::metrics::{one_rep_max, target_weight, volume};
use crate::models::{SessionInput, ValidatedSession, Volume};

/// ---------------------------------------------------------------------------
/// Domain Limits
/// ---------------------------------------------------------------------------

pub const MIN_EXERCISE_NAME_CHARS: usize = 2;
pub const MIN_REPS: i64 = 1;
pub const MAX_REPS: i64 = 50;
pub const MIN_SETS: i64 = 1;
pub const MAX_SETS: i64 = 10;

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ValidationError {
  #[error("Please enter a valid exercise name")]
  ExerciseName(String),

  #[error("Please enter a valid weight (must be greater than 0)")]
  Weight(f64),

  #[error("Please enter valid repetitions (between 1 and 50)")]
  Reps(i64),

  #[error("Please enter valid sets (between 1 and 10)")]
  Sets(i64),
}

impl ValidationError {
  /// Name of the form field that failed
  pub fn field(&self) -> &'static str {
    match self {
      Self::ExerciseName(_) => "exercise",
      Self::Weight(_) => "weight",
      Self::Reps(_) => "reps",
      Self::Sets(_) => "sets",
    }
  }
}

/// ---------------------------------------------------------------------------
/// Blocking Validator
/// ---------------------------------------------------------------------------

/// Checks every field of a session; the first failing rule wins.
/// Non-finite weights are rejected here, before any arithmetic, and so are
/// weights whose derived metrics would overflow.
pub fn validate(input: &SessionInput) -> Result<ValidatedSession, ValidationError> {
  let exercise = input.exercise.trim();
  if exercise.chars().count() < MIN_EXERCISE_NAME_CHARS {
    return Err(ValidationError::ExerciseName(input.exercise.clone()));
  }

  if !input.weight.is_finite() || input.weight <= 0.0 {
    return Err(ValidationError::Weight(input.weight));
  }

  if !(MIN_REPS..=MAX_REPS).contains(&input.reps) {
    return Err(ValidationError::Reps(input.reps));
  }

  if !(MIN_SETS..=MAX_SETS).contains(&input.sets) {
    return Err(ValidationError::Sets(input.sets));
  }

  let session = ValidatedSession {
    exercise: exercise.to_string(),
    weight: input.weight,
    // Range checks above keep both casts lossless
    reps: input.reps as u32,
    sets: input.sets as u32,
  };

  if !metrics_are_finite(&session) {
    return Err(ValidationError::Weight(input.weight));
  }
  Ok(session)
}

fn metrics_are_finite(session: &ValidatedSession) -> bool {
  let Volume { per_set, total } = volume(session.weight, session.reps, session.sets);
  [
    per_set,
    total,
    one_rep_max(session.weight, session.reps),
    target_weight(session.weight, session.reps),
  ]
  .iter()
  .all(|v| v.is_finite())
}

/// ---------------------------------------------------------------------------
/// Soft Field Validator
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldSpec {
  Number { min: Option<f64>, max: Option<f64> },
  Text { required: bool },
}

impl FieldSpec {
  pub const EXERCISE: FieldSpec = FieldSpec::Text { required: true };
  pub const WEIGHT: FieldSpec = FieldSpec::Number {
    min: Some(0.0),
    max: None,
  };
  pub const REPS: FieldSpec = FieldSpec::Number {
    min: Some(MIN_REPS as f64),
    max: Some(MAX_REPS as f64),
  };
  pub const SETS: FieldSpec = FieldSpec::Number {
    min: Some(MIN_SETS as f64),
    max: Some(MAX_SETS as f64),
  };

  /// Rules for a named field of the volume form
  pub fn for_field(name: &str) -> Option<FieldSpec> {
    match name {
      "exercise" => Some(Self::EXERCISE),
      "weight" => Some(Self::WEIGHT),
      "reps" => Some(Self::REPS),
      "sets" => Some(Self::SETS),
      _ => None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldWarning {
  NotANumber,
  BelowMin { min: f64 },
  AboveMax { max: f64 },
  Negative,
  Required,
}

impl std::fmt::Display for FieldWarning {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::NotANumber => write!(f, "Please enter a valid number"),
      Self::BelowMin { min } => write!(f, "Value must be at least {}", min),
      Self::AboveMax { max } => write!(f, "Value must not exceed {}", max),
      Self::Negative => write!(f, "Value must be positive"),
      Self::Required => write!(f, "This field is required"),
    }
  }
}

/// Live feedback for one raw field value. `None` means nothing to report.
pub fn check_field(spec: &FieldSpec, raw: &str) -> Option<FieldWarning> {
  let value = raw.trim();

  match *spec {
    FieldSpec::Number { min, max } => {
      let num = match value.parse::<f64>() {
        Ok(n) if !n.is_nan() => n,
        _ => return Some(FieldWarning::NotANumber),
      };

      if let Some(min) = min.filter(|m| num < *m) {
        Some(FieldWarning::BelowMin { min })
      } else if let Some(max) = max.filter(|m| num > *m) {
        Some(FieldWarning::AboveMax { max })
      } else if num < 0.0 {
        Some(FieldWarning::Negative)
      } else {
        None
      }
    }
    FieldSpec::Text { required } => {
      if required && value.is_empty() {
        Some(FieldWarning::Required)
      } else {
        None
      }
    }
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
