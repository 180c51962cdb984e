use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Exercises offered by the progression planner form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExerciseKind {
  BenchPress,
  Squat,
  Deadlift,
  OverheadPress,
  BarbellRow,
  /// Isolation work, progresses in the smallest jumps
  BicepCurl,
}

impl ExerciseKind {
  pub fn all() -> &'static [ExerciseKind] {
    &[
      Self::BenchPress,
      Self::Squat,
      Self::Deadlift,
      Self::OverheadPress,
      Self::BarbellRow,
      Self::BicepCurl,
    ]
  }

  pub fn display_name(&self) -> &'static str {
    match self {
      Self::BenchPress => "Bench Press",
      Self::Squat => "Squat",
      Self::Deadlift => "Deadlift",
      Self::OverheadPress => "Overhead Press",
      Self::BarbellRow => "Barbell Row",
      Self::BicepCurl => "Bicep Curl",
    }
  }

  pub fn is_isolation(&self) -> bool {
    matches!(self, Self::BicepCurl)
  }
}

impl std::fmt::Display for ExerciseKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::BenchPress => write!(f, "bench-press"),
      Self::Squat => write!(f, "squat"),
      Self::Deadlift => write!(f, "deadlift"),
      Self::OverheadPress => write!(f, "overhead-press"),
      Self::BarbellRow => write!(f, "barbell-row"),
      Self::BicepCurl => write!(f, "bicep-curl"),
    }
  }
}

/// Planner form fields; any of them may be left blank
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressionRequest {
  pub exercise: Option<ExerciseKind>,
  pub current_weight: Option<f64>,
  pub target_weight: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepRange {
  pub min: u32,
  pub max: u32,
}

impl std::fmt::Display for RepRange {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}-{}", self.min, self.max)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekEntry {
  pub week_number: u32,
  pub weight: f64,
  pub sets: u32,
  pub reps: RepRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionPlan {
  pub exercise: ExerciseKind,
  pub current_weight: f64,
  pub target_weight: f64,
  pub weight_to_gain: f64,
  pub weekly_increase: f64,
  /// Weeks the full projection needs, before the display cap
  pub total_weeks_needed: u64,
  pub weeks: Vec<WeekEntry>,
  /// True when `weeks` stops short of the target
  pub truncated: bool,
  pub training_days: Vec<Weekday>,
}
