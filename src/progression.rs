//! Weekly Progression Planner
//!
//! Projects a linear weekly load increase from a current weight to a goal:
//! - fixed weekly increment per exercise (isolation work moves slower)
//! - weights never pass the goal
//! - at most `MAX_PLAN_WEEKS` weeks are laid out; longer projections are
//!   flagged as truncated
//!
//! Stateless: every call builds a fresh plan.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{ExerciseKind, ProgressionPlan, ProgressionRequest, RepRange, WeekEntry};

// ---------------------------------------------------------------------------
/// Plan Constants
// ---------------------------------------------------------------------------

pub const MAX_PLAN_WEEKS: u32 = 8;

const ISOLATION_WEEKLY_INCREASE: f64 = 2.5;
const COMPOUND_WEEKLY_INCREASE: f64 = 5.0;

/// Three full-body days per week
pub const TRAINING_DAYS: [Weekday; 3] = [Weekday::Mon, Weekday::Wed, Weekday::Fri];

// ---------------------------------------------------------------------------
/// Error Handling
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum PlanError {
    #[error("Please fill in all fields (missing {0})")]
    MissingField(String),

    #[error("Invalid {field}: {value}")]
    InvalidWeight { field: String, value: f64 },

    #[error("Target weight must be greater than current weight")]
    TargetNotAboveCurrent { current: f64, target: f64 },

    #[error("Target weight is too far above current weight to plan")]
    TimelineTooLong { current: f64, target: f64 },
}

// ---------------------------------------------------------------------------
/// Per-Exercise Prescription
// ---------------------------------------------------------------------------

impl ExerciseKind {
    /// Absolute load added each week
    pub fn weekly_increase(&self) -> f64 {
        if self.is_isolation() {
            ISOLATION_WEEKLY_INCREASE
        } else {
            COMPOUND_WEEKLY_INCREASE
        }
    }

    pub fn sets_per_session(&self) -> u32 {
        if self.is_isolation() {
            3
        } else {
            4
        }
    }

    pub fn rep_range(&self) -> RepRange {
        match self {
            ExerciseKind::Deadlift => RepRange { min: 3, max: 5 },
            ExerciseKind::BicepCurl => RepRange { min: 8, max: 12 },
            _ => RepRange { min: 5, max: 8 },
        }
    }
}

/// Blank, NaN and zero all count as a field left empty on the form
fn require_weight(value: Option<f64>, field: &str) -> Result<f64, PlanError> {
    match value {
        None => Err(PlanError::MissingField(field.to_string())),
        Some(v) if v.is_nan() || v == 0.0 => Err(PlanError::MissingField(field.to_string())),
        Some(v) if v.is_infinite() || v < 0.0 => Err(PlanError::InvalidWeight {
            field: field.to_string(),
            value: v,
        }),
        Some(v) => Ok(v),
    }
}

// ---------------------------------------------------------------------------
/// Planner
// ---------------------------------------------------------------------------

/// Build the weekly plan for a request, or explain why it was rejected
pub fn plan(request: &ProgressionRequest) -> Result<ProgressionPlan, PlanError> {
    let exercise = request
        .exercise
        .ok_or_else(|| PlanError::MissingField("exercise".to_string()))?;
    let current = require_weight(request.current_weight, "current weight")?;
    let target = require_weight(request.target_weight, "target weight")?;

    if target <= current {
        return Err(PlanError::TargetNotAboveCurrent { current, target });
    }

    let weight_to_gain = target - current;
    let weekly_increase = exercise.weekly_increase();
    let weeks_needed = (weight_to_gain / weekly_increase).ceil();
    if weeks_needed >= u64::MAX as f64 {
        return Err(PlanError::TimelineTooLong { current, target });
    }
    // Checked above, so the cast cannot saturate
    let total_weeks_needed = weeks_needed as u64;
    let listed_weeks = total_weeks_needed.min(u64::from(MAX_PLAN_WEEKS)) as u32;

    let sets = exercise.sets_per_session();
    let reps = exercise.rep_range();

    let mut weeks = Vec::new();
    let mut progression = current;

    for week_number in 1..=listed_weeks {
        let weight = (progression + weekly_increase).min(target);
        weeks.push(WeekEntry {
            week_number,
            weight,
            sets,
            reps,
        });

        progression = weight;
        if progression >= target {
            break;
        }
    }

    Ok(ProgressionPlan {
        exercise,
        current_weight: current,
        target_weight: target,
        weight_to_gain,
        weekly_increase,
        total_weeks_needed,
        weeks,
        truncated: total_weeks_needed > u64::from(MAX_PLAN_WEEKS),
        training_days: TRAINING_DAYS.to_vec(),
    })
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------
