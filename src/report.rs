//! Plain-text renderings of engine output
//!
//! The frontend shows these verbatim. Weights carry an opaque unit label and
//! are never converted.

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

use crate::models::{ProgressionPlan, SessionRecord};

pub const EMPTY_HISTORY_MESSAGE: &str =
  "No training sessions logged yet. Complete the form above to start tracking!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
  pub title: String,
  pub lines: Vec<String>,
}

impl std::fmt::Display for Report {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    writeln!(f, "{}", self.title)?;
    for line in &self.lines {
      writeln!(f, "{}", line)?;
    }
    Ok(())
  }
}

/// ---------------------------------------------------------------------------
/// Number Formatting
/// ---------------------------------------------------------------------------

/// Above this, an f64 carries no fractional digits worth showing
const MAX_FRACTIONAL_MAGNITUDE: f64 = 1e15;

/// Thousands separators and at most three decimals, e.g. 12345.5 → "12,345.5"
pub fn group_thousands(value: f64) -> String {
  if !value.is_finite() {
    return value.to_string();
  }
  let rounded = if value.abs() < MAX_FRACTIONAL_MAGNITUDE {
    (value * 1000.0).round() / 1000.0
  } else {
    value.trunc()
  };
  let sign = if rounded < 0.0 { "-" } else { "" };
  let abs = rounded.abs();
  let fraction = format!("{:.3}", abs - abs.trunc());
  let fraction = fraction.trim_start_matches('0').trim_end_matches('0');
  let fraction = if fraction == "." { "" } else { fraction };

  let digits = format!("{:.0}", abs.trunc());
  let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
  for (i, c) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      grouped.push(',');
    }
    grouped.push(c);
  }

  format!("{}{}{}", sign, grouped, fraction)
}

/// One decimal, ties rounded up ("2.25" → "2.3"); `{:.1}` alone rounds ties to even
fn one_decimal(value: f64) -> String {
  format!("{:.1}", (value * 10.0).round() / 10.0)
}

/// e.g. "Oct 17, 2026, 08:30 PM"
pub fn format_logged_at<Tz: TimeZone>(at: &DateTime<Utc>, tz: &Tz) -> String
where
  Tz::Offset: std::fmt::Display,
{
  at.with_timezone(tz).format("%b %-d, %Y, %I:%M %p").to_string()
}

/// ---------------------------------------------------------------------------
/// Session Reports
/// ---------------------------------------------------------------------------

pub fn session_summary(record: &SessionRecord, unit: &str) -> Report {
  Report {
    title: "Volume Calculated".to_string(),
    lines: vec![
      format!("Total Volume: {}", group_thousands(record.total_volume)),
      record.exercise.clone(),
      format!(
        "{} sets × {} reps @ {} {}",
        record.sets, record.reps, record.weight, unit
      ),
      format!("Volume per set: {}", group_thousands(record.volume_per_set)),
      format!(
        "Current Estimated Max (1RM): {} {}",
        record.estimated_one_rep_max, unit
      ),
      format!("Target Weight (Next Session): {} {}", record.target_weight, unit),
      format!(
        "Weight Increase Needed: +{} {}",
        one_decimal(record.weight_difference),
        unit
      ),
      format!(
        "Progressive overload tip: Aim for {} {} in your next session for gradual strength gains.",
        record.target_weight, unit
      ),
      format!("{} → {}", record.workout_link.label, record.workout_link.url),
    ],
  }
}

/// One line per record, in the order given. An empty log gets the
/// placeholder message instead.
pub fn history_lines<'a, Tz: TimeZone>(
  records: impl IntoIterator<Item = &'a SessionRecord>,
  unit: &str,
  tz: &Tz,
) -> Vec<String>
where
  Tz::Offset: std::fmt::Display,
{
  let lines: Vec<String> = records
    .into_iter()
    .map(|entry| {
      format!(
        "{} | {} sets × {} reps @ {} {} | Max: {} | Target: {} {} | {} | {}",
        entry.exercise,
        entry.sets,
        entry.reps,
        entry.weight,
        unit,
        entry.estimated_one_rep_max,
        entry.target_weight,
        unit,
        format_logged_at(&entry.logged_at, tz),
        group_thousands(entry.total_volume)
      )
    })
    .collect();

  if lines.is_empty() {
    vec![EMPTY_HISTORY_MESSAGE.to_string()]
  } else {
    lines
  }
}

/// ---------------------------------------------------------------------------
/// Plan Report
/// ---------------------------------------------------------------------------

pub fn plan_report(plan: &ProgressionPlan, unit: &str) -> Report {
  let mut lines = vec![
    format!("Current Weight: {} {}", plan.current_weight, unit),
    format!("Target Weight: {} {}", plan.target_weight, unit),
    format!("Weight to Gain: {} {}", plan.weight_to_gain, unit),
    format!("Estimated Timeline: {} weeks", plan.total_weeks_needed),
    "Weekly Progression Plan:".to_string(),
  ];

  for week in &plan.weeks {
    lines.push(format!("Week {} - {} {}", week.week_number, week.weight, unit));
    for day in &plan.training_days {
      lines.push(format!(
        "  {}: {} sets × {} reps @ {} {}",
        weekday_name(*day),
        week.sets,
        week.reps,
        week.weight,
        unit
      ));
    }
    lines.push("  Focus: Maintain proper form and complete all reps".to_string());
  }

  if plan.truncated {
    lines.push(format!(
      "Continue this pattern until you reach {} {}...",
      plan.target_weight, unit
    ));
  }

  Report {
    title: format!(
      "Your {} Progressive Overload Plan",
      plan.exercise.display_name()
    ),
    lines,
  }
}

fn weekday_name(day: chrono::Weekday) -> &'static str {
  use chrono::Weekday::*;
  match day {
    Mon => "Monday",
    Tue => "Tuesday",
    Wed => "Wednesday",
    Thu => "Thursday",
    Fri => "Friday",
    Sat => "Saturday",
    Sun => "Sunday",
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
