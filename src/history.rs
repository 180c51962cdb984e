//! Rolling session history
//!
//! Most-recent-first, capped at `HISTORY_CAPACITY`. One instance per logical
//! user; nothing here is shared or persisted.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{SessionInput, SessionRecord};
use crate::validation::{validate, ValidationError};

pub const HISTORY_CAPACITY: usize = 10;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionHistory {
  records: VecDeque<SessionRecord>,
  #[serde(skip)]
  last_stamp_ms: Option<i64>,
}

impl SessionHistory {
  pub fn new() -> Self {
    Self::default()
  }

  /// Insert at the front, then drop the oldest entries beyond capacity
  pub fn append(&mut self, record: SessionRecord) {
    self.last_stamp_ms = Some(self.last_stamp_ms.map_or(record.id, |last| last.max(record.id)));
    self.records.push_front(record);

    while self.records.len() > HISTORY_CAPACITY {
      if let Some(evicted) = self.records.pop_back() {
        tracing::debug!(id = evicted.id, exercise = %evicted.exercise, "evicted oldest session");
      }
    }
  }

  /// Read-only view, most recent first
  pub fn all(&self) -> Vec<&SessionRecord> {
    self.records.iter().collect()
  }

  pub fn iter(&self) -> impl Iterator<Item = &SessionRecord> {
    self.records.iter()
  }

  pub fn latest(&self) -> Option<&SessionRecord> {
    self.records.front()
  }

  pub fn len(&self) -> usize {
    self.records.len()
  }

  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }

  pub fn clear(&mut self) {
    self.records.clear();
  }

  /// Creation instant for the next record, strictly after every id issued so
  /// far so ids stay unique even for submissions within the same millisecond.
  pub fn next_stamp(&mut self, now: DateTime<Utc>) -> DateTime<Utc> {
    let now_ms = now.timestamp_millis();
    let stamp_ms = match self.last_stamp_ms {
      Some(last) if now_ms <= last => last + 1,
      _ => now_ms,
    };
    self.last_stamp_ms = Some(stamp_ms);
    DateTime::<Utc>::from_timestamp_millis(stamp_ms).unwrap_or(now)
  }

  /// Validate, compute and append in one step.
  /// A rejected input leaves the history untouched.
  pub fn record(
    &mut self,
    input: &SessionInput,
    now: DateTime<Utc>,
  ) -> Result<SessionRecord, ValidationError> {
    let session = validate(input)?;
    let stamp = self.next_stamp(now);
    let record = SessionRecord::compute(&session, stamp);
    self.append(record.clone());
    Ok(record)
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::{datetime_now, mock_record, mock_session_input};
  use chrono::Duration;

  #[test]
  fn test_new_history_is_empty() {
    let history = SessionHistory::new();
    assert!(history.is_empty());
    assert_eq!(history.len(), 0);
    assert!(history.latest().is_none());
  }

  #[test]
  fn test_append_puts_newest_first() {
    let mut history = SessionHistory::new();
    history.append(mock_record(1));
    history.append(mock_record(2));

    let ids: Vec<i64> = history.all().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 1]);
    assert_eq!(history.latest().map(|r| r.id), Some(2));
  }

  #[test]
  fn test_eleventh_append_evicts_oldest() {
    let mut history = SessionHistory::new();
    for id in 1..=11 {
      history.append(mock_record(id));
    }

    assert_eq!(history.len(), HISTORY_CAPACITY);
    let ids: Vec<i64> = history.iter().map(|r| r.id).collect();
    assert_eq!(ids.first(), Some(&11));
    assert_eq!(ids.last(), Some(&2));
    assert!(!ids.contains(&1));
  }

  #[test]
  fn test_capacity_never_exceeded() {
    let mut history = SessionHistory::new();
    for id in 1..=35 {
      history.append(mock_record(id));
      assert!(history.len() <= HISTORY_CAPACITY);
    }
    let ids: Vec<i64> = history.iter().map(|r| r.id).collect();
    assert_eq!(ids, (26..=35).rev().collect::<Vec<i64>>());
  }

  #[test]
  fn test_clear() {
    let mut history = SessionHistory::new();
    history.append(mock_record(1));
    history.clear();
    assert!(history.is_empty());
  }

  #[test]
  fn test_record_appends_valid_session() {
    let mut history = SessionHistory::new();
    let record = history
      .record(&mock_session_input(), datetime_now())
      .expect("Should record valid session");

    assert_eq!(history.len(), 1);
    assert_eq!(history.latest(), Some(&record));
    assert_eq!(record.total_volume, 3000.0);
  }

  #[test]
  fn test_record_rejection_leaves_history_unchanged() {
    let mut history = SessionHistory::new();
    history.record(&mock_session_input(), datetime_now()).unwrap();

    let mut bad = mock_session_input();
    bad.reps = 0;
    let result = history.record(&bad, datetime_now());

    assert_eq!(result, Err(ValidationError::Reps(0)));
    assert_eq!(history.len(), 1);
  }

  #[test]
  fn test_ids_strictly_increase_within_same_millisecond() {
    let mut history = SessionHistory::new();
    let now = datetime_now();
    let a = history.record(&mock_session_input(), now).unwrap();
    let b = history.record(&mock_session_input(), now).unwrap();
    let c = history.record(&mock_session_input(), now - Duration::seconds(5)).unwrap();

    assert!(b.id > a.id);
    assert!(c.id > b.id);
    assert_eq!(b.logged_at.timestamp_millis(), b.id);
  }
}
