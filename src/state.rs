use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::commands::CommandError;
use crate::config::AppConfig;
use crate::history::SessionHistory;
use crate::models::{SessionInput, SessionRecord};

/// Application state shared by every command.
///
/// Each window owns its own history, keyed by window label, the same way
/// each browser tab kept its own log.
pub struct AppState {
  pub config: AppConfig,
  histories: Mutex<HashMap<String, SessionHistory>>,
}

impl AppState {
  pub fn new(config: AppConfig) -> Self {
    Self {
      config,
      histories: Mutex::new(HashMap::new()),
    }
  }

  /// Run `f` against the history owned by `owner`, creating it on first use
  pub fn with_history<T>(
    &self,
    owner: &str,
    f: impl FnOnce(&mut SessionHistory) -> T,
  ) -> Result<T, CommandError> {
    let mut histories = self
      .histories
      .lock()
      .map_err(|_| CommandError::StatePoisoned)?;
    let history = histories.entry(owner.to_string()).or_default();
    Ok(f(history))
  }

  /// Validate, compute and append. Returns the new record and the updated
  /// history (most recent first).
  pub fn log_session(
    &self,
    owner: &str,
    input: &SessionInput,
    now: DateTime<Utc>,
  ) -> Result<(SessionRecord, Vec<SessionRecord>), CommandError> {
    let (record, records) = self.with_history(owner, |history| {
      history
        .record(input, now)
        .map(|record| (record, history.iter().cloned().collect::<Vec<_>>()))
    })??;

    tracing::debug!(owner, id = record.id, total = records.len(), "session logged");
    Ok((record, records))
  }

  pub fn history(&self, owner: &str) -> Result<Vec<SessionRecord>, CommandError> {
    self.with_history(owner, |history| history.iter().cloned().collect())
  }

  pub fn clear_history(&self, owner: &str) -> Result<(), CommandError> {
    self.with_history(owner, |history| history.clear())
  }

  /// Forget a closed window's history
  pub fn drop_history(&self, owner: &str) {
    if let Ok(mut histories) = self.histories.lock() {
      if histories.remove(owner).is_some() {
        tracing::debug!(owner, "history dropped");
      }
    }
  }

  pub fn owner_count(&self) -> usize {
    self.histories.lock().map(|h| h.len()).unwrap_or(0)
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
