//! Tauri commands for the volume calculator and training log

use chrono::{Local, Utc};
use serde::Serialize;
use std::sync::Arc;
use tauri::{Runtime, State, WebviewWindow};

use crate::commands::CommandError;
use crate::models::{SessionInput, SessionRecord};
use crate::report::{history_lines, session_summary, Report};
use crate::state::AppState;

/// ---------------------------------------------------------------------------
/// Response Types
/// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct HistoryView {
  pub records: Vec<SessionRecord>,
  pub lines: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct LoggedSession {
  pub record: SessionRecord,
  pub summary: Report,
  pub history: HistoryView,
}

impl AppState {
  fn history_view(&self, records: Vec<SessionRecord>) -> HistoryView {
    HistoryView {
      lines: history_lines(&records, &self.config.weight_unit, &Local),
      records,
    }
  }

  /// Everything `log_session` returns, without the window plumbing
  pub fn log_and_render(
    &self,
    owner: &str,
    input: &SessionInput,
  ) -> Result<LoggedSession, CommandError> {
    let (record, records) = self.log_session(owner, input, Utc::now())?;
    Ok(LoggedSession {
      summary: session_summary(&record, &self.config.weight_unit),
      history: self.history_view(records),
      record,
    })
  }

  pub fn render_history(&self, owner: &str) -> Result<HistoryView, CommandError> {
    let records = self.history(owner)?;
    Ok(self.history_view(records))
  }
}

/// ---------------------------------------------------------------------------
/// Commands
/// ---------------------------------------------------------------------------

/// Validate a submitted session, compute its metrics and log it for the
/// calling window
#[tauri::command]
pub async fn log_session<R: Runtime>(
  window: WebviewWindow<R>,
  state: State<'_, Arc<AppState>>,
  input: SessionInput,
) -> Result<LoggedSession, CommandError> {
  state.log_and_render(window.label(), &input).map_err(|e| {
    tracing::debug!(window = window.label(), error = %e, "session rejected");
    e
  })
}

#[tauri::command]
pub async fn get_history<R: Runtime>(
  window: WebviewWindow<R>,
  state: State<'_, Arc<AppState>>,
) -> Result<HistoryView, CommandError> {
  state.render_history(window.label())
}

#[tauri::command]
pub async fn clear_history<R: Runtime>(
  window: WebviewWindow<R>,
  state: State<'_, Arc<AppState>>,
) -> Result<(), CommandError> {
  state.clear_history(window.label())
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
