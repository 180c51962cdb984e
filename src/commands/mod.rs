pub mod progression;
pub mod session;

use crate::config::AppConfig;
use crate::progression::PlanError;
use crate::state::AppState;
use crate::validation::{check_field, FieldSpec, FieldWarning, ValidationError};
use serde::ser::SerializeStruct;
use serde::Serialize;
use std::sync::Arc;
use tauri::State;

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error(transparent)]
  Plan(#[from] PlanError),

  #[error("Unknown field: {0}")]
  UnknownField(String),

  #[error("Session history is unavailable")]
  StatePoisoned,

  #[error("Opening links is disabled")]
  LinksDisabled,

  #[error("Link not allowed: {0}")]
  UntrustedLink(String),

  #[error("Failed to open link: {0}")]
  Opener(String),
}

impl CommandError {
  pub fn kind(&self) -> &'static str {
    match self {
      Self::Validation(_) => "Validation",
      Self::Plan(_) => "Plan",
      Self::UnknownField(_) => "UnknownField",
      Self::StatePoisoned => "StatePoisoned",
      Self::LinksDisabled => "LinksDisabled",
      Self::UntrustedLink(_) => "UntrustedLink",
      Self::Opener(_) => "Opener",
    }
  }

  /// Form field to highlight, if the error belongs to one
  pub fn field(&self) -> Option<&'static str> {
    match self {
      Self::Validation(e) => Some(e.field()),
      _ => None,
    }
  }
}

/// The webview only needs the message it shows and the field it marks
impl Serialize for CommandError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    let mut out = serializer.serialize_struct("CommandError", 3)?;
    out.serialize_field("type", self.kind())?;
    out.serialize_field("field", &self.field())?;
    out.serialize_field("message", &self.to_string())?;
    out.end()
  }
}

/// ---------------------------------------------------------------------------
/// Config & Live Validation
/// ---------------------------------------------------------------------------

#[tauri::command]
pub async fn get_config(state: State<'_, Arc<AppState>>) -> Result<AppConfig, CommandError> {
  Ok(state.config.clone())
}

#[derive(Debug, Serialize)]
pub struct FieldFeedback {
  pub field: String,
  pub warning: Option<FieldWarning>,
  /// Message for `setCustomValidity`; empty when the value is fine
  pub message: String,
}

/// Live feedback for one volume-form field. Never blocks submission.
#[tauri::command]
pub async fn validate_field(field: String, value: String) -> Result<FieldFeedback, CommandError> {
  let spec = FieldSpec::for_field(&field).ok_or_else(|| CommandError::UnknownField(field.clone()))?;
  let warning = check_field(&spec, &value);
  let message = warning.as_ref().map(|w| w.to_string()).unwrap_or_default();

  Ok(FieldFeedback {
    field,
    warning,
    message,
  })
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
