//! Environment-driven settings
//!
//! Read once at startup after `.env` is loaded. Every value has a default so
//! the app runs with an empty environment.

use serde::Serialize;
use std::env;
use thiserror::Error;

pub const DEFAULT_WEIGHT_UNIT: &str = "lbs/kg";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum ConfigError {
  #[error("Invalid value for {key}: {value}")]
  InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppConfig {
  /// Label shown next to weights; weights are never converted
  pub weight_unit: String,
  /// Tracing filter used when RUST_LOG is unset
  pub log_filter: String,
  /// Whether workout links may be handed to the system browser
  pub open_links: bool,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      weight_unit: DEFAULT_WEIGHT_UNIT.to_string(),
      log_filter: DEFAULT_LOG_FILTER.to_string(),
      open_links: true,
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self, ConfigError> {
    let defaults = Self::default();

    let weight_unit = env::var("OVERLOAD_WEIGHT_UNIT")
      .ok()
      .map(|v| v.trim().to_string())
      .filter(|v| !v.is_empty())
      .unwrap_or(defaults.weight_unit);

    let log_filter = env::var("OVERLOAD_LOG").unwrap_or(defaults.log_filter);

    let open_links = match env::var("OVERLOAD_OPEN_LINKS") {
      Ok(raw) => parse_flag("OVERLOAD_OPEN_LINKS", &raw)?,
      Err(_) => defaults.open_links,
    };

    Ok(Self {
      weight_unit,
      log_filter,
      open_links,
    })
  }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, ConfigError> {
  match raw.trim().to_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Ok(true),
    "0" | "false" | "no" | "off" => Ok(false),
    _ => Err(ConfigError::InvalidValue {
      key: key.to_string(),
      value: raw.to_string(),
    }),
  }
}

/// Install the global tracing subscriber. RUST_LOG wins over the config.
pub fn init_logging(config: &AppConfig) {
  let filter = tracing_subscriber::EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter));

  // A second call (tests, re-init) keeps the first subscriber
  let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
