pub mod commands;
pub mod config;
pub mod history;
pub mod links;
pub mod metrics;
pub mod models;
pub mod progression;
pub mod report;
pub mod state;
pub mod validation;

#[cfg(test)]
mod test_utils;

use config::AppConfig;
use state::AppState;
use std::sync::Arc;
use tauri::{Manager, WindowEvent};

/// Each window's log lives only as long as the window
fn forget_closed_window(state: &AppState, label: &str, event: &WindowEvent) {
  if let WindowEvent::Destroyed = event {
    state.drop_history(label);
  }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  let (config, config_error) = match AppConfig::from_env() {
    Ok(config) => (config, None),
    Err(e) => (AppConfig::default(), Some(e)),
  };
  config::init_logging(&config);
  if let Some(e) = config_error {
    tracing::error!(error = %e, "Falling back to default config");
  }

  tracing::info!(
    weight_unit = %config.weight_unit,
    open_links = config.open_links,
    "Starting Overload Coach"
  );

  tauri::Builder::default()
    .plugin(tauri_plugin_opener::init())
    .manage(Arc::new(AppState::new(config)))
    .on_window_event(|window, event| {
      forget_closed_window(&window.state::<Arc<AppState>>(), window.label(), event);
    })
    .invoke_handler(tauri::generate_handler![
      commands::get_config,
      commands::validate_field,
      // Volume calculator & history
      commands::session::log_session,
      commands::session::get_history,
      commands::session::clear_history,
      // Progression planner
      commands::progression::get_exercise_options,
      commands::progression::plan_progression,
      commands::progression::open_workout_link,
    ])
    .run(tauri::generate_context!())
    .expect("error while running tauri application");
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::{datetime_now, mock_app_state, mock_session_input};

  #[test]
  fn test_destroyed_window_drops_only_its_history() {
    let state = mock_app_state();
    for label in ["main", "second"] {
      state
        .log_session(label, &mock_session_input(), datetime_now())
        .unwrap();
    }

    forget_closed_window(&state, "second", &WindowEvent::Destroyed);

    assert_eq!(state.owner_count(), 1);
    assert_eq!(state.history("main").unwrap().len(), 1);
  }

  #[test]
  fn test_other_window_events_keep_history() {
    let state = mock_app_state();
    state
      .log_session("main", &mock_session_input(), datetime_now())
      .unwrap();

    forget_closed_window(&state, "main", &WindowEvent::Focused(false));

    assert_eq!(state.history("main").unwrap().len(), 1);
  }
}
