//! Tauri commands for the weekly progression planner and workout links

use std::sync::Arc;
use serde::Serialize;
use tauri::{AppHandle, Runtime, State};
use tauri_plugin_opener::OpenerExt;

use crate::commands::CommandError;
use crate::links::is_trusted_link;
use crate::models::{ExerciseKind, ProgressionPlan, ProgressionRequest};
use crate::progression::plan;
use crate::report::{plan_report, Report};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PlannedProgression {
    pub plan: ProgressionPlan,
    pub report: Report,
}

#[derive(Debug, Serialize)]
pub struct ExerciseOption {
    pub id: String,
    pub name: &'static str,
}

/// Exercises for the planner's select box
#[tauri::command]
pub async fn get_exercise_options() -> Result<Vec<ExerciseOption>, CommandError> {
    Ok(ExerciseKind::all()
        .iter()
        .map(|kind| ExerciseOption {
            id: kind.to_string(),
            name: kind.display_name(),
        })
        .collect())
}

/// Build a weekly plan; never touches the session history
#[tauri::command]
pub async fn plan_progression(
    state: State<'_, Arc<AppState>>,
    request: ProgressionRequest,
) -> Result<PlannedProgression, CommandError> {
    let plan = plan(&request).map_err(|e| {
        tracing::debug!(error = %e, "progression request rejected");
        e
    })?;
    let report = plan_report(&plan, &state.config.weight_unit);

    Ok(PlannedProgression { plan, report })
}

/// Check that a link may be opened under the current config
pub fn ensure_openable(state: &AppState, url: &str) -> Result<(), CommandError> {
    if !state.config.open_links {
        return Err(CommandError::LinksDisabled);
    }
    if !is_trusted_link(url) {
        tracing::warn!(url, "refusing to open untrusted link");
        return Err(CommandError::UntrustedLink(url.to_string()));
    }
    Ok(())
}

/// Open a workout link in the system browser
#[tauri::command]
pub async fn open_workout_link<R: Runtime>(
    app: AppHandle<R>,
    state: State<'_, Arc<AppState>>,
    url: String,
) -> Result<(), CommandError> {
    ensure_openable(&state, &url)?;

    app.opener()
        .open_url(url.as_str(), None::<&str>)
        .map_err(|e| CommandError::Opener(e.to_string()))?;

    tracing::info!(url = %url, "opened workout link");
    Ok(())
}
