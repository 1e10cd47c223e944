//! Offline replay of recorded pointer streams
//!
//! Used to check a settings document against real recordings: every
//! completed gesture is reported with its exact outcome and the closest
//! edit-distance candidate.

use crate::dispatch::ActionLog;
use crate::input::session::{GestureSession, SessionUpdate};
use crate::input::types::PointerEvent;
use crate::recognizer::direction::format_path;
use crate::recognizer::edit_distance::{closest_gesture, ApproximateMatch};
use crate::recognizer::GestureOutcome;
use crate::settings::actions::Action;
use crate::settings::store::SettingsStore;
use anyhow::Context;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureReport {
    #[serde(flatten)]
    pub outcome: GestureOutcome,
    /// Time from trigger press to completion, from the recorded timestamps
    pub duration_ms: Option<f64>,
    /// Closest gesture by edit distance, regardless of the exact result
    pub closest: Option<ApproximateMatch>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayReport {
    pub events: usize,
    pub gestures: Vec<GestureReport>,
    pub performed: Vec<Action>,
    pub context_menus_prevented: usize,
}

pub fn load_events(path: &Path) -> anyhow::Result<Vec<PointerEvent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;
    let events: Vec<PointerEvent> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse pointer events in {}", path.display()))?;
    Ok(events)
}

/// Run `events` through a fresh session bound to `settings`
pub fn replay_events(events: &[PointerEvent], settings: &SettingsStore, max_distance: Option<f64>) -> ReplayReport {
    let log = ActionLog::new();
    let mut session = GestureSession::new(settings.clone(), log.clone());
    let mut gestures = Vec::new();
    let mut context_menus_prevented = 0;
    let mut started_at: Option<f64> = None;

    for event in events {
        match session.handle(event) {
            SessionUpdate::Started(_) => started_at = event.process_time_ms(),
            SessionUpdate::Completed(outcome) => {
                let duration_ms = started_at
                    .take()
                    .zip(event.process_time_ms())
                    .map(|(start, end)| end - start);
                let snapshot = settings.snapshot();
                let closest = closest_gesture(
                    &outcome.path,
                    snapshot.gestures(),
                    snapshot.tolerance().inaccuracy_degrees,
                    max_distance,
                );
                tracing::info!(
                    "Gesture [{}] -> {} in {} (closest: {})",
                    format_path(&outcome.path),
                    outcome.action.map_or("no action".to_string(), |a| a.to_string()),
                    duration_ms.map_or("?".to_string(), |ms| format!("{:.0}ms", ms)),
                    closest.map_or("none".to_string(), |c| format!("{} at {:.2}", c.action, c.distance))
                );
                gestures.push(GestureReport {
                    outcome,
                    duration_ms,
                    closest,
                });
            }
            SessionUpdate::Cancelled => {
                started_at = None;
            }
            SessionUpdate::ContextMenu { prevent_default: true } => context_menus_prevented += 1,
            _ => {}
        }
    }

    // A recording that stops mid-gesture is dropped like a lost focus
    session.cancel();

    ReplayReport {
        events: events.len(),
        gestures,
        performed: log.performed(),
        context_menus_prevented,
    }
}

/// Replay a recording file and optionally write the report next to it
pub fn replay_file(
    input: &Path,
    output: Option<&Path>,
    settings: &SettingsStore,
    max_distance: Option<f64>,
) -> anyhow::Result<ReplayReport> {
    let events = load_events(input)?;
    tracing::info!("Replaying {} pointer events from {}", events.len(), input.display());

    let report = replay_events(&events, settings, max_distance);

    if let Some(output) = output {
        let data = serde_json::to_vec_pretty(&report).context("Failed to serialize report")?;
        std::fs::write(output, data)
            .with_context(|| format!("Failed to write output file {}", output.display()))?;
        tracing::info!("Wrote {} gesture reports to {}", report.gestures.len(), output.display());
    }

    Ok(report)
}
