//! Match a typed direction sequence against the configured gestures

use crate::recognizer::direction::{format_path, Direction};
use crate::recognizer::edit_distance::{rank_gestures, ApproximateMatch};
use crate::recognizer::matcher::{can_still_match, match_exact, ExactMatch};
use crate::recognizer::smoothing::smooth_path;
use crate::settings::sanitize::gesture_tokens;
use crate::settings::schema::GestureSettings;
use anyhow::Context;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    /// Path after bridge-diagonal smoothing, as the recognizer would see it
    pub path: Vec<Direction>,
    pub prefix_viable: bool,
    pub exact: Option<ExactMatch>,
    /// Every assigned gesture, closest first
    pub ranking: Vec<ApproximateMatch>,
}

/// Parse tokens such as `D`, `u`, `DR` or `D,R`. Accepts the same text as
/// the settings editor but rejects unknown tokens instead of dropping them.
pub fn parse_directions(tokens: &[String]) -> anyhow::Result<Vec<Direction>> {
    tokens
        .iter()
        .flat_map(|t| gesture_tokens(t))
        .map(|t| t.parse::<Direction>().with_context(|| format!("Invalid direction token {:?}", t)))
        .collect()
}

pub fn match_directions(directions: &[Direction], settings: &GestureSettings) -> MatchReport {
    let path = smooth_path(directions);
    let tolerance = settings.tolerance().inaccuracy_degrees;

    let mut ranking = rank_gestures(&path, settings.gestures(), tolerance);
    // Stable: equal distances keep table order
    ranking.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    let report = MatchReport {
        prefix_viable: can_still_match(&path, settings.gestures(), tolerance),
        exact: match_exact(&path, settings.gestures(), tolerance),
        ranking,
        path,
    };

    tracing::debug!(
        "Matched [{}]: exact={:?} best={:?}",
        format_path(&report.path),
        report.exact.map(|m| m.action),
        report.ranking.first().map(|m| m.action)
    );

    report
}
