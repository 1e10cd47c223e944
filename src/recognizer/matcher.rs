//! Prefix pruning and exact matching against the gesture table

use crate::recognizer::direction::{angular_difference, directions_compatible, Direction};
use crate::settings::actions::Action;
use crate::settings::schema::GestureTable;
use serde::Serialize;

/// Winner of an exact match and its summed angular error in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExactMatch {
    pub action: Action,
    pub score: f64,
}

/// Whether some gesture still starts with something compatible with `path`.
///
/// Drives the early "this cannot succeed" feedback; it never rejects a
/// completed gesture by itself.
pub fn can_still_match(path: &[Direction], gestures: &GestureTable, inaccuracy_degrees: f64) -> bool {
    gestures.iter().any(|gesture| {
        gesture.directions.len() >= path.len()
            && path
                .iter()
                .zip(&gesture.directions)
                .all(|(&observed, &expected)| directions_compatible(observed, expected, inaccuracy_degrees))
    })
}

/// Summed angular error of `path` against `expected`, or `None` if the
/// lengths differ or any position is out of tolerance
pub fn exact_score(path: &[Direction], expected: &[Direction], inaccuracy_degrees: f64) -> Option<f64> {
    if path.len() != expected.len() {
        return None;
    }
    let mut score = 0.0;
    for (&observed, &wanted) in path.iter().zip(expected) {
        if !directions_compatible(observed, wanted, inaccuracy_degrees) {
            return None;
        }
        score += angular_difference(observed, wanted);
    }
    Some(score)
}

/// Best same-length gesture within tolerance.
///
/// Lowest score wins. Equal scores keep the gesture defined first in the
/// table. Empty paths and unassigned gestures never match.
pub fn match_exact(path: &[Direction], gestures: &GestureTable, inaccuracy_degrees: f64) -> Option<ExactMatch> {
    if path.is_empty() {
        return None;
    }
    let mut best: Option<ExactMatch> = None;
    for gesture in gestures.iter() {
        let Some(score) = exact_score(path, &gesture.directions, inaccuracy_degrees) else {
            continue;
        };
        if best.map_or(true, |b| score < b.score) {
            best = Some(ExactMatch {
                action: gesture.action,
                score,
            });
        }
    }
    best
}
