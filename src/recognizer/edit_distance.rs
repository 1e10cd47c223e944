//! Weighted edit distance between direction paths
//!
//! Softer than the exact matcher: paths of different length stay comparable,
//! and substitutions are charged by how far apart the two headings are.

use crate::recognizer::direction::{angular_difference, Direction};
use crate::settings::actions::Action;
use crate::settings::schema::GestureTable;
use serde::Serialize;

/// Cost of inserting or deleting one direction
pub const INDEL_COST: f64 = 0.7;

/// Cost of replacing `a` with `b`, graded by angular distance
pub fn substitution_cost(a: Direction, b: Direction, inaccuracy_degrees: f64) -> f64 {
    if a == b {
        return 0.0;
    }
    let diff = angular_difference(a, b);
    if diff <= inaccuracy_degrees {
        0.2
    } else if diff <= inaccuracy_degrees + 45.0 {
        0.5
    } else if diff <= inaccuracy_degrees + 90.0 {
        0.8
    } else {
        1.0
    }
}

/// Minimum alignment cost divided by the longer path's length.
///
/// Two empty paths are at distance 0. Symmetric in its path arguments.
pub fn edit_distance(observed: &[Direction], expected: &[Direction], inaccuracy_degrees: f64) -> f64 {
    let longest = observed.len().max(expected.len());
    if longest == 0 {
        return 0.0;
    }

    // Single rolling row over `expected`
    let mut prev: Vec<f64> = (0..=expected.len()).map(|j| j as f64 * INDEL_COST).collect();
    let mut curr = vec![0.0; expected.len() + 1];

    for (i, &o) in observed.iter().enumerate() {
        curr[0] = (i + 1) as f64 * INDEL_COST;
        for (j, &e) in expected.iter().enumerate() {
            let substitute = prev[j] + substitution_cost(o, e, inaccuracy_degrees);
            let delete = prev[j + 1] + INDEL_COST;
            let insert = curr[j] + INDEL_COST;
            curr[j + 1] = substitute.min(delete).min(insert);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[expected.len()] / longest as f64
}

/// Closest gesture under [`edit_distance`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproximateMatch {
    pub action: Action,
    pub distance: f64,
}

/// Distance from `path` to every assigned gesture, in table order
pub fn rank_gestures(path: &[Direction], gestures: &GestureTable, inaccuracy_degrees: f64) -> Vec<ApproximateMatch> {
    gestures
        .iter()
        .filter(|g| g.is_assigned())
        .map(|g| ApproximateMatch {
            action: g.action,
            distance: edit_distance(path, &g.directions, inaccuracy_degrees),
        })
        .collect()
}

/// Lowest-distance assigned gesture, ties to table order.
///
/// With `max_distance` set, a best match above the cutoff is discarded.
pub fn closest_gesture(
    path: &[Direction],
    gestures: &GestureTable,
    inaccuracy_degrees: f64,
    max_distance: Option<f64>,
) -> Option<ApproximateMatch> {
    if path.is_empty() {
        return None;
    }
    let mut best: Option<ApproximateMatch> = None;
    for candidate in rank_gestures(path, gestures, inaccuracy_degrees) {
        if best.map_or(true, |b| candidate.distance < b.distance) {
            best = Some(candidate);
        }
    }
    best.filter(|b| max_distance.map_or(true, |cutoff| b.distance <= cutoff))
}
