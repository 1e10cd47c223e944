//! Bridge-diagonal collapse
//!
//! A clean right-angle turn often yields one quantized sample halfway round
//! the corner, e.g. R, DR, D. The diagonal between two perpendicular
//! cardinals is noise and is dropped so the path reads R, D.

use crate::recognizer::direction::Direction;

/// Diagonal lying between two perpendicular cardinal directions
pub fn bridge_diagonal(a: Direction, c: Direction) -> Option<Direction> {
    if !a.is_cardinal() || !c.is_cardinal() || a == c {
        return None;
    }
    let (ax, ay) = a.unit();
    let (cx, cy) = c.unit();
    let (dx, dy) = (ax + cx, ay + cy);
    // Reversals (R then L) sum to zero on one axis
    if dx == 0 || dy == 0 {
        return None;
    }
    Direction::from_unit(dx, dy)
}

/// Drop the middle of the last three directions if it bridges a corner.
///
/// Returns whether the path was shortened. At most one collapse happens
/// per call.
pub fn collapse_bridge(path: &mut Vec<Direction>) -> bool {
    let len = path.len();
    if len < 3 {
        return false;
    }
    let (a, b, c) = (path[len - 3], path[len - 2], path[len - 1]);
    if bridge_diagonal(a, c) == Some(b) {
        path.remove(len - 2);
        true
    } else {
        false
    }
}

/// Rebuild a path one direction at a time, collapsing as the recognizer does
pub fn smooth_path(path: &[Direction]) -> Vec<Direction> {
    let mut out: Vec<Direction> = Vec::with_capacity(path.len());
    for &dir in path {
        if out.last() == Some(&dir) {
            continue;
        }
        out.push(dir);
        collapse_bridge(&mut out);
    }
    out
}
