//! Per-gesture path accumulation
//!
//! Turns a stream of pointer positions into a direction path. A direction is
//! only registered once a single step covers `min_segment_px`; shorter
//! steps keep the reference point so jitter adds up toward the next segment.

use crate::recognizer::direction::Direction;
use crate::recognizer::matcher::can_still_match;
use crate::recognizer::smoothing::collapse_bridge;
use crate::settings::schema::RecognizerConfig;
use serde::{Deserialize, Serialize};

/// Pointer position in input coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// What one extend step did to the path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// No movement, or a step shorter than the segment threshold
    BelowThreshold,
    /// Long enough, but same heading as the last registered direction
    SameDirection,
    /// A new direction was appended (and possibly smoothed)
    Appended { collapsed: bool },
}

/// State of the single gesture being tracked
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionState {
    pub path: Vec<Direction>,
    pub last_point: Point,
    /// All travel so far, including steps too short to register a direction
    pub total_distance: f64,
    /// Set once the path stops being a prefix of any gesture; never cleared
    pub invalid: bool,
}

impl RecognitionState {
    pub fn new(origin: Point) -> Self {
        Self {
            path: Vec::new(),
            last_point: origin,
            total_distance: 0.0,
            invalid: false,
        }
    }

    pub fn extend(&mut self, point: Point, config: &RecognizerConfig) -> StepResult {
        let dx = point.x - self.last_point.x;
        let dy = point.y - self.last_point.y;
        let dist = dx.hypot(dy);
        self.total_distance += dist;

        if dist == 0.0 || dist < config.tolerance.min_segment_px {
            return StepResult::BelowThreshold;
        }

        self.last_point = point;
        let dir = Direction::from_vector(dx, dy);
        if self.path.last() == Some(&dir) {
            return StepResult::SameDirection;
        }

        self.path.push(dir);
        let collapsed = collapse_bridge(&mut self.path);
        if !self.invalid
            && !can_still_match(&self.path, &config.gestures, config.tolerance.inaccuracy_degrees)
        {
            self.invalid = true;
        }
        StepResult::Appended { collapsed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::schema::{GestureDefinition, GestureTable, Tolerance};
    use crate::settings::actions::Action;
    use Direction::*;

    fn config() -> RecognizerConfig {
        RecognizerConfig::default()
    }

    #[test]
    fn test_small_steps_never_register() {
        let cfg = config();
        let mut state = RecognitionState::new(Point::new(0.0, 0.0));
        // Reference point stays at the origin, so keep each sample inside the radius
        for i in 0..50 {
            let x = if i % 2 == 0 { 10.0 } else { 0.0 };
            assert_eq!(state.extend(Point::new(x, 5.0), &cfg), StepResult::BelowThreshold);
        }
        assert!(state.path.is_empty());
        assert!(state.total_distance > cfg.tolerance.min_segment_px);
        assert_eq!(state.last_point, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_jitter_accumulates_toward_next_segment() {
        let cfg = config();
        let mut state = RecognitionState::new(Point::new(0.0, 0.0));
        assert_eq!(state.extend(Point::new(-10.0, 0.0), &cfg), StepResult::BelowThreshold);
        assert_eq!(state.extend(Point::new(-20.0, 1.0), &cfg), StepResult::Appended { collapsed: false });
        assert_eq!(state.path, vec![Left]);
        assert_eq!(state.last_point, Point::new(-20.0, 1.0));
    }

    #[test]
    fn test_zero_step_is_ignored() {
        let cfg = RecognizerConfig::new(
            GestureTable::default(),
            Tolerance {
                min_segment_px: 0.0,
                inaccuracy_degrees: 50.0,
            },
        );
        let mut state = RecognitionState::new(Point::new(3.0, 3.0));
        assert_eq!(state.extend(Point::new(3.0, 3.0), &cfg), StepResult::BelowThreshold);
        assert!(state.path.is_empty());
        assert_eq!(state.total_distance, 0.0);
    }

    #[test]
    fn test_repeated_direction_is_not_appended() {
        let cfg = config();
        let mut state = RecognitionState::new(Point::new(0.0, 0.0));
        state.extend(Point::new(0.0, 30.0), &cfg);
        assert_eq!(state.extend(Point::new(2.0, 60.0), &cfg), StepResult::SameDirection);
        assert_eq!(state.path, vec![Down]);
        assert_eq!(state.last_point, Point::new(2.0, 60.0));
    }

    #[test]
    fn test_corner_bridge_collapses_while_extending() {
        let cfg = RecognizerConfig::new(
            GestureTable::new(vec![GestureDefinition::new(Action::CloseTab, vec![Right, Down])]),
            Tolerance::default(),
        );
        let mut state = RecognitionState::new(Point::new(0.0, 0.0));
        state.extend(Point::new(30.0, 0.0), &cfg);
        state.extend(Point::new(50.0, 20.0), &cfg);
        assert_eq!(state.path, vec![Right, DownRight]);
        assert_eq!(state.extend(Point::new(50.0, 50.0), &cfg), StepResult::Appended { collapsed: true });
        assert_eq!(state.path, vec![Right, Down]);
        assert!(!state.invalid);
    }

    #[test]
    fn test_invalid_is_sticky() {
        let cfg = config();
        let mut state = RecognitionState::new(Point::new(0.0, 0.0));
        // L then D: nothing in the default table starts that way
        state.extend(Point::new(-30.0, 0.0), &cfg);
        assert!(!state.invalid);
        state.extend(Point::new(-30.0, 30.0), &cfg);
        assert!(state.invalid);
        // Moves that would individually be fine do not restore validity
        for p in [(0.0, 30.0), (0.0, 0.0), (30.0, 0.0)] {
            state.extend(Point::new(p.0, p.1), &cfg);
            assert!(state.invalid);
        }
    }
}
