//! Gesture recognition core
//!
//! A synchronous reducer over begin/extend/end/cancel events. The
//! [`Recognizer`] owns at most one live [`RecognitionState`]; configuration
//! is passed in on every call and never mutated.
//!
//! Pipeline per extend: accumulate → quantize → collapse bridge diagonals →
//! prefix check. On end: distance and validity gates → exact match.

pub mod accumulator;
pub mod direction;
pub mod edit_distance;
pub mod matcher;
pub mod smoothing;

pub use accumulator::{Point, RecognitionState, StepResult};
pub use direction::Direction;
pub use edit_distance::{closest_gesture, edit_distance, ApproximateMatch};
pub use matcher::{can_still_match, match_exact, ExactMatch};

use crate::settings::actions::Action;
use crate::settings::schema::RecognizerConfig;
use serde::Serialize;
use thiserror::Error;

/// Multiple of `min_segment_px` above which an unmatched gesture still
/// suppresses the platform's default UI (e.g. the context menu)
pub const SUPPRESS_DISTANCE_FACTOR: f64 = 1.5;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecognizerError {
    #[error("A gesture is already being tracked")]
    AlreadyTracking,
}

pub type RecognizerResult<T> = Result<T, RecognizerError>;

/// Input events, in the order the pointer produced them
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Begin(Point),
    Extend(Point),
    /// `release_allowed = false` finishes bookkeeping without matching,
    /// used when the trigger was lost rather than released
    End { release_allowed: bool },
    Cancel,
}

/// Feedback after each extend, for trail rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingFeedback {
    pub invalid: bool,
    pub path_len: usize,
    pub total_distance: f64,
}

/// Result of a finished gesture
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureOutcome {
    pub action: Option<Action>,
    pub path: Vec<Direction>,
    pub invalid: bool,
    pub total_distance: f64,
    /// Whether the caller should swallow the default UI of the trigger button
    pub suppress_default: bool,
}

/// Output of [`Recognizer::handle`]
#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    /// The event arrived while idle and was ignored
    Idle,
    Tracking(TrackingFeedback),
    Completed(GestureOutcome),
    Cancelled,
}

#[derive(Debug, Default)]
pub struct Recognizer {
    state: Option<RecognitionState>,
}

impl Recognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<&RecognitionState> {
        self.state.as_ref()
    }

    /// Current invalid flag; false while idle
    pub fn is_invalid(&self) -> bool {
        self.state.as_ref().map_or(false, |s| s.invalid)
    }

    /// Start tracking at `origin`. Rejected while a gesture is live; the
    /// caller decides whether to cancel first.
    pub fn begin(&mut self, origin: Point) -> RecognizerResult<()> {
        if self.state.is_some() {
            return Err(RecognizerError::AlreadyTracking);
        }
        self.state = Some(RecognitionState::new(origin));
        Ok(())
    }

    /// Feed one pointer sample. `None` while idle.
    pub fn extend(&mut self, point: Point, config: &RecognizerConfig) -> Option<TrackingFeedback> {
        let state = self.state.as_mut()?;
        state.extend(point, config);
        Some(TrackingFeedback {
            invalid: state.invalid,
            path_len: state.path.len(),
            total_distance: state.total_distance,
        })
    }

    /// Finish the gesture and resolve it. `None` while idle.
    pub fn end(&mut self, release_allowed: bool, config: &RecognizerConfig) -> Option<GestureOutcome> {
        let state = self.state.take()?;
        Some(resolve(state, release_allowed, config))
    }

    /// Drop any live gesture. Returns whether one was being tracked.
    pub fn cancel(&mut self) -> bool {
        self.state.take().is_some()
    }

    pub fn handle(&mut self, event: GestureEvent, config: &RecognizerConfig) -> RecognizerResult<Feedback> {
        let feedback = match event {
            GestureEvent::Begin(origin) => {
                self.begin(origin)?;
                Feedback::Tracking(TrackingFeedback {
                    invalid: false,
                    path_len: 0,
                    total_distance: 0.0,
                })
            }
            GestureEvent::Extend(point) => self
                .extend(point, config)
                .map_or(Feedback::Idle, Feedback::Tracking),
            GestureEvent::End { release_allowed } => self
                .end(release_allowed, config)
                .map_or(Feedback::Idle, Feedback::Completed),
            GestureEvent::Cancel => {
                if self.cancel() {
                    Feedback::Cancelled
                } else {
                    Feedback::Idle
                }
            }
        };
        Ok(feedback)
    }
}

fn resolve(state: RecognitionState, release_allowed: bool, config: &RecognizerConfig) -> GestureOutcome {
    let tolerance = config.tolerance;
    let RecognitionState {
        path,
        total_distance,
        invalid,
        ..
    } = state;

    let action = if release_allowed
        && !invalid
        && !path.is_empty()
        && total_distance >= tolerance.min_segment_px
    {
        match_exact(&path, &config.gestures, tolerance.inaccuracy_degrees).map(|m| m.action)
    } else {
        None
    };

    // Jitter that never registered a direction is still a plain click
    let suppress_default = release_allowed
        && !path.is_empty()
        && (action.is_some() || total_distance >= tolerance.min_segment_px * SUPPRESS_DISTANCE_FACTOR);

    GestureOutcome {
        action,
        path,
        invalid,
        total_distance,
        suppress_default,
    }
}
