//! navi-gestures - mouse gesture recognition.
//!
//! Turns a stream of pointer samples into eight-way direction paths and
//! resolves them against a user-configurable gesture table.
//!
//! - [`recognizer`]: the synchronous core (quantize, smooth, prune, match)
//! - [`settings`]: the persisted settings document and its sanitizer
//! - [`input`]: pointer event adapter driving a recognizer
//! - [`dispatch`]: the seam to whatever performs resolved actions
//! - [`cli`] / [`commands`]: the offline replay tool

pub mod cli;
pub mod commands;
pub mod dispatch;
pub mod input;
pub mod recognizer;
pub mod settings;

pub use dispatch::{ActionLog, ActionSink};
pub use input::{GestureSession, PointerEvent};
pub use recognizer::{Direction, GestureOutcome, Recognizer};
pub use settings::{Action, GestureSettings, RecognizerConfig, SettingsStore};
