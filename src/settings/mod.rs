//! Gesture settings: the action list, the persisted document, its lenient
//! sanitizer and the shared snapshot store.

pub mod actions;
pub mod sanitize;
pub mod schema;
pub mod store;

pub use actions::Action;
pub use sanitize::{parse_gesture_input, sanitize_settings};
pub use schema::{GestureDefinition, GestureSettings, GestureTable, RecognizerConfig, Tolerance};
pub use store::SettingsStore;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid settings JSON in {0}: {1}")]
    Json(PathBuf, #[source] serde_json::Error),
}

pub type SettingsResult<T> = Result<T, SettingsError>;
