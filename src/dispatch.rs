//! Action dispatch seam
//!
//! Defines the interface to whatever performs a resolved action (tab
//! navigation, zoom, window state). The recognizer only names the action.

use crate::settings::actions::Action;
use parking_lot::Mutex as ParkingMutex;
use std::sync::Arc;
use thiserror::Error;

/// Errors a sink can report when performing an action
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Action not supported: {0}")]
    Unsupported(Action),

    #[error("Action failed: {0}")]
    Failed(String),
}

pub type DispatchResult<T> = Result<T, DispatchError>;

/// Receiver of resolved gesture actions
pub trait ActionSink {
    fn perform(&mut self, action: Action) -> DispatchResult<()>;
}

impl<S: ActionSink + ?Sized> ActionSink for Box<S> {
    fn perform(&mut self, action: Action) -> DispatchResult<()> {
        (**self).perform(action)
    }
}

/// Sink that records every action it is asked to perform
#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    performed: Arc<ParkingMutex<Vec<Action>>>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn performed(&self) -> Vec<Action> {
        self.performed.lock().clone()
    }

    pub fn clear(&self) {
        self.performed.lock().clear();
    }
}

impl ActionSink for ActionLog {
    fn perform(&mut self, action: Action) -> DispatchResult<()> {
        tracing::info!("Performing action {} ({})", action, action.label());
        self.performed.lock().push(action);
        Ok(())
    }
}
