//! Named actions a gesture can resolve to

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    Reload,
    CloseTab,
    Forward,
    Back,
    NewTab,
    ZoomIn,
    ZoomOut,
    ScrollLeft,
    ScrollRight,
    ToggleMaximizeWindow,
    MaximizeWindow,
    MinimizeWindow,
    ToggleFullscreen,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown action: {0:?}")]
pub struct ParseActionError(pub String);

impl Action {
    /// Canonical order, also the order of the default gesture table
    pub const ALL: [Action; 13] = [
        Action::Reload,
        Action::CloseTab,
        Action::Forward,
        Action::Back,
        Action::NewTab,
        Action::ZoomIn,
        Action::ZoomOut,
        Action::ScrollLeft,
        Action::ScrollRight,
        Action::ToggleMaximizeWindow,
        Action::MaximizeWindow,
        Action::MinimizeWindow,
        Action::ToggleFullscreen,
    ];

    /// Settings key for this action
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reload => "reload",
            Self::CloseTab => "closeTab",
            Self::Forward => "forward",
            Self::Back => "back",
            Self::NewTab => "newTab",
            Self::ZoomIn => "zoomIn",
            Self::ZoomOut => "zoomOut",
            Self::ScrollLeft => "scrollLeft",
            Self::ScrollRight => "scrollRight",
            Self::ToggleMaximizeWindow => "toggleMaximizeWindow",
            Self::MaximizeWindow => "maximizeWindow",
            Self::MinimizeWindow => "minimizeWindow",
            Self::ToggleFullscreen => "toggleFullscreen",
        }
    }

    /// Human-readable label for settings editors
    pub fn label(&self) -> &'static str {
        match self {
            Self::Reload => "Reload page",
            Self::CloseTab => "Close tab",
            Self::Forward => "Go forward",
            Self::Back => "Go back",
            Self::NewTab => "Open new tab",
            Self::ZoomIn => "Zoom in",
            Self::ZoomOut => "Zoom out",
            Self::ScrollLeft => "Scroll left",
            Self::ScrollRight => "Scroll right",
            Self::ToggleMaximizeWindow => "Toggle maximize window",
            Self::MaximizeWindow => "Maximize window",
            Self::MinimizeWindow => "Minimize window",
            Self::ToggleFullscreen => "Toggle fullscreen",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseActionError(s.to_string()))
    }
}
