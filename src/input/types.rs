use crate::recognizer::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl MouseButton {
    /// Bit in the DOM `MouseEvent.buttons` mask
    pub fn mask(&self) -> u16 {
        match self {
            Self::Left => 1,
            Self::Right => 2,
            Self::Middle => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Alt,
    Shift,
    Ctrl,
    Meta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MouseMove {
    pub x: f64,
    pub y: f64,
    /// Currently held buttons as a DOM `buttons` mask
    pub buttons: u16,
    #[serde(default)]
    pub process_time_ms: f64,
}

impl MouseMove {
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn is_held(&self, button: MouseButton) -> bool {
        self.buttons & button.mask() != 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MouseClick {
    pub x: f64,
    pub y: f64,
    pub button: MouseButton,
    #[serde(default)]
    pub active_modifiers: Vec<Modifier>,
    #[serde(default)]
    pub process_time_ms: f64,
}

impl MouseClick {
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// One recorded pointer event, as stored in replay files
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PointerEvent {
    Down(MouseClick),
    Move(MouseMove),
    Up(MouseClick),
    ContextMenu,
    /// Focus loss, page hide or the document becoming hidden
    Blur,
}

impl PointerEvent {
    /// Capture timestamp in milliseconds; context menu and blur carry none
    pub fn process_time_ms(&self) -> Option<f64> {
        match self {
            Self::Down(click) | Self::Up(click) => Some(click.process_time_ms),
            Self::Move(mv) => Some(mv.process_time_ms),
            Self::ContextMenu | Self::Blur => None,
        }
    }
}
