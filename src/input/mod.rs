//! Pointer input adaptation
//!
//! Translates recorded or live pointer events (button presses, moves with a
//! held-buttons mask, context menu requests, focus loss) into recognizer
//! calls, following the configured trigger button and modifier.

pub mod session;
pub mod types;

pub use session::{GestureSession, SessionUpdate, TrailFeedback};
pub use types::{Modifier, MouseButton, MouseClick, MouseMove, PointerEvent};
