use crate::dispatch::ActionSink;
use crate::input::types::{MouseClick, MouseMove, PointerEvent};
use crate::recognizer::direction::format_path;
use crate::recognizer::{GestureOutcome, Recognizer, RecognizerError};
use crate::settings::schema::{GestureSettings, TriggerButton};
use crate::settings::store::SettingsStore;
use serde::Serialize;

/// Trail styling for the renderer after each pointer sample
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailFeedback {
    pub color: String,
    pub width: u32,
    pub invalid: bool,
}

impl TrailFeedback {
    fn new(settings: &GestureSettings, invalid: bool) -> Self {
        Self {
            color: settings.trail_color_for(invalid).to_string(),
            width: settings.trail_width,
            invalid,
        }
    }
}

/// What a single pointer event did to the session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionUpdate {
    /// Not a trigger press, or nothing was being tracked
    Ignored,
    Started(TrailFeedback),
    Trail(TrailFeedback),
    Completed(GestureOutcome),
    Cancelled,
    ContextMenu { prevent_default: bool },
}

/// Drives a [`Recognizer`] from raw pointer events.
///
/// Applies the trigger button/modifier rules, reads a fresh settings
/// snapshot per event, hands resolved actions to the sink, and remembers
/// whether the next context menu must be swallowed.
pub struct GestureSession<S: ActionSink> {
    recognizer: Recognizer,
    settings: SettingsStore,
    sink: S,
    suppress_next_context_menu: bool,
}

impl<S: ActionSink> GestureSession<S> {
    pub fn new(settings: SettingsStore, sink: S) -> Self {
        Self {
            recognizer: Recognizer::new(),
            settings,
            sink,
            suppress_next_context_menu: false,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.recognizer.is_tracking()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn handle(&mut self, event: &PointerEvent) -> SessionUpdate {
        match event {
            PointerEvent::Down(click) => self.on_mouse_down(click),
            PointerEvent::Move(mv) => self.on_mouse_move(mv),
            PointerEvent::Up(click) => self.on_mouse_up(click),
            PointerEvent::ContextMenu => SessionUpdate::ContextMenu {
                prevent_default: self.on_context_menu(),
            },
            PointerEvent::Blur => self.cancel(),
        }
    }

    pub fn on_mouse_down(&mut self, click: &MouseClick) -> SessionUpdate {
        let settings = self.settings.snapshot();
        if click.button != settings.trigger_mouse_button.button()
            || !settings.trigger_modifier.is_satisfied(&click.active_modifiers)
        {
            return SessionUpdate::Ignored;
        }

        if let Err(RecognizerError::AlreadyTracking) = self.recognizer.begin(click.point()) {
            tracing::debug!("Trigger pressed mid-gesture, restarting");
            self.recognizer.cancel();
            if let Err(e) = self.recognizer.begin(click.point()) {
                tracing::warn!("Could not restart gesture: {}", e);
                return SessionUpdate::Ignored;
            }
        }

        SessionUpdate::Started(TrailFeedback::new(&settings, false))
    }

    pub fn on_mouse_move(&mut self, mv: &MouseMove) -> SessionUpdate {
        if !self.recognizer.is_tracking() {
            return SessionUpdate::Ignored;
        }
        let settings = self.settings.snapshot();
        if !mv.is_held(settings.trigger_mouse_button.button()) {
            // Button released outside our view; finish without acting
            return self.complete(false);
        }
        match self.recognizer.extend(mv.point(), &settings.recognizer) {
            Some(feedback) => SessionUpdate::Trail(TrailFeedback::new(&settings, feedback.invalid)),
            None => SessionUpdate::Ignored,
        }
    }

    pub fn on_mouse_up(&mut self, click: &MouseClick) -> SessionUpdate {
        if !self.recognizer.is_tracking() {
            return SessionUpdate::Ignored;
        }
        let release_allowed = click.button == self.settings.snapshot().trigger_mouse_button.button();
        self.complete(release_allowed)
    }

    /// Whether the platform context menu should be prevented
    pub fn on_context_menu(&mut self) -> bool {
        if self.recognizer.is_tracking() || self.suppress_next_context_menu {
            self.suppress_next_context_menu = false;
            true
        } else {
            false
        }
    }

    /// Focus loss, page hide or similar: drop the gesture without resolving it
    pub fn cancel(&mut self) -> SessionUpdate {
        if self.recognizer.cancel() {
            tracing::debug!("Gesture cancelled");
            SessionUpdate::Cancelled
        } else {
            SessionUpdate::Ignored
        }
    }

    fn complete(&mut self, release_allowed: bool) -> SessionUpdate {
        let settings = self.settings.snapshot();
        let Some(outcome) = self.recognizer.end(release_allowed, &settings.recognizer) else {
            return SessionUpdate::Ignored;
        };

        tracing::debug!(
            "Gesture finished: path=[{}] distance={:.1} invalid={} action={:?}",
            format_path(&outcome.path),
            outcome.total_distance,
            outcome.invalid,
            outcome.action
        );

        if let Some(action) = outcome.action {
            if let Err(e) = self.sink.perform(action) {
                tracing::warn!("Failed to perform {}: {}", action, e);
            }
        }

        if outcome.suppress_default && settings.trigger_mouse_button == TriggerButton::Right {
            self.suppress_next_context_menu = true;
        }

        SessionUpdate::Completed(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{ActionLog, DispatchError, DispatchResult};
    use crate::input::types::{Modifier, MouseButton};
    use crate::recognizer::Direction;
    use crate::settings::actions::Action;
    use crate::settings::schema::{TriggerModifier, INVALID_TRAIL_COLOR};

    fn down(x: f64, y: f64, button: MouseButton) -> PointerEvent {
        PointerEvent::Down(MouseClick {
            x,
            y,
            button,
            active_modifiers: vec![],
            process_time_ms: 0.0,
        })
    }

    fn up(x: f64, y: f64, button: MouseButton) -> PointerEvent {
        PointerEvent::Up(MouseClick {
            x,
            y,
            button,
            active_modifiers: vec![],
            process_time_ms: 0.0,
        })
    }

    fn held(x: f64, y: f64, buttons: u16) -> PointerEvent {
        PointerEvent::Move(MouseMove {
            x,
            y,
            buttons,
            process_time_ms: 0.0,
        })
    }

    fn session() -> (GestureSession<ActionLog>, ActionLog) {
        let log = ActionLog::new();
        (GestureSession::new(SettingsStore::default(), log.clone()), log)
    }

    #[test]
    fn test_right_drag_left_goes_back() {
        let (mut session, log) = session();
        assert!(matches!(session.handle(&down(300.0, 300.0, MouseButton::Right)), SessionUpdate::Started(_)));
        session.handle(&held(260.0, 302.0, 2));
        let update = session.handle(&up(260.0, 302.0, MouseButton::Right));
        match update {
            SessionUpdate::Completed(outcome) => assert_eq!(outcome.action, Some(Action::Back)),
            other => panic!("unexpected update {:?}", other),
        }
        assert_eq!(log.performed(), vec![Action::Back]);
        // Context menu after the gesture is swallowed exactly once
        assert!(session.on_context_menu());
        assert!(!session.on_context_menu());
    }

    #[test]
    fn test_non_trigger_button_is_ignored() {
        let (mut session, _) = session();
        assert_eq!(session.handle(&down(0.0, 0.0, MouseButton::Left)), SessionUpdate::Ignored);
        assert_eq!(session.handle(&held(50.0, 0.0, 1)), SessionUpdate::Ignored);
        assert!(!session.is_tracking());
    }

    #[test]
    fn test_modifier_requirement() {
        let store = SettingsStore::default();
        store.update(|s| s.trigger_modifier = TriggerModifier::Shift);
        let mut session = GestureSession::new(store, ActionLog::new());
        assert_eq!(session.handle(&down(0.0, 0.0, MouseButton::Right)), SessionUpdate::Ignored);
        let with_shift = PointerEvent::Down(MouseClick {
            x: 0.0,
            y: 0.0,
            button: MouseButton::Right,
            active_modifiers: vec![Modifier::Shift],
            process_time_ms: 0.0,
        });
        assert!(matches!(session.handle(&with_shift), SessionUpdate::Started(_)));
    }

    #[test]
    fn test_lost_button_completes_without_action() {
        let (mut session, log) = session();
        session.handle(&down(0.0, 0.0, MouseButton::Right));
        session.handle(&held(-40.0, 0.0, 2));
        let update = session.handle(&held(-80.0, 0.0, 0));
        match update {
            SessionUpdate::Completed(outcome) => {
                assert_eq!(outcome.action, None);
                assert_eq!(outcome.path, vec![Direction::Left]);
                assert!(!outcome.suppress_default);
            }
            other => panic!("unexpected update {:?}", other),
        }
        assert!(log.performed().is_empty());
        assert!(!session.on_context_menu());
    }

    #[test]
    fn test_invalid_trail_turns_red() {
        let (mut session, _) = session();
        session.handle(&down(0.0, 0.0, MouseButton::Right));
        let first = session.handle(&held(-40.0, 0.0, 2));
        assert!(matches!(first, SessionUpdate::Trail(TrailFeedback { invalid: false, .. })));
        let second = session.handle(&held(-40.0, 40.0, 2));
        match second {
            SessionUpdate::Trail(trail) => {
                assert!(trail.invalid);
                assert_eq!(trail.color, INVALID_TRAIL_COLOR);
            }
            other => panic!("unexpected update {:?}", other),
        }
    }

    #[test]
    fn test_blur_cancels_and_releases_context_menu() {
        let (mut session, log) = session();
        session.handle(&down(0.0, 0.0, MouseButton::Right));
        session.handle(&held(-40.0, 0.0, 2));
        assert_eq!(session.handle(&PointerEvent::Blur), SessionUpdate::Cancelled);
        assert_eq!(session.handle(&up(-40.0, 0.0, MouseButton::Right)), SessionUpdate::Ignored);
        assert!(log.performed().is_empty());
        assert_eq!(
            session.handle(&PointerEvent::ContextMenu),
            SessionUpdate::ContextMenu { prevent_default: false }
        );
    }

    #[test]
    fn test_context_menu_prevented_while_tracking() {
        let (mut session, _) = session();
        session.handle(&down(0.0, 0.0, MouseButton::Right));
        assert!(session.on_context_menu());
    }

    #[test]
    fn test_second_press_restarts_gesture() {
        let (mut session, log) = session();
        session.handle(&down(0.0, 0.0, MouseButton::Right));
        session.handle(&held(0.0, 40.0, 2));
        assert!(matches!(session.handle(&down(100.0, 100.0, MouseButton::Right)), SessionUpdate::Started(_)));
        session.handle(&held(140.0, 100.0, 2));
        session.handle(&up(140.0, 100.0, MouseButton::Right));
        assert_eq!(log.performed(), vec![Action::Forward]);
    }

    #[test]
    fn test_middle_button_trigger_does_not_suppress_context_menu() {
        let store = SettingsStore::default();
        store.update(|s| s.trigger_mouse_button = TriggerButton::Middle);
        let log = ActionLog::new();
        let mut session = GestureSession::new(store, log.clone());
        session.handle(&down(0.0, 0.0, MouseButton::Middle));
        session.handle(&held(40.0, 0.0, 4));
        session.handle(&up(40.0, 0.0, MouseButton::Middle));
        assert_eq!(log.performed(), vec![Action::Forward]);
        assert!(!session.on_context_menu());
    }

    #[test]
    fn test_sink_failure_is_not_fatal() {
        struct Refuse;
        impl ActionSink for Refuse {
            fn perform(&mut self, action: Action) -> DispatchResult<()> {
                Err(DispatchError::Unsupported(action))
            }
        }
        let mut session = GestureSession::new(SettingsStore::default(), Refuse);
        session.handle(&down(0.0, 0.0, MouseButton::Right));
        session.handle(&held(40.0, 0.0, 2));
        let update = session.handle(&up(40.0, 0.0, MouseButton::Right));
        assert!(matches!(update, SessionUpdate::Completed(GestureOutcome { action: Some(Action::Forward), .. })));
        assert!(!session.is_tracking());
    }

    #[test]
    fn test_settings_changes_apply_mid_session() {
        let store = SettingsStore::default();
        let log = ActionLog::new();
        let mut session = GestureSession::new(store.clone(), log.clone());
        store.update(|s| s.recognizer.gestures.set(Action::Back, vec![Direction::UpLeft]));
        session.handle(&down(100.0, 100.0, MouseButton::Right));
        session.handle(&held(70.0, 70.0, 2));
        session.handle(&up(70.0, 70.0, MouseButton::Right));
        assert_eq!(log.performed(), vec![Action::Back]);
    }
}
