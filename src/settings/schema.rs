//! Settings document and the recognizer configuration carried inside it
//!
//! The JSON layout mirrors the stored extension settings: a `gestures` map
//! keyed by action, the two tolerance knobs, and the trail/trigger options
//! consumed by the input adapter and renderer.

use crate::input::types::{Modifier, MouseButton};
use crate::recognizer::direction::Direction;
use crate::settings::actions::Action;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

pub const DEFAULT_MIN_SEGMENT_PX: u32 = 18;
pub const MIN_SEGMENT_PX_RANGE: (u32, u32) = (8, 80);

pub const DEFAULT_INACCURACY_DEGREES: u32 = 50;
pub const INACCURACY_DEGREES_RANGE: (u32, u32) = (10, 85);

pub const DEFAULT_TRAIL_COLOR: &str = "#24a1ff";
/// Trail colour shown once a gesture can no longer match anything
pub const INVALID_TRAIL_COLOR: &str = "#ff3b30";

pub const DEFAULT_TRAIL_WIDTH: u32 = 3;
pub const TRAIL_WIDTH_RANGE: (u32, u32) = (1, 16);

/// One action bound to its expected directions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureDefinition {
    pub action: Action,
    /// Empty means the action is unassigned
    pub directions: Vec<Direction>,
}

impl GestureDefinition {
    pub fn new(action: Action, directions: Vec<Direction>) -> Self {
        Self { action, directions }
    }

    pub fn is_assigned(&self) -> bool {
        !self.directions.is_empty()
    }
}

/// Ordered gesture table. Earlier entries win ties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureTable {
    definitions: Vec<GestureDefinition>,
}

impl GestureTable {
    pub fn new(definitions: Vec<GestureDefinition>) -> Self {
        Self { definitions }
    }

    /// Default bindings: reload D U, close tab D R, forward R, back L, new tab UR
    pub fn default_bindings(action: Action) -> Vec<Direction> {
        use Direction::*;
        match action {
            Action::Reload => vec![Down, Up],
            Action::CloseTab => vec![Down, Right],
            Action::Forward => vec![Right],
            Action::Back => vec![Left],
            Action::NewTab => vec![UpRight],
            _ => Vec::new(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &GestureDefinition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Directions bound to the first entry for `action`
    pub fn get(&self, action: Action) -> Option<&[Direction]> {
        self.definitions
            .iter()
            .find(|d| d.action == action)
            .map(|d| d.directions.as_slice())
    }

    /// Rebind an action, appending it if the table has no entry yet
    pub fn set(&mut self, action: Action, directions: Vec<Direction>) {
        match self.definitions.iter_mut().find(|d| d.action == action) {
            Some(existing) => existing.directions = directions,
            None => self.definitions.push(GestureDefinition::new(action, directions)),
        }
    }
}

impl Default for GestureTable {
    fn default() -> Self {
        Self::new(
            Action::ALL
                .into_iter()
                .map(|action| GestureDefinition::new(action, Self::default_bindings(action)))
                .collect(),
        )
    }
}

impl Serialize for GestureTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.definitions.len()))?;
        for definition in &self.definitions {
            map.serialize_entry(definition.action.as_str(), &definition.directions)?;
        }
        map.end()
    }
}

/// Distance and angle thresholds read by the recognizer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tolerance {
    /// Minimum step length that registers a direction, and minimum total
    /// travel before a match is attempted
    pub min_segment_px: f64,
    /// Largest angular deviation (0..=180) accepted between an observed and
    /// an expected direction
    pub inaccuracy_degrees: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            min_segment_px: DEFAULT_MIN_SEGMENT_PX as f64,
            inaccuracy_degrees: DEFAULT_INACCURACY_DEGREES as f64,
        }
    }
}

/// Immutable snapshot handed to every recognizer call
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizerConfig {
    pub gestures: GestureTable,
    #[serde(flatten)]
    pub tolerance: Tolerance,
}

impl RecognizerConfig {
    pub fn new(gestures: GestureTable, tolerance: Tolerance) -> Self {
        Self { gestures, tolerance }
    }
}

/// Mouse button that starts a gesture
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerButton {
    #[default]
    Right,
    Middle,
}

impl TriggerButton {
    pub const ALL: [TriggerButton; 2] = [TriggerButton::Right, TriggerButton::Middle];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Middle => "middle",
        }
    }

    pub fn button(&self) -> MouseButton {
        match self {
            Self::Right => MouseButton::Right,
            Self::Middle => MouseButton::Middle,
        }
    }
}

/// Modifier key that must be held for a press to start a gesture
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerModifier {
    #[default]
    Unset,
    Alt,
    Shift,
    Ctrl,
}

impl TriggerModifier {
    pub const ALL: [TriggerModifier; 4] = [
        TriggerModifier::Unset,
        TriggerModifier::Alt,
        TriggerModifier::Shift,
        TriggerModifier::Ctrl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::Alt => "alt",
            Self::Shift => "shift",
            Self::Ctrl => "ctrl",
        }
    }

    /// Alt also accepts Meta (Option/Command on macOS keyboards)
    pub fn is_satisfied(&self, active: &[Modifier]) -> bool {
        match self {
            Self::Unset => true,
            Self::Alt => active.contains(&Modifier::Alt) || active.contains(&Modifier::Meta),
            Self::Shift => active.contains(&Modifier::Shift),
            Self::Ctrl => active.contains(&Modifier::Ctrl),
        }
    }
}

/// The persisted settings document
///
/// Deserialization never fails on content: any JSON value is sanitized into
/// a usable document (see [`crate::settings::sanitize`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "serde_json::Value")]
pub struct GestureSettings {
    #[serde(flatten)]
    pub recognizer: RecognizerConfig,
    pub trail_color: String,
    pub trail_width: u32,
    pub trigger_mouse_button: TriggerButton,
    pub trigger_modifier: TriggerModifier,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            recognizer: RecognizerConfig::default(),
            trail_color: DEFAULT_TRAIL_COLOR.to_string(),
            trail_width: DEFAULT_TRAIL_WIDTH,
            trigger_mouse_button: TriggerButton::default(),
            trigger_modifier: TriggerModifier::default(),
        }
    }
}

impl GestureSettings {
    pub fn gestures(&self) -> &GestureTable {
        &self.recognizer.gestures
    }

    pub fn tolerance(&self) -> Tolerance {
        self.recognizer.tolerance
    }

    pub fn trail_color_for(&self, invalid: bool) -> &str {
        if invalid {
            INVALID_TRAIL_COLOR
        } else {
            &self.trail_color
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_order_and_bindings() {
        let table = GestureTable::default();
        assert_eq!(table.len(), Action::ALL.len());
        let order: Vec<_> = table.iter().map(|d| d.action).collect();
        assert_eq!(order, Action::ALL.to_vec());
        assert_eq!(table.get(Action::Reload), Some(&[Direction::Down, Direction::Up][..]));
        assert_eq!(table.get(Action::Back), Some(&[Direction::Left][..]));
        assert_eq!(table.get(Action::ZoomIn), Some(&[][..]));
        assert_eq!(table.iter().filter(|d| d.is_assigned()).count(), 5);
    }

    #[test]
    fn test_set_rebinds_or_appends() {
        let mut table = GestureTable::new(vec![GestureDefinition::new(
            Action::Back,
            vec![Direction::Left],
        )]);
        table.set(Action::Back, vec![Direction::UpLeft]);
        table.set(Action::ZoomIn, vec![Direction::Up, Direction::Up]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(Action::Back), Some(&[Direction::UpLeft][..]));
        assert_eq!(table.get(Action::ZoomIn).map(|d| d.len()), Some(2));
    }

    #[test]
    fn test_settings_serialize_flat_camel_case() {
        let value = serde_json::to_value(GestureSettings::default()).unwrap();
        assert_eq!(value["gestures"]["reload"], serde_json::json!(["D", "U"]));
        assert_eq!(value["gestures"]["zoomIn"], serde_json::json!([]));
        assert_eq!(value["minSegmentPx"], serde_json::json!(18.0));
        assert_eq!(value["inaccuracyDegrees"], serde_json::json!(50.0));
        assert_eq!(value["trailColor"], "#24a1ff");
        assert_eq!(value["triggerMouseButton"], "right");
        assert_eq!(value["triggerModifier"], "unset");
    }

    #[test]
    fn test_trigger_modifier_alt_accepts_meta() {
        assert!(TriggerModifier::Unset.is_satisfied(&[]));
        assert!(TriggerModifier::Alt.is_satisfied(&[Modifier::Meta]));
        assert!(TriggerModifier::Alt.is_satisfied(&[Modifier::Alt]));
        assert!(!TriggerModifier::Shift.is_satisfied(&[Modifier::Ctrl]));
        assert!(TriggerModifier::Ctrl.is_satisfied(&[Modifier::Shift, Modifier::Ctrl]));
    }

    #[test]
    fn test_trail_color_switches_when_invalid() {
        let settings = GestureSettings::default();
        assert_eq!(settings.trail_color_for(false), DEFAULT_TRAIL_COLOR);
        assert_eq!(settings.trail_color_for(true), INVALID_TRAIL_COLOR);
    }
}
