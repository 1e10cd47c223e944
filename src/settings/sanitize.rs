//! Lenient settings normalization
//!
//! Stored settings come from an editor form and from older versions, so
//! every field is coerced independently and falls back to its default
//! rather than failing the whole document.

use crate::recognizer::direction::Direction;
use crate::settings::actions::Action;
use crate::settings::schema::{
    GestureDefinition, GestureSettings, GestureTable, RecognizerConfig, Tolerance, TriggerButton,
    TriggerModifier, DEFAULT_INACCURACY_DEGREES, DEFAULT_MIN_SEGMENT_PX, DEFAULT_TRAIL_COLOR,
    DEFAULT_TRAIL_WIDTH, INACCURACY_DEGREES_RANGE, MIN_SEGMENT_PX_RANGE, TRAIL_WIDTH_RANGE,
};
use serde_json::Value;

impl From<Value> for GestureSettings {
    fn from(raw: Value) -> Self {
        sanitize_settings(&raw)
    }
}

/// Build a complete settings document from arbitrary JSON
pub fn sanitize_settings(raw: &Value) -> GestureSettings {
    let empty = serde_json::Map::new();
    let base = raw.as_object().unwrap_or(&empty);
    let raw_gestures = base.get("gestures").and_then(Value::as_object);

    let gestures = Action::ALL
        .into_iter()
        .map(|action| {
            let fallback = GestureTable::default_bindings(action);
            let directions = match raw_gestures.and_then(|g| g.get(action.as_str())) {
                Some(value) => normalize_gesture_array(value, &fallback),
                None => fallback,
            };
            GestureDefinition::new(action, directions)
        })
        .collect();

    let min_segment_px = clamp_number(base.get("minSegmentPx"), MIN_SEGMENT_PX_RANGE, DEFAULT_MIN_SEGMENT_PX);
    let inaccuracy_degrees = clamp_number(
        base.get("inaccuracyDegrees"),
        INACCURACY_DEGREES_RANGE,
        DEFAULT_INACCURACY_DEGREES,
    );

    GestureSettings {
        recognizer: RecognizerConfig::new(
            GestureTable::new(gestures),
            Tolerance {
                min_segment_px: min_segment_px as f64,
                inaccuracy_degrees: inaccuracy_degrees as f64,
            },
        ),
        trail_color: normalize_hex_color(base.get("trailColor").and_then(Value::as_str), DEFAULT_TRAIL_COLOR),
        trail_width: clamp_number(base.get("trailWidth"), TRAIL_WIDTH_RANGE, DEFAULT_TRAIL_WIDTH),
        trigger_mouse_button: normalize_choice(
            base.get("triggerMouseButton"),
            &TriggerButton::ALL,
            TriggerButton::as_str,
            TriggerButton::default(),
        ),
        trigger_modifier: normalize_choice(
            base.get("triggerModifier"),
            &TriggerModifier::ALL,
            TriggerModifier::as_str,
            TriggerModifier::default(),
        ),
    }
}

/// Numeric coercion in the style of a form field: numbers, numeric strings,
/// booleans and null are accepted, anything else (or a missing key) falls
/// back. The result is rounded half up and clamped to `range`.
pub fn clamp_number(value: Option<&Value>, range: (u32, u32), fallback: u32) -> u32 {
    let num = match value {
        None => return fallback,
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        Some(Value::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Some(Value::Null) => 0.0,
        Some(_) => f64::NAN,
    };
    if !num.is_finite() {
        return fallback;
    }
    let rounded = (num + 0.5).floor();
    rounded.clamp(range.0 as f64, range.1 as f64) as u32
}

/// Keep the valid direction codes of a JSON list; an empty result (or a
/// non-list) yields `fallback`
pub fn normalize_gesture_array(value: &Value, fallback: &[Direction]) -> Vec<Direction> {
    let Some(parts) = value.as_array() else {
        return fallback.to_vec();
    };
    let out: Vec<Direction> = parts
        .iter()
        .filter_map(Value::as_str)
        .filter_map(|token| token.parse().ok())
        .collect();
    if out.is_empty() {
        fallback.to_vec()
    } else {
        out
    }
}

/// Split gesture text into direction tokens. Whitespace, `,`, `-`, `=`
/// and `>` all separate tokens, so `"D U"`, `"d-u"` and `"D=>U"` agree.
pub fn gesture_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || matches!(c, ',' | '-' | '=' | '>'))
        .filter(|token| !token.is_empty())
}

/// Parse editor text such as `"D U"`, `"d-u"`, `"D > U"` or `"D,U"`
pub fn parse_gesture_input(text: &str, fallback: &[Direction]) -> Vec<Direction> {
    let out: Vec<Direction> = gesture_tokens(text)
        .filter_map(|token| token.parse().ok())
        .collect();
    if out.is_empty() {
        fallback.to_vec()
    } else {
        out
    }
}

/// `#rgb` / `#rrggbb` (leading `#` optional) to lowercase `#rrggbb`
pub fn normalize_hex_color(input: Option<&str>, fallback: &str) -> String {
    let Some(raw) = input else {
        return fallback.to_string();
    };
    let value = raw.trim();
    let hex = value.strip_prefix('#').unwrap_or(value);
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return fallback.to_string();
    }
    match hex.len() {
        3 => {
            let doubled: String = hex.chars().flat_map(|c| [c, c]).collect();
            format!("#{}", doubled.to_ascii_lowercase())
        }
        6 => format!("#{}", hex.to_ascii_lowercase()),
        _ => fallback.to_string(),
    }
}

fn normalize_choice<T: Copy>(
    value: Option<&Value>,
    choices: &[T],
    name: fn(&T) -> &'static str,
    fallback: T,
) -> T {
    let Some(wanted) = value.and_then(Value::as_str).map(str::trim) else {
        return fallback;
    };
    choices
        .iter()
        .copied()
        .find(|choice| name(choice).eq_ignore_ascii_case(wanted))
        .unwrap_or(fallback)
}
