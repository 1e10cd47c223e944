//! Eight-way direction quantization
//!
//! Maps pointer displacement vectors onto compass directions and provides
//! the angular comparison used by every matcher.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Width of one direction sector in degrees
pub const SECTOR_DEGREES: f64 = 45.0;

/// A quantized heading of pointer motion (screen Y points down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "R")]
    Right,
    #[serde(rename = "DR")]
    DownRight,
    #[serde(rename = "D")]
    Down,
    #[serde(rename = "DL")]
    DownLeft,
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "UL")]
    UpLeft,
    #[serde(rename = "U")]
    Up,
    #[serde(rename = "UR")]
    UpRight,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown direction: {0:?}")]
pub struct ParseDirectionError(pub String);

impl Direction {
    /// All directions in sector order (clockwise from Right)
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::Left,
        Direction::UpLeft,
        Direction::Up,
        Direction::UpRight,
    ];

    /// Sector index, 0 for Right increasing clockwise
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Bound angle in degrees
    pub fn angle(self) -> f64 {
        self.index() as f64 * SECTOR_DEGREES
    }

    pub fn code(self) -> &'static str {
        match self {
            Direction::Right => "R",
            Direction::DownRight => "DR",
            Direction::Down => "D",
            Direction::DownLeft => "DL",
            Direction::Left => "L",
            Direction::UpLeft => "UL",
            Direction::Up => "U",
            Direction::UpRight => "UR",
        }
    }

    /// Unit step along each axis
    pub fn unit(self) -> (i8, i8) {
        match self {
            Direction::Right => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::Down => (0, 1),
            Direction::DownLeft => (-1, 1),
            Direction::Left => (-1, 0),
            Direction::UpLeft => (-1, -1),
            Direction::Up => (0, -1),
            Direction::UpRight => (1, -1),
        }
    }

    /// Inverse of [`Direction::unit`]; `None` for (0, 0) or out-of-range steps
    pub fn from_unit(dx: i8, dy: i8) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.unit() == (dx, dy))
    }

    pub fn is_cardinal(self) -> bool {
        let (dx, dy) = self.unit();
        dx == 0 || dy == 0
    }

    /// Quantize a non-zero displacement to the nearest direction.
    ///
    /// Exact sector boundaries (22.5° off a direction) round to the higher
    /// index. The zero vector is the caller's responsibility to filter out.
    pub fn from_vector(dx: f64, dy: f64) -> Self {
        Self::from_angle(dy.atan2(dx).to_degrees())
    }

    /// Nearest direction for a heading in degrees (any range)
    pub fn from_angle(degrees: f64) -> Self {
        let angle = degrees.rem_euclid(360.0);
        let index = (angle / SECTOR_DEGREES).round() as usize;
        Self::from_index(index)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|d| d.code() == token)
            .ok_or_else(|| ParseDirectionError(s.to_string()))
    }
}

/// Smallest angle between two headings, in [0, 180]
pub fn angular_difference(a: Direction, b: Direction) -> f64 {
    let diff = (a.angle() - b.angle()).abs();
    diff.min(360.0 - diff)
}

/// Whether an observed direction is accepted for an expected one
pub fn directions_compatible(observed: Direction, expected: Direction, inaccuracy_degrees: f64) -> bool {
    observed == expected || angular_difference(observed, expected) <= inaccuracy_degrees
}

/// Render a path as space separated direction codes
pub fn format_path(path: &[Direction]) -> String {
    path.iter().map(|d| d.code()).collect::<Vec<_>>().join(" ")
}
