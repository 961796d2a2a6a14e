//! Compass heading

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::MissionError;

/// One of the four compass headings a rover can face.
///
/// The set is closed: parsing rejects anything that is not exactly one of
/// N/E/S/W (case-insensitive), so a `Direction` value is always valid by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All headings in clockwise order starting at North.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Rotate 90 degrees counter-clockwise (N -> W -> S -> E -> N).
    #[must_use]
    pub fn turn_left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// Rotate 90 degrees clockwise (N -> E -> S -> W -> N).
    #[must_use]
    pub fn turn_right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// Canonical single-character representation used on the wire and in
    /// the `"x y D"` result format.
    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }

    /// Parse a heading from its character form, case-insensitively.
    #[must_use]
    pub fn from_char(raw: char) -> Option<Self> {
        match raw.to_ascii_uppercase() {
            'N' => Some(Direction::North),
            'E' => Some(Direction::East),
            'S' => Some(Direction::South),
            'W' => Some(Direction::West),
            _ => None,
        }
    }
}

impl FromStr for Direction {
    type Err = MissionError;

    /// Accepts exactly one character; `"NE"`, `""`, or `"X"` are rejected
    /// before any `Direction` exists.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Direction::from_char(c).ok_or_else(|| {
                MissionError::InvalidDirectionChar { raw: s.to_string() }
            }),
            _ => Err(MissionError::InvalidDirectionChar { raw: s.to_string() }),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
