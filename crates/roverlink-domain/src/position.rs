//! Grid position

use serde::{Deserialize, Serialize};

use crate::Direction;

/// A cell on the plateau grid.
///
/// Coordinates are plain integers; the type itself does not restrict sign.
/// Whether a position is acceptable for a mission is the validator's call,
/// not the type's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one unit ahead in the given heading.
    ///
    /// North increases `y`, East increases `x`, South decreases `y`,
    /// West decreases `x`. The result is a candidate only; bounds are
    /// checked by the caller against the plateau.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::North => Self::new(self.x, self.y + 1),
            Direction::East => Self::new(self.x + 1, self.y),
            Direction::South => Self::new(self.x, self.y - 1),
            Direction::West => Self::new(self.x - 1, self.y),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}
