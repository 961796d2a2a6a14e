//! Rover state

use crate::{Direction, Position};

/// The (position, heading) pair driven by the movement engine.
///
/// The only mutable value in the domain. A `Rover` is owned exclusively by
/// one engine run for the lifetime of one mission; it is never shared
/// across concurrent missions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rover {
    position: Position,
    direction: Direction,
}

impl Rover {
    /// Create a rover at the given position and heading.
    ///
    /// The caller is expected to have validated the position against the
    /// plateau already; the rover itself carries no bounds knowledge.
    #[must_use]
    pub fn new(position: Position, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn turn_left(&mut self) {
        self.direction = self.direction.turn_left();
    }

    pub fn turn_right(&mut self) {
        self.direction = self.direction.turn_right();
    }

    /// Commit a new position. The engine calls this only after the plateau
    /// has accepted the candidate cell.
    pub fn move_to(&mut self, position: Position) {
        self.position = position;
    }
}

impl std::fmt::Display for Rover {
    /// The canonical `"x y D"` result format.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.position, self.direction)
    }
}
