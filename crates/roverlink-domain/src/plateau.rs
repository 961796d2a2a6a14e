//! Plateau bounds

use serde::{Deserialize, Serialize};

use crate::{MissionError, Position};

/// The inclusive rectangle a mission runs on, with (0,0) as one corner and
/// (`max_x`, `max_y`) as the opposite corner.
///
/// Construction enforces non-negative bounds; a `Plateau` value therefore
/// always describes at least the single cell (0,0). The configurable upper
/// coordinate ceiling is the validator's concern, not this type's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plateau {
    max_x: i32,
    max_y: i32,
}

impl Plateau {
    /// Create a plateau from its top-right corner.
    ///
    /// # Errors
    ///
    /// Returns `MissionError::InvalidPlateauDimensions` if either bound is
    /// negative; no partial plateau is ever constructed.
    pub fn new(max_x: i32, max_y: i32) -> Result<Self, MissionError> {
        if max_x < 0 || max_y < 0 {
            return Err(MissionError::InvalidPlateauDimensions { x: max_x, y: max_y });
        }
        Ok(Self { max_x, max_y })
    }

    #[must_use]
    pub fn max_x(&self) -> i32 {
        self.max_x
    }

    #[must_use]
    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    /// Single source of truth for boundary membership.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        (0..=self.max_x).contains(&position.x) && (0..=self.max_y).contains(&position.y)
    }
}
