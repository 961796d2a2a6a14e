//! Input validation for roverlink missions
//!
//! Turns raw instruction fields into validated domain values or a typed
//! [`MissionError`]. Validation for a full mission runs plateau dimensions,
//! then direction, then position, each failure short-circuiting the rest.
//!
//! The numeric ceiling on coordinates is an explicit [`ValidationLimits`]
//! value, enforced uniformly on plateau dimensions and positions. There is
//! no hidden constant.

use serde::{Deserialize, Serialize};

use roverlink_domain::{Direction, MissionError, Plateau, Position};

/// Configurable numeric bounds applied during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationLimits {
    /// Upper bound on any coordinate, inclusive. Guards plateau arithmetic
    /// against overflow on pathological inputs.
    pub max_coordinate: i32,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_coordinate: 100,
        }
    }
}

impl ValidationLimits {
    /// Create limits with an explicit coordinate ceiling.
    #[must_use]
    pub fn with_max_coordinate(max_coordinate: i32) -> Self {
        Self { max_coordinate }
    }
}

/// Stateless validator carrying the limits it enforces.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    limits: ValidationLimits,
}

impl Validator {
    /// Create a validator with the given limits.
    #[must_use]
    pub fn new(limits: ValidationLimits) -> Self {
        Self { limits }
    }

    #[must_use]
    pub fn limits(&self) -> ValidationLimits {
        self.limits
    }

    /// Validate plateau bounds and construct the plateau.
    ///
    /// # Errors
    ///
    /// Returns `MissionError::InvalidPlateauDimensions` if either value is
    /// negative or exceeds the configured ceiling.
    pub fn validate_plateau(&self, max_x: i32, max_y: i32) -> Result<Plateau, MissionError> {
        if max_x > self.limits.max_coordinate || max_y > self.limits.max_coordinate {
            return Err(MissionError::InvalidPlateauDimensions { x: max_x, y: max_y });
        }
        Plateau::new(max_x, max_y)
    }

    /// Validate a raw direction token.
    ///
    /// # Errors
    ///
    /// Returns `MissionError::InvalidDirectionChar` unless the token is
    /// exactly one character, case-insensitively one of N/E/S/W.
    pub fn validate_direction(&self, raw: &str) -> Result<Direction, MissionError> {
        raw.parse()
    }

    /// Validate a starting position against the plateau and the ceiling.
    ///
    /// # Errors
    ///
    /// Returns `MissionError::InvalidInitialPosition` carrying the exact
    /// offending coordinates if either coordinate exceeds the ceiling or
    /// the plateau does not contain the position.
    pub fn validate_position(
        &self,
        position: Position,
        plateau: &Plateau,
    ) -> Result<(), MissionError> {
        let above_ceiling = position.x > self.limits.max_coordinate
            || position.y > self.limits.max_coordinate;
        if above_ceiling || !plateau.contains(position) {
            return Err(MissionError::InvalidInitialPosition {
                x: position.x,
                y: position.y,
                max_x: plateau.max_x(),
                max_y: plateau.max_y(),
            });
        }
        Ok(())
    }
}
