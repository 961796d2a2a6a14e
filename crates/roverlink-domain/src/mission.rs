//! Mission input and outcome shapes

use serde::{Deserialize, Serialize};

use crate::{Direction, MissionError, Position};

/// An (x, y) pair as it appears in request bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: i32,
    pub y: i32,
}

/// Structured mission input, deserialized from the wire request body.
///
/// The direction is kept as the raw token here; it is validated into a
/// [`Direction`] by the validator, not at parse time. Unknown extra fields
/// in the request body are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionInstructions {
    /// Plateau bounds as the top-right corner of the inclusive rectangle.
    pub top_right_corner: Coordinates,
    /// Starting cell of the rover.
    pub rover_position: Coordinates,
    /// Raw heading token, validated later (exactly one of N/E/S/W).
    pub rover_direction: String,
    /// Command string consumed left to right by the engine.
    pub movements: String,
}

impl MissionInstructions {
    /// Create instructions from already-structured parts.
    #[must_use]
    pub fn new(
        top_right_corner: (i32, i32),
        rover_position: (i32, i32),
        rover_direction: impl Into<String>,
        movements: impl Into<String>,
    ) -> Self {
        Self {
            top_right_corner: Coordinates {
                x: top_right_corner.0,
                y: top_right_corner.1,
            },
            rover_position: Coordinates {
                x: rover_position.0,
                y: rover_position.1,
            },
            rover_direction: rover_direction.into(),
            movements: movements.into(),
        }
    }
}

/// Immutable outcome of one mission. Produced once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionResult {
    pub success: bool,
    /// Final rover state as `"x y D"`, empty on failure.
    pub final_position: String,
    /// Human-readable summary of the outcome.
    pub message: String,
}

impl MissionResult {
    /// Outcome of a mission that ran to completion.
    #[must_use]
    pub fn completed(final_position: impl Into<String>) -> Self {
        let final_position = final_position.into();
        Self {
            success: true,
            message: format!("Mission completed, rover at {final_position}"),
            final_position,
        }
    }

    /// Outcome of a mission aborted by a domain failure.
    #[must_use]
    pub fn failed(error: &MissionError) -> Self {
        Self {
            success: false,
            final_position: String::new(),
            message: error.to_string(),
        }
    }
}

/// Re-parse an `"x y D"` final-position string back into its parts.
///
/// Formatting a rover and re-parsing the result is lossless.
///
/// # Errors
///
/// Returns `MissionError::InvalidInputFormat` when the string is not three
/// space-separated tokens with integer coordinates, or
/// `MissionError::InvalidDirectionChar` when the heading token is bad.
pub fn parse_final_position(text: &str) -> Result<(Position, Direction), MissionError> {
    let mut parts = text.split_whitespace();
    let (Some(x), Some(y), Some(d), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(MissionError::InvalidInputFormat {
            detail: format!("expected 'x y D', got '{text}'"),
        });
    };
    let x: i32 = x.parse().map_err(|_| MissionError::InvalidInputFormat {
        detail: format!("bad x coordinate '{x}'"),
    })?;
    let y: i32 = y.parse().map_err(|_| MissionError::InvalidInputFormat {
        detail: format!("bad y coordinate '{y}'"),
    })?;
    let direction: Direction = d.parse()?;
    Ok((Position::new(x, y), direction))
}
