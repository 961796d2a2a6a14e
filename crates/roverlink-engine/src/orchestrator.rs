//! Mission orchestrator
//!
//! Composes parsing, validation, the movement engine, and result
//! formatting into one operation. The first failure at any step
//! short-circuits and is returned verbatim; there is no partial result.

use tracing::{debug, info_span};

use roverlink_domain::{
    MissionError, MissionInstructions, MissionResult, Position, Rover,
};
use roverlink_validation::{ValidationLimits, Validator};

use crate::movement::run_commands;

/// Runs missions end to end.
///
/// Pure with respect to its inputs except for the transient mutation of a
/// locally-owned [`Rover`]; identical inputs always produce identical
/// output. Safe to call from any thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct Orchestrator {
    validator: Validator,
}

impl Orchestrator {
    /// Create an orchestrator enforcing the given validation limits.
    #[must_use]
    pub fn new(limits: ValidationLimits) -> Self {
        Self {
            validator: Validator::new(limits),
        }
    }

    /// Execute a mission from structured instructions.
    ///
    /// Pipeline: validate plateau -> validate direction -> validate
    /// starting position -> run the movement engine -> format the final
    /// state as `"x y D"`.
    ///
    /// # Errors
    ///
    /// Returns the first `MissionError` produced by any step, unwrapped.
    pub fn execute(&self, instructions: &MissionInstructions) -> Result<String, MissionError> {
        let span = info_span!(
            "mission_execution",
            max_x = instructions.top_right_corner.x,
            max_y = instructions.top_right_corner.y,
            commands = instructions.movements.len(),
        );
        let _guard = span.enter();

        let plateau = self.validator.validate_plateau(
            instructions.top_right_corner.x,
            instructions.top_right_corner.y,
        )?;
        let direction = self
            .validator
            .validate_direction(&instructions.rover_direction)?;
        let start = Position::new(instructions.rover_position.x, instructions.rover_position.y);
        self.validator.validate_position(start, &plateau)?;

        let mut rover = Rover::new(start, direction);
        run_commands(&mut rover, &plateau, &instructions.movements);

        let final_position = rover.to_string();
        debug!(%final_position, "mission complete");
        Ok(final_position)
    }

    /// Execute a mission from raw JSON text.
    ///
    /// # Errors
    ///
    /// Returns `MissionError::InvalidInputFormat` if the text does not
    /// parse into [`MissionInstructions`], otherwise as [`Self::execute`].
    pub fn execute_text(&self, raw: &str) -> Result<String, MissionError> {
        let instructions: MissionInstructions = serde_json::from_str(raw)?;
        self.execute(&instructions)
    }

    /// Execute a mission and fold the outcome into a [`MissionResult`].
    #[must_use]
    pub fn run_mission(&self, instructions: &MissionInstructions) -> MissionResult {
        match self.execute(instructions) {
            Ok(final_position) => MissionResult::completed(final_position),
            Err(err) => MissionResult::failed(&err),
        }
    }
}
