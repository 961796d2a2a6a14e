//! Mission error taxonomy
//!
//! A closed set of failure kinds used uniformly by the validator, the
//! engine, and the orchestrator. Every failure path in the workspace maps
//! onto exactly one of these kinds; nothing generic crosses the
//! orchestrator boundary.

use thiserror::Error;

/// Domain failure kinds, each carrying the offending values for
/// diagnostic formatting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MissionError {
    /// Raw text could not be parsed into mission instructions.
    #[error("Invalid input format: {detail}")]
    InvalidInputFormat { detail: String },

    /// Negative or out-of-range plateau bounds.
    #[error("Invalid plateau dimensions: ({x}, {y})")]
    InvalidPlateauDimensions { x: i32, y: i32 },

    /// Direction token was not exactly one of N/E/S/W.
    #[error("Invalid direction character: '{raw}'")]
    InvalidDirectionChar { raw: String },

    /// Starting position outside the plateau or above the coordinate
    /// ceiling.
    #[error("Invalid initial position ({x}, {y}) for plateau ({max_x}, {max_y})")]
    InvalidInitialPosition {
        x: i32,
        y: i32,
        max_x: i32,
        max_y: i32,
    },

    /// A non-validation failure surfaced during execution.
    #[error("Mission execution failed: {detail}")]
    ExecutionFailure { detail: String },
}

/// Broad classification used to pick wire error codes and status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The request text could not be understood at all.
    Format,
    /// The request was understood but its values are unacceptable.
    Validation,
    /// The mission failed after validation passed.
    Execution,
}

impl MissionError {
    /// Classify this error for transport mapping.
    #[must_use]
    pub fn classify(&self) -> ErrorClass {
        match self {
            Self::InvalidInputFormat { .. } => ErrorClass::Format,
            Self::InvalidPlateauDimensions { .. }
            | Self::InvalidDirectionChar { .. }
            | Self::InvalidInitialPosition { .. } => ErrorClass::Validation,
            Self::ExecutionFailure { .. } => ErrorClass::Execution,
        }
    }

    /// Stable wire code for the response envelope's `error.code` field.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self.classify() {
            ErrorClass::Format => "INVALID_REQUEST",
            ErrorClass::Validation => "VALIDATION_ERROR",
            ErrorClass::Execution => "EXECUTION_ERROR",
        }
    }
}

impl From<std::io::Error> for MissionError {
    fn from(err: std::io::Error) -> Self {
        MissionError::ExecutionFailure {
            detail: format!("I/O failure: {err}"),
        }
    }
}

impl From<serde_json::Error> for MissionError {
    fn from(err: serde_json::Error) -> Self {
        MissionError::InvalidInputFormat {
            detail: err.to_string(),
        }
    }
}
