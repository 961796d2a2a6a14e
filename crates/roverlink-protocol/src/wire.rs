//! Wire contract
//!
//! Field names and presence are the contract: existing clients parse these
//! shapes byte for byte, so renames here are breaking changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use roverlink_domain::{ErrorClass, MissionError, MissionInstructions};

/// HTTP-like status codes used by the simulated endpoint.
pub mod status {
    /// Structurally valid exchange, including domain-level mission failure.
    pub const OK: u16 = 200;
    /// Malformed or missing request body.
    pub const BAD_REQUEST: u16 = 400;
    /// Unexpected or resource-exhaustion failure inside the simulator.
    pub const INTERNAL_ERROR: u16 = 500;
}

/// Stable error codes carried in the envelope's `error.code` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request body was not syntactically valid JSON.
    InvalidJson,
    /// Request body was JSON but not the expected instruction shape.
    InvalidRequest,
    /// Instruction values failed domain validation.
    ValidationError,
    /// The mission failed after validation passed.
    ExecutionError,
    /// The request exceeded a simulator resource limit.
    ResourceError,
    /// An unclassified failure inside the simulator itself.
    SimulationError,
}

impl ErrorCode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidJson => "INVALID_JSON",
            ErrorCode::InvalidRequest => "INVALID_REQUEST",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::ExecutionError => "EXECUTION_ERROR",
            ErrorCode::ResourceError => "RESOURCE_ERROR",
            ErrorCode::SimulationError => "SIMULATION_ERROR",
        }
    }

    /// The code a domain error surfaces under.
    #[must_use]
    pub fn for_mission_error(err: &MissionError) -> Self {
        match err.classify() {
            ErrorClass::Format => ErrorCode::InvalidRequest,
            ErrorClass::Validation => ErrorCode::ValidationError,
            ErrorClass::Execution => ErrorCode::ExecutionError,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `error` object of a failed exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub details: Option<String>,
}

/// The response envelope for an execute-mission exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionResponse {
    pub success: bool,
    /// Final rover state as `"x y D"`; empty on failure.
    pub final_position: String,
    pub message: String,
    /// The decoded instructions echoed back; present only on success.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub original_input: Option<MissionInstructions>,
    /// RFC 3339 UTC time the response was produced.
    pub timestamp: DateTime<Utc>,
    pub execution_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<ResponseError>,
}

impl MissionResponse {
    /// Envelope for a mission that ran to completion.
    #[must_use]
    pub fn success(
        final_position: impl Into<String>,
        original_input: MissionInstructions,
        execution_time_ms: u64,
    ) -> Self {
        let final_position = final_position.into();
        Self {
            success: true,
            message: format!("Mission completed, rover at {final_position}"),
            final_position,
            original_input: Some(original_input),
            timestamp: Utc::now(),
            execution_time_ms,
            error: None,
        }
    }

    /// Envelope for a failed exchange, domain-level or transport-level.
    #[must_use]
    pub fn failure(
        code: ErrorCode,
        message: impl Into<String>,
        details: Option<String>,
        execution_time_ms: u64,
    ) -> Self {
        let message = message.into();
        Self {
            success: false,
            final_position: String::new(),
            message: message.clone(),
            original_input: None,
            timestamp: Utc::now(),
            execution_time_ms,
            error: Some(ResponseError {
                code,
                message,
                details,
            }),
        }
    }
}

/// An outbound request as seen by the transport interceptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

impl SimulatedRequest {
    #[must_use]
    pub fn new(
        method: impl Into<String>,
        path: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            body: body.into(),
        }
    }
}

/// The answer produced for an intercepted request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedResponse {
    pub status: u16,
    pub body: String,
}
