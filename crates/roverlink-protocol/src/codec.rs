//! JSON codec for the mission wire contract
//!
//! Parsing and formatting take an explicit [`CodecConfig`] value at
//! construction. There is no shared, process-wide JSON configuration.

use serde::{Deserialize, Serialize};

use roverlink_domain::{MissionError, MissionInstructions};

use crate::wire::{ErrorCode, MissionResponse};

/// Explicit codec settings, passed in rather than ambient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Pretty-print encoded responses.
    pub pretty: bool,
}

/// A request body that could not be decoded, split by whether the text was
/// JSON at all (`INVALID_JSON`) or JSON of the wrong shape
/// (`INVALID_REQUEST`). The split decides the transport status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeFailure {
    pub code: ErrorCode,
    pub detail: String,
}

impl From<DecodeFailure> for MissionError {
    fn from(failure: DecodeFailure) -> Self {
        MissionError::InvalidInputFormat {
            detail: failure.detail,
        }
    }
}

/// Encoder/decoder for the execute-mission wire shapes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MissionCodec {
    config: CodecConfig,
}

impl MissionCodec {
    /// Create a codec with the given configuration.
    #[must_use]
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Decode a request body into mission instructions.
    ///
    /// Unknown extra fields are ignored; missing or mistyped fields are a
    /// shape failure.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeFailure`] with `INVALID_JSON` for syntax-level
    /// problems and `INVALID_REQUEST` for shape-level ones.
    pub fn decode_request(&self, body: &str) -> Result<MissionInstructions, DecodeFailure> {
        serde_json::from_str(body).map_err(|err| {
            let code = match err.classify() {
                serde_json::error::Category::Syntax | serde_json::error::Category::Eof => {
                    ErrorCode::InvalidJson
                }
                _ => ErrorCode::InvalidRequest,
            };
            DecodeFailure {
                code,
                detail: err.to_string(),
            }
        })
    }

    /// Encode a response envelope to its body text.
    ///
    /// # Errors
    ///
    /// Returns `MissionError::ExecutionFailure` if serialization fails.
    pub fn encode_response(&self, response: &MissionResponse) -> Result<String, MissionError> {
        let encoded = if self.config.pretty {
            serde_json::to_string_pretty(response)
        } else {
            serde_json::to_string(response)
        };
        encoded.map_err(|err| MissionError::ExecutionFailure {
            detail: format!("response encoding failed: {err}"),
        })
    }
}
