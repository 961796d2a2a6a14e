//! Protocol simulation for roverlink
//!
//! The boundary that turns a local mission computation into a believable
//! network exchange: the request/response wire contract, the JSON codec
//! with explicit configuration, and the simulator that intercepts the
//! well-known execute-mission request, injects latency, runs the
//! orchestrator, and answers with an HTTP-like envelope.

mod codec;
mod simulator;
mod wire;

pub use codec::{CodecConfig, DecodeFailure, MissionCodec};
pub use simulator::{
    EXECUTE_MISSION_METHOD, EXECUTE_MISSION_PATH, Intercept, MissionSimulator, SimulatorConfig,
    TransportInterceptor,
};
pub use wire::{
    ErrorCode, MissionResponse, ResponseError, SimulatedRequest, SimulatedResponse, status,
};
