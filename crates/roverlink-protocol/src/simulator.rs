//! Simulated mission endpoint
//!
//! Intercepts the well-known execute-mission request before it reaches any
//! real transport and answers it locally as if a backend had processed it:
//! artificial latency, body decoding, orchestrator invocation, and an
//! HTTP-like envelope. A mission failure is a successful transport
//! exchange carrying a failure payload; callers distinguish via the
//! `success` field, not the status code.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::{debug, info, warn};

use roverlink_domain::MissionError;
use roverlink_engine::Orchestrator;
use roverlink_outcome::Outcome;
use roverlink_validation::ValidationLimits;

use crate::codec::{CodecConfig, MissionCodec};
use crate::wire::{
    ErrorCode, MissionResponse, SimulatedRequest, SimulatedResponse, status,
};

/// Path of the simulated execute-mission endpoint.
pub const EXECUTE_MISSION_PATH: &str = "/api/v1/mars-rover/execute";

/// Only POST requests to the endpoint are intercepted.
pub const EXECUTE_MISSION_METHOD: &str = "POST";

/// What the simulator decided to do with an outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intercept {
    /// The request matched the simulated endpoint and was answered locally.
    Handled(SimulatedResponse),
    /// Not ours; hand the request back to the real transport untouched.
    PassThrough(SimulatedRequest),
}

/// Seam for a host transport to offer requests to the simulator before
/// sending them anywhere.
#[async_trait]
pub trait TransportInterceptor: Send + Sync {
    /// Offer a request for interception.
    async fn intercept(&self, request: SimulatedRequest) -> Intercept;
}

/// Simulator settings, passed in explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Fixed artificial delay standing in for network latency.
    pub latency: Duration,
    /// Validation limits forwarded to the orchestrator.
    pub limits: ValidationLimits,
    /// Codec settings for request/response bodies.
    pub codec: CodecConfig,
    /// Upper bound on accepted request body size.
    pub max_body_bytes: usize,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(500),
            limits: ValidationLimits::default(),
            codec: CodecConfig::default(),
            max_body_bytes: 64 * 1024,
        }
    }
}

/// The local backend that answers execute-mission requests.
#[derive(Debug, Clone, Copy)]
pub struct MissionSimulator {
    orchestrator: Orchestrator,
    codec: MissionCodec,
    latency: Duration,
    max_body_bytes: usize,
}

impl Default for MissionSimulator {
    fn default() -> Self {
        Self::new(SimulatorConfig::default())
    }
}

impl MissionSimulator {
    /// Create a simulator from its configuration.
    #[must_use]
    pub fn new(config: SimulatorConfig) -> Self {
        Self {
            orchestrator: Orchestrator::new(config.limits),
            codec: MissionCodec::new(config.codec),
            latency: config.latency,
            max_body_bytes: config.max_body_bytes,
        }
    }

    /// Whether a request targets the simulated endpoint.
    #[must_use]
    pub fn matches(&self, request: &SimulatedRequest) -> bool {
        request.method.eq_ignore_ascii_case(EXECUTE_MISSION_METHOD)
            && request.path == EXECUTE_MISSION_PATH
    }

    /// Handle one outbound request.
    ///
    /// Non-matching requests pass through untouched. Matching requests are
    /// answered after the configured latency; the sleep is cooperative, so
    /// dropping the returned future abandons the exchange without leaking
    /// a timer. This function never panics across its boundary: anything
    /// unclassified becomes a `SIMULATION_ERROR`/500 envelope.
    pub async fn handle(&self, request: SimulatedRequest) -> Intercept {
        if !self.matches(&request) {
            debug!(method = %request.method, path = %request.path, "passing request through");
            return Intercept::PassThrough(request);
        }

        let started = Instant::now();
        tokio::time::sleep(self.latency).await;

        let response = self.answer(&request.body, started);
        Intercept::Handled(response)
    }

    /// Issue the well-known execute-mission request and report the
    /// exchange as a terminal [`Outcome`].
    pub async fn post_mission(&self, body: impl Into<String>) -> Outcome<SimulatedResponse> {
        let request =
            SimulatedRequest::new(EXECUTE_MISSION_METHOD, EXECUTE_MISSION_PATH, body.into());
        match self.handle(request).await {
            Intercept::Handled(response) => Outcome::Success(response),
            // Unreachable for the well-known request; keep the failure
            // typed rather than panicking.
            Intercept::PassThrough(_) => Outcome::error(MissionError::ExecutionFailure {
                detail: "simulator refused its own endpoint".to_string(),
            }),
        }
    }

    /// Produce the envelope and status for a matched request body.
    fn answer(&self, body: &str, started: Instant) -> SimulatedResponse {
        if body.len() > self.max_body_bytes {
            warn!(
                size = body.len(),
                limit = self.max_body_bytes,
                "request body over resource limit"
            );
            let envelope = MissionResponse::failure(
                ErrorCode::ResourceError,
                "request body too large",
                Some(format!(
                    "{} bytes exceeds the {} byte limit",
                    body.len(),
                    self.max_body_bytes
                )),
                elapsed_ms(started),
            );
            return self.respond(status::INTERNAL_ERROR, &envelope);
        }

        let instructions = match self.codec.decode_request(body) {
            Ok(instructions) => instructions,
            Err(failure) => {
                debug!(code = %failure.code, "request body rejected");
                let envelope = MissionResponse::failure(
                    failure.code,
                    "request body could not be decoded",
                    Some(failure.detail),
                    elapsed_ms(started),
                );
                return self.respond(status::BAD_REQUEST, &envelope);
            }
        };

        // The orchestrator is pure computation, but the simulator must
        // never crash its host; contain anything unclassified at this
        // boundary.
        let outcome = catch_unwind(AssertUnwindSafe(|| self.orchestrator.execute(&instructions)));

        match outcome {
            Ok(Ok(final_position)) => {
                info!(%final_position, "mission succeeded");
                let envelope =
                    MissionResponse::success(final_position, instructions, elapsed_ms(started));
                self.respond(status::OK, &envelope)
            }
            Ok(Err(err)) => {
                info!(code = %ErrorCode::for_mission_error(&err), "mission failed");
                let envelope = MissionResponse::failure(
                    ErrorCode::for_mission_error(&err),
                    err.to_string(),
                    None,
                    elapsed_ms(started),
                );
                // A failed mission is still a successful exchange.
                self.respond(status::OK, &envelope)
            }
            Err(panic) => {
                warn!("mission execution panicked; containing at simulator boundary");
                let envelope = MissionResponse::failure(
                    ErrorCode::SimulationError,
                    "internal simulator failure",
                    Some(panic_detail(&panic)),
                    elapsed_ms(started),
                );
                self.respond(status::INTERNAL_ERROR, &envelope)
            }
        }
    }

    fn respond(&self, status_code: u16, envelope: &MissionResponse) -> SimulatedResponse {
        match self.codec.encode_response(envelope) {
            Ok(body) => SimulatedResponse {
                status: status_code,
                body,
            },
            Err(err) => {
                // Encoding the envelope should never fail; if it does, fall
                // back to a hand-built SIMULATION_ERROR body.
                warn!(%err, "envelope encoding failed");
                SimulatedResponse {
                    status: status::INTERNAL_ERROR,
                    body: format!(
                        r#"{{"success":false,"finalPosition":"","message":"{0}","timestamp":"","executionTimeMs":0,"error":{{"code":"SIMULATION_ERROR","message":"{0}"}}}}"#,
                        "response encoding failed"
                    ),
                }
            }
        }
    }
}

#[async_trait]
impl TransportInterceptor for MissionSimulator {
    async fn intercept(&self, request: SimulatedRequest) -> Intercept {
        self.handle(request).await
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

fn panic_detail(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(text) = panic.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = panic.downcast_ref::<String>() {
        text.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
