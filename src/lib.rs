//! roverlink - Simulated remote rover-control missions
//!
//! Given a rectangular plateau, a rover's starting position and heading,
//! and a command string, roverlink computes the rover's final position
//! while behaving end to end as if the computation happened across a
//! network call: latency injection, a JSON request/response envelope, and
//! HTTP-like status codes, with all execution local.
//!
//! roverlink can be used in two ways:
//! - **CLI**: `cargo install roverlink`, then pipe a mission request into
//!   `roverlink execute`
//! - **Library**: depend on the workspace crates and drive
//!   [`MissionSimulator`] (or the lower layers) directly
//!
//! # Quick Start (library)
//!
//! ```no_run
//! use roverlink::{MissionSimulator, Outcome};
//!
//! # async fn example() {
//! let simulator = MissionSimulator::default();
//! let body = r#"{
//!     "topRightCorner": {"x": 5, "y": 5},
//!     "roverPosition": {"x": 1, "y": 2},
//!     "roverDirection": "N",
//!     "movements": "LMLMLMLMM"
//! }"#;
//! match simulator.post_mission(body).await {
//!     Outcome::Success(response) => println!("{}", response.body),
//!     Outcome::Error { message, .. } => eprintln!("{message}"),
//!     Outcome::Pending => unreachable!("post_mission resolves terminally"),
//! }
//! # }
//! ```
//!
//! # Layering
//!
//! Leaf to root: [`roverlink_domain`] (value types and the error
//! taxonomy), [`roverlink_validation`] (typed input checks),
//! [`roverlink_engine`] (the movement state machine and orchestrator),
//! [`roverlink_outcome`] (the pending/success/error vocabulary), and
//! [`roverlink_protocol`] (the wire contract and the simulated endpoint).

pub mod cli;
pub mod logging;

// Stable re-exports for library consumers.
pub use roverlink_domain::{
    Coordinates, Direction, ErrorClass, MissionError, MissionInstructions, MissionResult,
    Plateau, Position, Rover, parse_final_position,
};
pub use roverlink_engine::{Orchestrator, run_commands};
pub use roverlink_outcome::{Outcome, guard};
pub use roverlink_protocol::{
    CodecConfig, ErrorCode, EXECUTE_MISSION_METHOD, EXECUTE_MISSION_PATH, Intercept,
    MissionCodec, MissionResponse, MissionSimulator, ResponseError, SimulatedRequest,
    SimulatedResponse, SimulatorConfig, TransportInterceptor, status,
};
pub use roverlink_validation::{ValidationLimits, Validator};
