//! Mission execution for roverlink
//!
//! The movement state machine that replays a command string against a
//! rover, and the orchestrator that wires parsing, validation, execution,
//! and result formatting into one short-circuiting operation.

mod movement;
mod orchestrator;

pub use movement::run_commands;
pub use orchestrator::Orchestrator;
