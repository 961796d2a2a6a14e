//! Domain model for roverlink missions
//!
//! Immutable value types (position, heading, plateau bounds), the mutable
//! [`Rover`] owned by a single mission execution, the mission input/result
//! shapes, and the closed [`MissionError`] taxonomy every layer reports
//! failures through.

mod direction;
mod error;
mod mission;
mod plateau;
mod position;
mod rover;

pub use direction::Direction;
pub use error::{ErrorClass, MissionError};
pub use mission::{Coordinates, MissionInstructions, MissionResult, parse_final_position};
pub use plateau::Plateau;
pub use position::Position;
pub use rover::Rover;
