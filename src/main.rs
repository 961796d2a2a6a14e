//! roverlink CLI binary
//!
//! This is the minimal entrypoint for the roverlink CLI.
//! All logic is in the library; main.rs only invokes cli::run().

use std::process::ExitCode;

fn main() -> ExitCode {
    // cli::run() handles ALL output including errors; main only forwards
    // the exit code.
    roverlink::cli::run()
}
