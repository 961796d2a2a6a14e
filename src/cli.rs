//! Command-line interface for roverlink
//!
//! Argument parsing and command dispatch. All output, including error
//! reporting, happens here; `main` only forwards the exit code.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::logging::init_tracing;
use roverlink_protocol::{
    CodecConfig, EXECUTE_MISSION_METHOD, EXECUTE_MISSION_PATH, Intercept, MissionSimulator,
    SimulatedRequest, SimulatorConfig, status,
};
use roverlink_validation::ValidationLimits;

/// roverlink - simulated remote rover-control missions
#[derive(Parser)]
#[command(name = "roverlink")]
#[command(about = "Execute rover missions against a simulated remote backend")]
#[command(long_about = r#"
roverlink computes a rover's final position on a bounded plateau from a
command string, answering through a simulated network exchange: latency,
a JSON response envelope, and HTTP-like status codes.

EXAMPLES:
  # Execute a mission from stdin
  echo '{"topRightCorner":{"x":5,"y":5},"roverPosition":{"x":1,"y":2},"roverDirection":"N","movements":"LMLMLMLMM"}' | roverlink execute

  # Execute a mission from a file, pretty-printed, without latency
  roverlink execute --file mission.json --latency-ms 0 --pretty

  # Run the canonical demo mission
  roverlink demo
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a mission request (JSON body from stdin or a file)
    Execute {
        /// Read the request body from a file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,

        /// Artificial latency of the simulated exchange, in milliseconds
        #[arg(long, default_value_t = 500)]
        latency_ms: u64,

        /// Upper bound on any coordinate, inclusive
        #[arg(long, default_value_t = 100)]
        max_coordinate: i32,

        /// Pretty-print the response envelope
        #[arg(long)]
        pretty: bool,
    },

    /// Run the canonical demo mission: plateau (5,5), start (1,2) N, "LMLMLMLMM"
    Demo {
        /// Artificial latency of the simulated exchange, in milliseconds
        #[arg(long, default_value_t = 500)]
        latency_ms: u64,
    },
}

/// Parse arguments, run the selected command, and map the result to an
/// exit code: 0 for a 200 exchange, 1 for a non-200 exchange, 2 for CLI
/// or I/O failure.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_tracing(cli.verbose) {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::from(2);
    }

    let result = match cli.command {
        Commands::Execute {
            file,
            latency_ms,
            max_coordinate,
            pretty,
        } => execute_command(file, latency_ms, max_coordinate, pretty),
        Commands::Demo { latency_ms } => {
            let body = r#"{"topRightCorner":{"x":5,"y":5},"roverPosition":{"x":1,"y":2},"roverDirection":"N","movements":"LMLMLMLMM"}"#;
            run_exchange(body.to_string(), latency_ms, 100, true)
        }
    };

    match result {
        Ok(status_code) if status_code == status::OK => ExitCode::SUCCESS,
        Ok(status_code) => {
            debug!(status = status_code, "transport-level failure");
            ExitCode::from(1)
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn execute_command(
    file: Option<PathBuf>,
    latency_ms: u64,
    max_coordinate: i32,
    pretty: bool,
) -> Result<u16> {
    let body = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read request body from {}", path.display()))?,
        None => std::io::read_to_string(std::io::stdin())
            .context("failed to read request body from stdin")?,
    };
    run_exchange(body, latency_ms, max_coordinate, pretty)
}

/// Drive one simulated exchange and print the response body. Returns the
/// HTTP-like status of the exchange.
fn run_exchange(body: String, latency_ms: u64, max_coordinate: i32, pretty: bool) -> Result<u16> {
    let simulator = MissionSimulator::new(SimulatorConfig {
        latency: Duration::from_millis(latency_ms),
        limits: ValidationLimits::with_max_coordinate(max_coordinate),
        codec: CodecConfig { pretty },
        ..SimulatorConfig::default()
    });
    let request = SimulatedRequest::new(EXECUTE_MISSION_METHOD, EXECUTE_MISSION_PATH, body);

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let intercept = runtime.block_on(simulator.handle(request));

    match intercept {
        Intercept::Handled(response) => {
            println!("{}", response.body);
            Ok(response.status)
        }
        // The CLI only ever issues the well-known request.
        Intercept::PassThrough(request) => {
            anyhow::bail!(
                "no simulated backend for {} {}",
                request.method,
                request.path
            )
        }
    }
}
