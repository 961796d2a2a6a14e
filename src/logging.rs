//! Logging setup for the roverlink CLI
//!
//! Structured logging via `tracing`, with a compact human format by
//! default and a more detailed one under `--verbose`.

use std::io::IsTerminal;

use tracing_subscriber::{
    EnvFilter,
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Check if colored output should be used.
///
/// True only when stderr is a terminal and `NO_COLOR` is unset.
fn use_color() -> bool {
    std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` selects a debug
/// filter for the roverlink crates and plain `info` stays quiet about
/// per-command engine chatter.
///
/// # Errors
///
/// Returns an error if a subscriber was already installed.
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| {
            if verbose {
                EnvFilter::try_new("roverlink=debug,info")
            } else {
                EnvFilter::try_new("roverlink=info,warn")
            }
        })
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(use_color())
        .with_target(verbose)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layer)
        .try_init()?;

    Ok(())
}
