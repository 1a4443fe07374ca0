use std::error::Error;
use std::io;

use tracing_log::LogTracer;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber and route `log` records from the core crate into it.
///
/// Without `-v` the filter comes from `RUST_LOG`, defaulting to warnings.
/// Each `-v` raises the level: info, debug, trace. Output goes to stderr so
/// values printed on stdout stay machine-readable.
pub fn init(verbosity: u8) -> Result<(), Box<dyn Error + Send + Sync>> {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    LogTracer::init()?;
    Ok(())
}
