//! Tracing/logging initialization.
//!
//! Log events go to stderr so they never interleave with the console
//! transcript on stdout. The filter comes from `RUST_LOG` and defaults to
//! `warn`, which surfaces refused transfers and nothing chattier.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
