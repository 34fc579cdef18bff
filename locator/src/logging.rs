//! Development-time tracing for debugging discovery.
//!
//! Tracing is dev diagnostics only: `RUST_LOG`-controlled, written to
//! stderr, never part of the locator's product output. The library stays
//! silent by default so host applications keep control of their own
//! subscriber; only the CLI installs one.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber for the CLI.
///
/// Reads `RUST_LOG`, defaulting to `warn` when unset. Output goes to
/// stderr in compact format so stdout stays machine-readable.
///
/// # Example
/// ```bash
/// RUST_LOG=node_locator=debug node-locator locate
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
