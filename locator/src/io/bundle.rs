//! Detection of the packaging tool's bundle extraction directory.
//!
//! A self-extracting bundle launcher unpacks its payload into a temporary
//! directory and exports that directory in `LOCATOR_BUNDLE_DIR` before
//! handing control to the application. Absence of the variable means the
//! process is not running from a bundle. Discovery itself takes the
//! directory as an injected input ([`crate::core::discovery::Discovery`]);
//! this module is the one place that reads the ambient signal.

use std::path::PathBuf;

use tracing::debug;

/// Environment variable the bundle launcher exports.
pub const BUNDLE_DIR_VAR: &str = "LOCATOR_BUNDLE_DIR";

/// Read the bundle extraction directory from the process environment.
///
/// Returns `None` when the variable is unset or empty. The directory is
/// not checked for existence here; discovery probes the joined binary path
/// anyway.
pub fn detect_bundle_root() -> Option<PathBuf> {
    let raw = std::env::var_os(BUNDLE_DIR_VAR)?;
    if raw.is_empty() {
        debug!("bundle dir variable set but empty, ignoring");
        return None;
    }
    let root = PathBuf::from(raw);
    debug!(root = %root.display(), "detected bundle extraction directory");
    Some(root)
}
