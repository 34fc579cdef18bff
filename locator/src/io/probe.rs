//! Filesystem-backed existence probe.

use std::fs;
use std::path::Path;

use tracing::trace;

use crate::core::discovery::Probe;

/// Probe backed by the real filesystem.
///
/// Any error from the metadata lookup (missing file, permission denied,
/// unreadable parent) counts as "does not exist"; discovery is best-effort
/// and never propagates filesystem failures.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl Probe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        let present = fs::metadata(path).is_ok();
        trace!(path = %path.display(), present, "probed candidate");
        present
    }
}
