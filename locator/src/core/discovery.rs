//! First-match runtime discovery over an injected probe.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::candidates::{BUNDLED_NODE_NAME, default_candidates};

/// Abstraction over filesystem existence checks.
///
/// Implementations must absorb check failures (permission denied, broken
/// symlink components) as `false` rather than surfacing them; discovery
/// treats "cannot tell" the same as "not there".
pub trait Probe {
    fn exists(&self, path: &Path) -> bool;
}

/// Where a located runtime came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// One of the fixed candidate paths.
    System,
    /// The packaging tool's bundle extraction directory.
    Bundle,
}

/// A runtime selected by [`Discovery::locate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Located {
    pub path: PathBuf,
    pub source: Source,
}

/// Discovery inputs, passed explicitly rather than read from ambient
/// process state.
///
/// `bundle_root` is the packaging tool's extraction directory when the
/// process runs from a self-extracting bundle, `None` otherwise. Callers
/// obtain it from [`crate::io::bundle::detect_bundle_root`] or inject it
/// directly in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovery {
    /// Ordered absolute paths to probe; first existing entry wins.
    pub candidates: Vec<PathBuf>,
    /// Extraction directory of the self-extracting bundle, if any.
    pub bundle_root: Option<PathBuf>,
    /// File name joined onto `bundle_root` for the fallback probe.
    pub bundled_name: String,
}

impl Default for Discovery {
    fn default() -> Self {
        Self {
            candidates: default_candidates(),
            bundle_root: None,
            bundled_name: BUNDLED_NODE_NAME.to_string(),
        }
    }
}

impl Discovery {
    /// Default candidates plus an optional bundle extraction directory.
    pub fn with_bundle_root(bundle_root: Option<PathBuf>) -> Self {
        Self {
            bundle_root,
            ..Self::default()
        }
    }

    /// Return the first candidate that exists, in list order, falling back
    /// to `bundle_root/<bundled_name>` when no fixed candidate is present.
    ///
    /// Pure: the only observation of the outside world goes through
    /// `probe`. Returns `None` when nothing exists anywhere; "no runtime"
    /// is an answer, not an error.
    pub fn locate(&self, probe: &impl Probe) -> Option<Located> {
        for candidate in &self.candidates {
            if probe.exists(candidate) {
                return Some(Located {
                    path: candidate.clone(),
                    source: Source::System,
                });
            }
        }

        let bundled = self.bundle_root.as_ref()?.join(&self.bundled_name);
        if probe.exists(&bundled) {
            return Some(Located {
                path: bundled,
                source: Source::Bundle,
            });
        }

        None
    }
}
