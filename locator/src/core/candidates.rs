//! Fixed probe locations and the backend selector vocabulary.

use std::path::PathBuf;

/// Conventional Node.js install locations, probed in this order.
///
/// First match wins; no scoring, no version check, no executability check.
pub const DEFAULT_CANDIDATES: [&str; 3] = [
    "/usr/local/bin/node",
    "/opt/homebrew/bin/node",
    "/usr/bin/node",
];

/// Relative name of the binary shipped inside a self-extracting bundle,
/// joined onto the extraction directory for the fallback probe.
pub const BUNDLED_NODE_NAME: &str = "node";

/// Execution-bridge backend selected when a runtime is found.
///
/// The bridge keys off a selector token, not the discovered path; it
/// re-resolves the binary on its own once the backend is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Node,
}

impl Backend {
    /// The literal token the execution bridge expects in `EXECJS_RUNTIME`.
    pub fn selector(self) -> &'static str {
        match self {
            Backend::Node => "Node",
        }
    }
}

/// The default candidate list as owned paths.
pub fn default_candidates() -> Vec<PathBuf> {
    DEFAULT_CANDIDATES.iter().copied().map(PathBuf::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_token_is_node() {
        assert_eq!(Backend::Node.selector(), "Node");
    }

    #[test]
    fn default_candidates_preserve_probe_order() {
        let candidates = default_candidates();
        assert_eq!(candidates[0], PathBuf::from("/usr/local/bin/node"));
        assert_eq!(candidates[1], PathBuf::from("/opt/homebrew/bin/node"));
        assert_eq!(candidates[2], PathBuf::from("/usr/bin/node"));
    }
}
