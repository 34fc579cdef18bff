//! Publication of the backend selector for the execution bridge.
//!
//! The downstream bridge reads `EXECJS_RUNTIME` to decide how it shells
//! out to execute JavaScript. When discovery finds a runtime we write the
//! selector token `Node`; when it finds nothing we leave the variable
//! untouched and let the bridge fall back to its own search. The bridge
//! never receives the discovered path through the environment; callers
//! that want it use the returned [`Located`] value instead.

use tracing::{debug, info};

use crate::core::candidates::Backend;
use crate::core::discovery::{Discovery, Located, Probe};
use crate::io::bundle::detect_bundle_root;
use crate::io::probe::FsProbe;

/// Environment variable the execution bridge reads.
pub const EXECJS_RUNTIME_VAR: &str = "EXECJS_RUNTIME";

/// Locate a runtime with ambient inputs and publish the selector.
///
/// Convenience wrapper over [`initialize_with`]: default candidate list,
/// bundle root detected from the process environment, real filesystem
/// probe. Call once during startup, before spawning threads.
pub fn initialize() -> Option<Located> {
    let discovery = Discovery::with_bundle_root(detect_bundle_root());
    initialize_with(&discovery, &FsProbe)
}

/// Locate a runtime and publish the selector for the given inputs.
///
/// On a hit, sets `EXECJS_RUNTIME` to the backend token and returns the
/// located runtime. On a miss, leaves the environment untouched and
/// returns `None`. Never errors; repeated calls are idempotent (last
/// write wins).
pub fn initialize_with(discovery: &Discovery, probe: &impl Probe) -> Option<Located> {
    let Some(located) = discovery.locate(probe) else {
        debug!("no runtime found, leaving environment untouched");
        return None;
    };

    info!(
        path = %located.path.display(),
        source = ?located.source,
        "publishing backend selector"
    );
    set_env_var(EXECJS_RUNTIME_VAR, Backend::Node.selector());
    Some(located)
}

/// Set a process environment variable.
///
/// Environment mutation is only sound while no other thread is running;
/// initialization happens during process startup, before anything is
/// spawned, which is the invariant callers must uphold.
#[allow(unsafe_code)]
fn set_env_var(key: &str, value: &str) {
    // SAFETY: confined to single-threaded startup per the contract above.
    unsafe { std::env::set_var(key, value) };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::{Mutex, MutexGuard};

    use crate::test_support::ScriptedProbe;

    // Tests share the process environment; serialize everything that
    // reads or writes `EXECJS_RUNTIME`.
    static SELECTOR_ENV: Mutex<()> = Mutex::new(());

    fn lock() -> MutexGuard<'static, ()> {
        SELECTOR_ENV.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[allow(unsafe_code)]
    fn clear_selector() {
        // SAFETY: test-only; guarded by SELECTOR_ENV so no concurrent access.
        unsafe { std::env::remove_var(EXECJS_RUNTIME_VAR) };
    }

    fn discovery(candidates: &[&str], bundle_root: Option<&str>) -> Discovery {
        Discovery {
            candidates: candidates.iter().map(PathBuf::from).collect(),
            bundle_root: bundle_root.map(PathBuf::from),
            bundled_name: "node".to_string(),
        }
    }

    #[test]
    fn hit_publishes_selector_and_returns_path() {
        let _guard = lock();
        clear_selector();

        let discovery = discovery(&["/usr/bin/node"], None);
        let probe = ScriptedProbe::new(["/usr/bin/node"]);

        let located = initialize_with(&discovery, &probe).expect("runtime");
        assert_eq!(located.path, PathBuf::from("/usr/bin/node"));
        assert_eq!(std::env::var(EXECJS_RUNTIME_VAR).as_deref(), Ok("Node"));

        clear_selector();
    }

    #[test]
    fn miss_leaves_environment_unset() {
        let _guard = lock();
        clear_selector();

        let discovery = discovery(&["/usr/bin/node"], None);

        assert_eq!(initialize_with(&discovery, &ScriptedProbe::empty()), None);
        assert!(std::env::var_os(EXECJS_RUNTIME_VAR).is_none());
    }

    #[test]
    fn repeated_initialization_is_idempotent() {
        let _guard = lock();
        clear_selector();

        let discovery = discovery(&["/usr/bin/node"], None);
        let probe = ScriptedProbe::new(["/usr/bin/node"]);

        initialize_with(&discovery, &probe);
        let after_once = std::env::var(EXECJS_RUNTIME_VAR).ok();
        initialize_with(&discovery, &probe);
        let after_twice = std::env::var(EXECJS_RUNTIME_VAR).ok();

        assert_eq!(after_once.as_deref(), Some("Node"));
        assert_eq!(after_once, after_twice);

        clear_selector();
    }

    #[test]
    fn bundle_hit_publishes_same_selector_token() {
        let _guard = lock();
        clear_selector();

        let discovery = discovery(&["/usr/bin/node"], Some("/tmp/extract"));
        let probe = ScriptedProbe::new(["/tmp/extract/node"]);

        let located = initialize_with(&discovery, &probe).expect("runtime");
        assert_eq!(located.path, PathBuf::from("/tmp/extract/node"));
        assert_eq!(std::env::var(EXECJS_RUNTIME_VAR).as_deref(), Ok("Node"));

        clear_selector();
    }
}
