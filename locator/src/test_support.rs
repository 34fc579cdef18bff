//! Test-only helpers for constructing discovery scenarios.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::core::discovery::Probe;

/// Probe that reports existence from a fixed set of paths, without
/// touching the filesystem.
pub struct ScriptedProbe {
    present: BTreeSet<PathBuf>,
}

impl ScriptedProbe {
    /// Probe where exactly the given paths exist.
    pub fn new<I, P>(present: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            present: present.into_iter().map(Into::into).collect(),
        }
    }

    /// Probe where nothing exists.
    pub fn empty() -> Self {
        Self {
            present: BTreeSet::new(),
        }
    }
}

impl Probe for ScriptedProbe {
    fn exists(&self, path: &Path) -> bool {
        self.present.contains(path)
    }
}

/// Create an empty file at `dir/name` and return its path.
pub fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"").expect("write file");
    path
}
