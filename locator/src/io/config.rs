//! Locator configuration stored as human-editable TOML.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::candidates::{BUNDLED_NODE_NAME, DEFAULT_CANDIDATES};
use crate::core::discovery::Discovery;

/// Locator configuration (TOML).
///
/// This file is intended to be edited by humans and must remain stable and
/// automatable. Missing fields default to the fixed probe list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LocatorConfig {
    /// Ordered paths probed for a Node.js executable; first match wins.
    pub candidates: Vec<String>,

    /// File name joined onto the bundle extraction directory for the
    /// fallback probe.
    pub bundled_name: String,

    /// Bundle extraction directory override. When unset, ambient detection
    /// via `LOCATOR_BUNDLE_DIR` applies.
    pub bundle_dir: Option<PathBuf>,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            candidates: DEFAULT_CANDIDATES.iter().map(ToString::to_string).collect(),
            bundled_name: BUNDLED_NODE_NAME.to_string(),
            bundle_dir: None,
        }
    }
}

impl LocatorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.candidates.is_empty() {
            return Err(anyhow!("candidates must be a non-empty array"));
        }
        if self.candidates.iter().any(|c| c.trim().is_empty()) {
            return Err(anyhow!("candidates must not contain empty paths"));
        }
        if self.bundled_name.trim().is_empty() {
            return Err(anyhow!("bundled_name must not be empty"));
        }
        if self.bundled_name.contains('/') {
            return Err(anyhow!(
                "bundled_name must be a file name, not a path (got '{}')",
                self.bundled_name
            ));
        }
        Ok(())
    }

    /// Build discovery inputs from this config.
    ///
    /// An explicit `bundle_dir` in the file wins over the ambient root the
    /// caller detected.
    pub fn discovery(&self, ambient_bundle_root: Option<PathBuf>) -> Discovery {
        Discovery {
            candidates: self.candidates.iter().map(PathBuf::from).collect(),
            bundle_root: self.bundle_dir.clone().or(ambient_bundle_root),
            bundled_name: self.bundled_name.clone(),
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `LocatorConfig::default()`.
pub fn load_config(path: &Path) -> Result<LocatorConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        let cfg = LocatorConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: LocatorConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    debug!(path = %path.display(), candidates = cfg.candidates.len(), "loaded config");
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &LocatorConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
