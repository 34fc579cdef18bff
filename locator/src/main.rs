//! Diagnostic CLI for the runtime locator.
//!
//! The library publishes `EXECJS_RUNTIME` inside the host process during
//! startup; this binary answers "what would discovery select on this
//! host" for humans and scripts, with stable exit codes.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;

use node_locator::core::candidates::Backend;
use node_locator::core::discovery::{Located, Source};
use node_locator::exit_codes;
use node_locator::io::bundle::detect_bundle_root;
use node_locator::io::config::load_config;
use node_locator::io::probe::FsProbe;
use node_locator::logging;

const DEFAULT_CONFIG_PATH: &str = "locator.toml";

#[derive(Parser)]
#[command(
    name = "node-locator",
    version,
    about = "Locate a Node.js runtime for the ExecJS execution bridge"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the runtime discovery would select on this host.
    Locate {
        /// TOML config file; defaults apply when the file is missing.
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Bundle extraction directory, overriding config and environment.
        #[arg(long)]
        bundle_dir: Option<PathBuf>,

        /// Emit a JSON report instead of the bare path.
        #[arg(long)]
        json: bool,
    },
}

/// Machine-readable `locate --json` output.
#[derive(Serialize)]
struct LocateReport {
    path: PathBuf,
    source: Source,
    backend: &'static str,
}

impl LocateReport {
    fn new(located: Located) -> Self {
        Self {
            path: located.path,
            source: located.source,
            backend: Backend::Node.selector(),
        }
    }
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Command::Locate {
            config,
            bundle_dir,
            json,
        } => cmd_locate(&config, bundle_dir, json),
    }
}

fn cmd_locate(config: &Path, bundle_dir: Option<PathBuf>, json: bool) -> Result<i32> {
    let cfg = load_config(config)?;
    let mut discovery = cfg.discovery(detect_bundle_root());
    if bundle_dir.is_some() {
        discovery.bundle_root = bundle_dir;
    }

    match discovery.locate(&FsProbe) {
        Some(located) => {
            if json {
                print_json(&LocateReport::new(located))?;
            } else {
                println!("{}", located.path.display());
            }
            Ok(exit_codes::OK)
        }
        None => Ok(exit_codes::NOT_FOUND),
    }
}

/// Serialize `value` to pretty-printed JSON on stdout with trailing newline.
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)?;
    println!("{payload}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_locate_defaults() {
        let cli = Cli::parse_from(["node-locator", "locate"]);
        let Command::Locate {
            config,
            bundle_dir,
            json,
        } = cli.command;
        assert_eq!(config, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert_eq!(bundle_dir, None);
        assert!(!json);
    }

    #[test]
    fn parse_locate_with_overrides() {
        let cli = Cli::parse_from([
            "node-locator",
            "locate",
            "--config",
            "custom.toml",
            "--bundle-dir",
            "/tmp/extract",
            "--json",
        ]);
        let Command::Locate {
            config,
            bundle_dir,
            json,
        } = cli.command;
        assert_eq!(config, PathBuf::from("custom.toml"));
        assert_eq!(bundle_dir, Some(PathBuf::from("/tmp/extract")));
        assert!(json);
    }
}
