//! Configuration discovery and effective settings resolution.
//!
//! lintfold reads `lintfold.toml|yaml|yml` from the repository root (or the
//! closest ancestor) and merges it with CLI flags into an `Effective` config.
//! Defaults:
//! - `inputs`: none (messages are read from stdin)
//! - `output`: `human`
//! - `maxWarnings`: unset (warnings never fail the run)
//! - `quiet`: false
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_NAMES: [&str; 3] = ["lintfold.toml", "lintfold.yaml", "lintfold.yml"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
/// Printer selection.
pub enum OutputMode {
    #[default]
    Human,
    Json,
}

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
/// Root configuration loaded from `lintfold.toml|yaml`.
pub struct LintfoldConfig {
    /// Glob patterns (relative to the repo root) of rule message files.
    #[serde(default)]
    pub inputs: Option<Vec<String>>,
    pub output: Option<OutputMode>,
    pub max_warnings: Option<usize>,
    pub quiet: Option<bool>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the `report` command.
pub struct Effective {
    pub repo_root: PathBuf,
    pub config_found: bool,
    pub inputs: Vec<String>,
    pub output: OutputMode,
    pub max_warnings: Option<usize>,
    pub quiet: bool,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `lintfold.toml|yaml|yml` or a `.git` entry is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|name| cur.join(name).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `LintfoldConfig` from the first config file present in `root`.
///
/// Returns `Ok(None)` when there is no config file. A file that exists but
/// cannot be read or parsed is an error.
pub fn load_config(root: &Path) -> Result<Option<LintfoldConfig>, ConfigError> {
    let toml_path = root.join("lintfold.toml");
    if toml_path.exists() {
        let s = read(&toml_path)?;
        let cfg = toml::from_str(&s).map_err(|source| ConfigError::ParseToml {
            path: toml_path.clone(),
            source,
        })?;
        return Ok(Some(cfg));
    }
    for yml in ["lintfold.yaml", "lintfold.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = read(&p)?;
            let cfg = serde_yaml::from_str(&s).map_err(|source| ConfigError::ParseYaml {
                path: p.clone(),
                source,
            })?;
            return Ok(Some(cfg));
        }
    }
    Ok(None)
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
///
/// An empty `cli_inputs` slice defers to the config file.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_inputs: &[String],
    cli_output: Option<OutputMode>,
    cli_max_warnings: Option<usize>,
    cli_quiet: Option<bool>,
) -> Result<Effective, ConfigError> {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let loaded = load_config(&repo_root)?;
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();

    let inputs = if cli_inputs.is_empty() {
        cfg.inputs.unwrap_or_default()
    } else {
        cli_inputs.to_vec()
    };
    let output = cli_output.or(cfg.output).unwrap_or_default();
    let max_warnings = cli_max_warnings.or(cfg.max_warnings);
    let quiet = cli_quiet.or(cfg.quiet).unwrap_or(false);

    Ok(Effective {
        repo_root,
        config_found,
        inputs,
        output,
        max_warnings,
        quiet,
    })
}
