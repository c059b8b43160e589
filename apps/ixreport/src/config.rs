//! Configuration discovery and effective settings resolution.
//!
//! ixreport reads `ixreport.toml|yaml|yml` from the current directory (or
//! closest ancestor, stopping at a `.git` directory) unless `--config`
//! names a file explicitly. Defaults:
//! - `output`: `human`
//! - `validator.program`: `arelleCmdLine`
//! - `validator.plugins`: `validate/EFM`
//! - `validator.disclosureSystem`: `efm-pragmatic-all-years`
//! - `codes.ignore` / `codes.descriptions`: empty (built-ins always apply)
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::catalog::Catalog;
use crate::error::{ReportError, Result};
use crate::validator::ArelleValidator;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_NAMES: [&str; 3] = ["ixreport.toml", "ixreport.yaml", "ixreport.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Validator section under `[validator]`.
pub struct ValidatorCfg {
    pub program: Option<String>,
    pub plugins: Option<String>,
    #[serde(rename = "disclosureSystem")]
    pub disclosure_system: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Extra code tables under `[codes]`.
pub struct CodesCfg {
    #[serde(default)]
    pub ignore: Vec<String>,
    #[serde(default)]
    pub descriptions: HashMap<String, String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `ixreport.toml|yaml`.
pub struct ReportConfig {
    pub output: Option<String>,
    #[serde(default)]
    pub validator: Option<ValidatorCfg>,
    #[serde(default)]
    pub codes: Option<CodesCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the run after applying precedence.
pub struct Effective {
    pub config_path: Option<PathBuf>,
    pub output: String,
    pub validator: ArelleValidator,
    pub catalog: Catalog,
    pub log_file: Option<PathBuf>,
}

/// Walk upward from `start` to find a directory holding a config file.
///
/// Stops at the first directory containing `ixreport.*` or `.git`.
pub fn detect_config_dir(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).exists()) {
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

/// Parse a config file, choosing YAML for `.yaml|.yml` and TOML otherwise.
pub fn load_config_file(path: &Path) -> Result<ReportConfig> {
    let config_err = |reason: String| ReportError::Config {
        path: path.to_path_buf(),
        reason,
    };
    let s = fs::read_to_string(path).map_err(|e| config_err(e.to_string()))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    if is_yaml {
        serde_yaml::from_str(&s).map_err(|e| config_err(e.to_string()))
    } else {
        toml::from_str(&s).map_err(|e| config_err(e.to_string()))
    }
}

/// Locate a config file in `root`, if any.
pub fn find_config(root: &Path) -> Option<PathBuf> {
    CONFIG_NAMES
        .iter()
        .map(|n| root.join(n))
        .find(|p| p.is_file())
}

/// Load the discovered config in `root`.
///
/// `Ok(None)` when there is no config file; a file that does not parse is
/// an error so the caller can decide whether to continue with defaults.
pub fn load_config(root: &Path) -> Result<Option<(PathBuf, ReportConfig)>> {
    match find_config(root) {
        Some(p) => load_config_file(&p).map(|cfg| Some((p, cfg))),
        None => Ok(None),
    }
}

/// Merge CLI flags with a loaded config and the built-in defaults.
pub fn resolve_with(
    cfg: ReportConfig,
    config_path: Option<PathBuf>,
    cli_validator: Option<&str>,
    cli_output: Option<&str>,
    cli_log_file: Option<&str>,
) -> Effective {
    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let vcfg = cfg.validator.unwrap_or_default();
    let defaults = ArelleValidator::default();
    let validator = ArelleValidator {
        program: cli_validator
            .map(|s| s.to_string())
            .or(vcfg.program)
            .unwrap_or(defaults.program),
        plugins: vcfg.plugins.unwrap_or(defaults.plugins),
        disclosure_system: vcfg.disclosure_system.unwrap_or(defaults.disclosure_system),
        extra_args: vcfg.args,
    };

    let codes = cfg.codes.unwrap_or_default();
    let catalog = Catalog::with_extras(&codes.ignore, &codes.descriptions);

    Effective {
        config_path,
        output,
        validator,
        catalog,
        log_file: cli_log_file.map(PathBuf::from),
    }
}

/// Resolve `Effective` from CLI flags, an explicit or discovered config,
/// and defaults.
///
/// An explicit `--config` that cannot be loaded is fatal. A discovered
/// config that cannot be loaded is skipped; the error is returned
/// alongside so the caller can print a note.
pub fn resolve_effective(
    start: &Path,
    cli_config: Option<&str>,
    cli_validator: Option<&str>,
    cli_output: Option<&str>,
    cli_log_file: Option<&str>,
) -> Result<(Effective, Option<ReportError>)> {
    let (cfg, path, skipped) = match cli_config {
        Some(p) => {
            let path = PathBuf::from(p);
            (load_config_file(&path)?, Some(path), None)
        }
        None => match load_config(&detect_config_dir(start)) {
            Ok(Some((path, cfg))) => (cfg, Some(path), None),
            Ok(None) => (ReportConfig::default(), None, None),
            Err(e) => (ReportConfig::default(), None, Some(e)),
        },
    };
    let eff = resolve_with(cfg, path, cli_validator, cli_output, cli_log_file);
    Ok((eff, skipped))
}
