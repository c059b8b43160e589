//! Validator collaborators.
//!
//! The validation engine is external. The pipeline only needs something that
//! turns a working document into a log file at a given path; the engine's
//! own exit status is reported but never interpreted.

use crate::error::{ReportError, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

pub const DEFAULT_PROGRAM: &str = "arelleCmdLine";
pub const DEFAULT_PLUGINS: &str = "validate/EFM";
pub const DEFAULT_DISCLOSURE_SYSTEM: &str = "efm-pragmatic-all-years";

#[derive(Debug, Clone, PartialEq, Eq)]
/// What happened when the validator ran.
pub struct ValidatorRun {
    /// `None` when the process reported success or nothing was launched.
    pub status_note: Option<String>,
}

pub trait Validator {
    /// Name used in error messages.
    fn program(&self) -> &str;

    /// Validate `working` and leave a log document at `log`.
    fn validate(&self, working: &Path, log: &Path) -> Result<ValidatorRun>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Runs the Arelle command line with the EFM rule set.
pub struct ArelleValidator {
    pub program: String,
    pub plugins: String,
    pub disclosure_system: String,
    pub extra_args: Vec<String>,
}

impl Default for ArelleValidator {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            plugins: DEFAULT_PLUGINS.to_string(),
            disclosure_system: DEFAULT_DISCLOSURE_SYSTEM.to_string(),
            extra_args: Vec::new(),
        }
    }
}

impl ArelleValidator {
    pub fn args(&self, working: &Path, log: &Path) -> Vec<String> {
        let mut args = vec![
            "-f".to_string(),
            working.to_string_lossy().to_string(),
            "-v".to_string(),
            "--efm".to_string(),
            "--plugins".to_string(),
            self.plugins.clone(),
            "--disclosureSystem".to_string(),
            self.disclosure_system.clone(),
        ];
        args.extend(self.extra_args.iter().cloned());
        args.push("--logFile".to_string());
        args.push(log.to_string_lossy().to_string());
        args
    }
}

impl Validator for ArelleValidator {
    fn program(&self) -> &str {
        &self.program
    }

    fn validate(&self, working: &Path, log: &Path) -> Result<ValidatorRun> {
        let out = Command::new(&self.program)
            .args(self.args(working, log))
            .output()
            .map_err(|source| ReportError::ValidatorInvocation {
                program: self.program.clone(),
                source,
            })?;
        let status_note = if out.status.success() {
            None
        } else {
            Some(failure_note(&out.status, &out.stderr))
        };
        Ok(ValidatorRun { status_note })
    }
}

/// Lines of validator stderr carried into a failure note.
const STDERR_TAIL_LINES: usize = 5;

/// Status plus the last few non-blank stderr lines, oldest first.
fn failure_note(status: &dyn fmt::Display, stderr: &[u8]) -> String {
    let stderr = String::from_utf8_lossy(stderr);
    let lines: Vec<&str> = stderr
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.trim().is_empty())
        .collect();
    let tail = &lines[lines.len().saturating_sub(STDERR_TAIL_LINES)..];
    let mut note = format!("validator exited with {}", status);
    for line in tail {
        note.push_str("\n    ");
        note.push_str(line);
    }
    note
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Reuses a log produced by an earlier validator run.
pub struct ReplayValidator {
    pub log: PathBuf,
}

impl Validator for ReplayValidator {
    fn program(&self) -> &str {
        "replay"
    }

    fn validate(&self, _working: &Path, log: &Path) -> Result<ValidatorRun> {
        fs::copy(&self.log, log).map_err(|source| ReportError::ValidatorInvocation {
            program: format!("replay of {}", self.log.display()),
            source,
        })?;
        Ok(ValidatorRun { status_note: None })
    }
}
