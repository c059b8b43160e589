//! Shared data models for parsed diagnostics and run summaries.

pub mod properties;

pub use properties::OffenderProperties;

use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Severity levels kept from the validator log; anything else is dropped.
pub enum Level {
    Warning,
    Error,
}

impl Level {
    /// Map a log `level` attribute; `None` for levels that are not reported.
    pub fn from_log(level: &str) -> Option<Self> {
        match level {
            "warning" => Some(Level::Warning),
            "error" => Some(Level::Error),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// One validation finding bound to a single source line.
pub struct Diagnostic {
    pub level: Level,
    pub code: String,
    pub message: String,
    pub friendly_description: String,
    pub source_line: usize,
    pub context_before: String,
    pub context_at: String,
    pub context_after: String,
    pub offender_properties: OffenderProperties,
    pub is_continuation: bool,
}

impl Diagnostic {
    pub fn new(level: Level, code: &str, message: &str, source_line: usize) -> Self {
        Self {
            level,
            code: code.to_string(),
            message: message.to_string(),
            friendly_description: String::new(),
            source_line,
            context_before: String::new(),
            context_at: String::new(),
            context_after: String::new(),
            offender_properties: OffenderProperties::new(),
            is_continuation: false,
        }
    }

    /// `Offending element(s): QName; key=value; ...`
    pub fn describe_offender(&self) -> String {
        let parts: Vec<String> = self
            .offender_properties
            .qname()
            .map(str::to_string)
            .into_iter()
            .chain(
                self.offender_properties
                    .others()
                    .map(|(k, v)| format!("{}={}", k, v)),
            )
            .collect();
        format!("Offending element(s): {}", parts.join("; "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Non-fatal problem with a single log entry.
pub struct ParseWarning {
    pub entry: usize,
    pub message: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
/// Aggregated counts used by printers.
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub diagnostics: usize,
    pub continuations: usize,
}

impl Summary {
    /// Count primary diagnostics by level; continuations are tallied separately.
    pub fn from_diagnostics(diags: &[Diagnostic]) -> Self {
        let mut s = Summary {
            diagnostics: diags.len(),
            ..Summary::default()
        };
        for d in diags {
            if d.is_continuation {
                s.continuations += 1;
                continue;
            }
            match d.level {
                Level::Error => s.errors += 1,
                Level::Warning => s.warnings += 1,
            }
        }
        s
    }
}

#[derive(Debug, Serialize)]
/// Result of a completed run, handed to the output printers.
pub struct RunOutcome {
    pub report: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
    pub warnings: Vec<ParseWarning>,
    pub summary: Summary,
    #[serde(skip)]
    pub validator_status: Option<String>,
}
