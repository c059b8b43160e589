//! Console output for a finished run.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! every diagnostic, per-entry parse warnings, and a top-level summary.

use crate::models::{Level, RunOutcome};
use crate::utils;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::fmt::Write as _;

fn use_colors(output: &str) -> bool {
    output != "json" && utils::colors_enabled()
}

/// Print parse warnings to stderr; they never change the exit code.
pub fn print_warnings(outcome: &RunOutcome) {
    for w in &outcome.warnings {
        eprintln!("{} log entry {}: {}", utils::warning_prefix(), w.entry, w.message);
    }
    if let Some(note) = &outcome.validator_status {
        eprintln!("{} {}", utils::note_prefix(), note);
    }
}

/// Print the run result in the requested format.
pub fn print_outcome(outcome: &RunOutcome, output: &str) {
    match render_outcome(outcome, output) {
        Ok(s) => print!("{}", s),
        Err(e) => eprintln!("{} {}", utils::error_prefix(), e),
    }
}

/// Render the run result; any output other than `json` renders as `human`.
pub fn render_outcome(outcome: &RunOutcome, output: &str) -> serde_json::Result<String> {
    match output {
        "json" => serde_json::to_string_pretty(&compose_json(outcome)).map(|s| s + "\n"),
        _ => Ok(render_human(outcome, use_colors(output))),
    }
}

fn render_human(outcome: &RunOutcome, color: bool) -> String {
    let mut out = String::new();
    for d in outcome.diagnostics.iter().filter(|d| !d.is_continuation) {
        let (icon, sev) = match d.level {
            Level::Error => ("✖", "⟦error⟧"),
            Level::Warning => ("▲", "⟦warn⟧"),
        };
        let (icon, sev) = if color {
            match d.level {
                Level::Error => (icon.red().to_string(), sev.red().bold().to_string()),
                Level::Warning => (icon.yellow().to_string(), sev.yellow().bold().to_string()),
            }
        } else {
            (icon.to_string(), sev.to_string())
        };
        let _ = writeln!(
            out,
            "{} {} line {} ❲{}❳ — {}",
            icon, sev, d.source_line, d.code, d.message
        );
    }
    let s = &outcome.summary;
    let summary = format!(
        "— Summary — errors={} warnings={} diagnostics={} continuations={}",
        s.errors, s.warnings, s.diagnostics, s.continuations
    );
    if color {
        let _ = writeln!(out, "{}", summary.bold());
    } else {
        let _ = writeln!(out, "{}", summary);
    }
    let _ = writeln!(out, "report: {}", outcome.report.display());
    out
}

/// Compose the JSON object (pure) for testing/snapshot purposes.
pub fn compose_json(outcome: &RunOutcome) -> JsonVal {
    json!({
        "report": outcome.report.to_string_lossy(),
        "diagnostics": outcome.diagnostics,
        "summary": outcome.summary,
        "warnings": outcome.warnings,
    })
}
