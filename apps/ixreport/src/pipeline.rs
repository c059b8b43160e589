//! End-to-end run: inject namespaces, validate, parse, annotate, render.
//!
//! Temporary files (working copy and validator log) are owned by `tempfile`
//! handles for the whole run and removed when they drop, on success and on
//! every error path.

use crate::annotate::annotate;
use crate::catalog::Catalog;
use crate::error::{ReportError, Result};
use crate::models::{RunOutcome, Summary};
use crate::namespaces::write_working_copy;
use crate::parser::parse_log;
use crate::report::{render_report, write_report};
use crate::validator::Validator;
use std::fs;
use std::path::Path;

pub fn run(
    input: &Path,
    report: &Path,
    validator: &dyn Validator,
    catalog: &Catalog,
) -> Result<RunOutcome> {
    let (working_file, working_text) = write_working_copy(input)?;
    let log_path = tempfile::Builder::new()
        .prefix("ixreport-")
        .suffix(".xml")
        .tempfile()
        .map_err(ReportError::WorkingCopy)?
        .into_temp_path();

    let run = validator.validate(working_file.path(), &log_path)?;

    let log_text = fs::read_to_string(&log_path)
        .map_err(|e| ReportError::log_format(format!("cannot read log: {}", e)))?;
    let parsed = parse_log(&log_text, catalog)?;

    let mut diagnostics = parsed.diagnostics;
    annotate(&mut diagnostics, &working_text);

    let html = render_report(&diagnostics);
    write_report(report, &html)?;

    Ok(RunOutcome {
        report: report.to_path_buf(),
        summary: Summary::from_diagnostics(&diagnostics),
        diagnostics,
        warnings: parsed.warnings,
        validator_status: run.status_note,
    })
}
