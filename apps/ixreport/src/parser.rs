//! Validator log parsing.
//!
//! The log is an XML document of `<entry level code>` elements, each holding
//! a `<message>` and any number of `<ref sourceLine>` elements with nested
//! `<property name value>` children. Every kept ref with a line number
//! becomes one `Diagnostic`; refs after the first kept one are continuations.

use crate::catalog::Catalog;
use crate::error::{ReportError, Result};
use crate::models::{Diagnostic, Level, ParseWarning};
use roxmltree::{Document, Node, ParsingOptions};

#[derive(Debug, Default)]
pub struct ParsedLog {
    pub diagnostics: Vec<Diagnostic>,
    pub warnings: Vec<ParseWarning>,
}

fn elements<'a, 'input>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.descendants()
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}

fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// Parse a validator log.
///
/// Fails only when the document as a whole is unusable; problems confined
/// to one entry are reported as warnings and that entry (or ref, or
/// property) is skipped.
pub fn parse_log(xml: &str, catalog: &Catalog) -> Result<ParsedLog> {
    if xml.trim().is_empty() {
        return Err(ReportError::log_format("log file is empty"));
    }
    let mut opts = ParsingOptions::default();
    opts.allow_dtd = true;
    let doc = Document::parse_with_options(xml, opts)
        .map_err(|e| ReportError::log_format(e.to_string()))?;
    let root = doc.root_element();
    if root.tag_name().name() != "log" {
        return Err(ReportError::log_format(format!(
            "expected <log> root element, found <{}>",
            root.tag_name().name()
        )));
    }

    let mut out = ParsedLog::default();
    for (idx, entry) in elements(root, "entry").enumerate() {
        parse_entry(idx + 1, entry, catalog, &mut out);
    }
    Ok(out)
}

fn parse_entry(idx: usize, entry: Node<'_, '_>, catalog: &Catalog, out: &mut ParsedLog) {
    let mut warn = |message: String| {
        out.warnings.push(ParseWarning {
            entry: idx,
            message,
        })
    };
    let Some(level) = entry.attribute("level") else {
        warn("entry has no `level` attribute; skipped".to_string());
        return;
    };
    let Some(level) = Level::from_log(level) else {
        return;
    };
    let Some(code) = entry.attribute("code") else {
        warn("entry has no `code` attribute; skipped".to_string());
        return;
    };
    if catalog.is_ignored(code) {
        return;
    }
    let Some(message) = elements(entry, "message").next().map(text_content) else {
        warn(format!("entry `{}` has no <message>; skipped", code));
        return;
    };

    let mut pending: Vec<Diagnostic> = Vec::new();
    let mut ref_warnings: Vec<String> = Vec::new();
    for r in elements(entry, "ref") {
        let Some(raw_line) = r.attribute("sourceLine") else {
            continue;
        };
        let line = match raw_line.trim().parse::<usize>() {
            // the line after `n` must stay addressable
            Ok(n) if n >= 1 && n.checked_add(1).is_some() => n,
            _ => {
                ref_warnings.push(format!(
                    "entry `{}` has ref with invalid sourceLine `{}`; ref skipped",
                    code, raw_line
                ));
                continue;
            }
        };
        let mut diag = Diagnostic::new(level, code, &message, line);
        diag.friendly_description = catalog.describe(code).to_string();
        diag.is_continuation = !pending.is_empty();
        for prop in elements(r, "property") {
            match (prop.attribute("name"), prop.attribute("value")) {
                (Some(name), Some(value)) => diag.offender_properties.insert(name, value),
                _ => ref_warnings.push(format!(
                    "entry `{}` has property without name/value on line {}; property skipped",
                    code, line
                )),
            }
        }
        pending.push(diag);
    }
    for w in ref_warnings {
        warn(w);
    }
    out.diagnostics.extend(pending);
}
