//! HTML report rendering.
//!
//! Primary diagnostics render as a full block (code heading, friendly
//! description, validator message, offender summary, source context).
//! Continuations render only the offender summary and source context and
//! are pulled up under the preceding block by the `subsequent` class.

use crate::error::{ReportError, Result};
use crate::models::Diagnostic;
use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

pub const REPORT_TITLE: &str = "xHTML Validation Report";

const STYLE: &str = r#"
        .entry {
            margin-bottom: 1.5em;
        }
        .subsequent {
            margin-top: -1.25em !important;
        }
        .arelle-message {
            font-size: 10pt;
            margin-left: 0.5em;
        }
        h3 {
            margin: 0;
        }
        .entry.error h3 {
            color: #900;
        }
        .entry.warning h3 {
            color: #a60;
        }
        .source {
            margin-left: 1em;
            font-family: monospace;
            white-space: pre-wrap;
        }
        .lineno {
            min-width: 3.5em;
            text-align: right;
            margin-right: 0.5em;
            display: inline-block;
        }
        .grayed {
            color: gray;
        }
        .dark {
            color: #900;
        }
        .clean {
            color: #060;
        }
"#;

/// Escape text for use in element content and quoted attributes.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn push_context(html: &mut String, d: &Diagnostic) {
    let rows = [
        ("grayed", d.source_line.saturating_sub(1), &d.context_before),
        ("dark", d.source_line, &d.context_at),
        ("grayed", d.source_line.saturating_add(1), &d.context_after),
    ];
    html.push_str("<div class='source'>");
    for (class, lineno, text) in rows {
        let _ = write!(
            html,
            "<div class='{}'><span class='lineno'>{}: </span>{}</div>",
            class,
            lineno,
            html_escape(text)
        );
    }
    html.push_str("</div>\n");
}

fn push_entry(html: &mut String, d: &Diagnostic) {
    let level = d.level.as_str();
    if d.is_continuation {
        let _ = write!(html, "<div class='entry {} subsequent'>", level);
    } else {
        let _ = write!(
            html,
            "<div class='entry {}'><div class='message'><h3>{}</h3>{}</div><div class='arelle-message'>{}</div>",
            level,
            html_escape(&d.code),
            html_escape(&d.friendly_description),
            html_escape(&d.message)
        );
    }
    let _ = write!(
        html,
        "<div class='source'>{}</div>",
        html_escape(&d.describe_offender())
    );
    push_context(html, d);
    html.push_str("</div>\n");
}

/// Render the complete, self-contained report document.
pub fn render_report(diagnostics: &[Diagnostic]) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>{}</title><style>{}</style></head><body>\n",
        REPORT_TITLE, STYLE
    );
    if diagnostics.is_empty() {
        html.push_str("<p class='clean'>No warnings or errors.</p>\n");
    }
    for d in diagnostics {
        push_entry(&mut html, d);
    }
    html.push_str("</body></html>\n");
    html
}

/// Write `html` to `path` atomically: the content goes to a temporary file
/// in the destination directory which is then renamed into place.
pub fn write_report(path: &Path, html: &str) -> Result<()> {
    let write_err = |source| ReportError::ReportWrite {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(html.as_bytes()).map_err(write_err)?;
    tmp.flush().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
