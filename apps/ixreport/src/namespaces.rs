//! Namespace injection into the `<html>` start tag.
//!
//! The validator needs the XBRL, inline-XBRL and taxonomy prefixes declared
//! on the root element. The rewritten document is written to a temporary
//! working copy; the input file is never touched.

use crate::error::{ReportError, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Declarations added to the root element, in emission order.
pub const NAMESPACE_DECLS: &[(&str, &str)] = &[
    ("xmlns:dei", "http://xbrl.sec.gov/dei/2018-01-31"),
    ("xmlns:rr", "http://xbrl.sec.gov/rr/2018-01-31"),
    ("xmlns:utr", "http://www.xbrl.org/2009/utr"),
    ("xmlns:link", "http://www.xbrl.org/2003/linkbase"),
    ("xmlns:xbrli", "http://www.xbrl.org/2003/instance"),
    ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
    ("xmlns:xlink", "http://www.w3.org/1999/xlink"),
    ("xmlns:xbrldi", "http://xbrl.org/2006/xbrldi"),
    ("xmlns:iso4217", "http://www.xbrl.org/2003/iso4217"),
    ("xmlns:xsd", "http://www.w3.org/2001/XMLSchema"),
    ("xmlns:num", "http://www.xbrl.org/dtr/type/numeric"),
    ("xmlns:nonnum", "http://www.xbrl.org/dtr/type/non-numeric"),
    ("xmlns:xbrldt", "http://xbrl.org/2005/xbrldt"),
    ("xmlns", "http://www.w3.org/1999/xhtml"),
    ("xmlns:ix", "http://www.xbrl.org/2013/inlineXBRL"),
    (
        "xmlns:ixt-sec",
        "http://www.sec.gov/inlineXBRL/transformation/2015-08-31",
    ),
    (
        "xmlns:ixt",
        "http://www.xbrl.org/inlineXBRL/transformation/2015-02-26",
    ),
    ("xmlns:pbf", "http://www.pioneerinvestments.com/20200819"),
];

static HTML_OPEN_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^<html(\s[^>]*)?>").expect("valid html tag pattern"));

/// The declaration block as `name="uri"` pairs joined by single spaces.
pub fn namespace_block() -> String {
    NAMESPACE_DECLS
        .iter()
        .map(|(name, uri)| format!("{}=\"{}\"", name, uri))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rewrite the first line-leading `<html ...>` tag to carry the namespace
/// block ahead of its original attributes. Documents without a match are
/// returned unchanged.
pub fn inject_namespaces(document: &str) -> String {
    let block = namespace_block();
    HTML_OPEN_TAG
        .replacen(document, 1, |caps: &Captures| {
            let attrs = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            format!("<html {}{}>", block, attrs)
        })
        .into_owned()
}

/// Read `input`, inject namespaces, and write the result to a fresh
/// temporary `.htm` file. The file is removed when the handle drops.
///
/// Returns the handle together with the working text so callers resolve
/// line numbers against exactly what the validator saw.
pub fn write_working_copy(input: &Path) -> Result<(NamedTempFile, String)> {
    let original = fs::read_to_string(input).map_err(|source| ReportError::InputRead {
        path: input.to_path_buf(),
        source,
    })?;
    let working = inject_namespaces(&original);
    let mut file = tempfile::Builder::new()
        .prefix("ixreport-")
        .suffix(".htm")
        .tempfile()
        .map_err(ReportError::WorkingCopy)?;
    file.write_all(working.as_bytes())
        .and_then(|_| file.flush())
        .map_err(ReportError::WorkingCopy)?;
    Ok((file, working))
}
