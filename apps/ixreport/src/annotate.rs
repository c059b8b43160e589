//! Attach source context lines to parsed diagnostics.
//!
//! One forward pass over the working document. Diagnostics live in the
//! caller's slice; a separate list of live indices shrinks as each
//! diagnostic receives its trailing line, so finished entries are not
//! checked again.

use crate::models::Diagnostic;

/// Fill `context_before`, `context_at` and `context_after` from `document`.
///
/// Lines are 1-based and taken without their terminator. Diagnostics whose
/// line lies past the end of the document keep empty fields for the lines
/// that do not exist. Several diagnostics may share a line; each is
/// annotated independently.
pub fn annotate(diagnostics: &mut [Diagnostic], document: &str) {
    let mut live: Vec<usize> = (0..diagnostics.len()).collect();
    for (idx, line) in document.lines().enumerate() {
        if live.is_empty() {
            break;
        }
        let n = idx + 1;
        live.retain(|&i| {
            let d = &mut diagnostics[i];
            if n + 1 == d.source_line {
                d.context_before = line.to_string();
            } else if n == d.source_line {
                d.context_at = line.to_string();
            } else if Some(n) == d.source_line.checked_add(1) {
                d.context_after = line.to_string();
                return false;
            }
            true
        });
    }
}
