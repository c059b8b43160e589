//! Code tables consulted while parsing the validator log.
//!
//! The built-in ignore-list and friendly descriptions are constants; config
//! can only add to them. A `Catalog` is built once at startup and passed by
//! reference afterwards.

use std::collections::{HashMap, HashSet};

/// Codes whose entries never reach the report.
pub const IGNORED_CODES: &[&str] = &[
    "ix11.14.1.2:missingResources",
    "ix11.12.1.2:missingReferences",
    "arelle:ixdsTargetNotDefined",
    "EFM.6.05.19",
    "EFM.coverFacts",
    "ix11.8.1.3:headerMissing",
    "EFM.5.02.05.graphicFileError",
];

/// Human-oriented explanations shown under a diagnostic heading.
pub const FRIENDLY_DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "html:syntaxError",
        "HTML syntax error: input file does not follow the xHTML DTD",
    ),
    (
        "EFM.5.02.05.anchorElementPosition",
        "Anchor located outside of root elements",
    ),
];

#[derive(Debug, Clone)]
pub struct Catalog {
    ignored: HashSet<String>,
    descriptions: HashMap<String, String>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            ignored: IGNORED_CODES.iter().map(|c| c.to_string()).collect(),
            descriptions: FRIENDLY_DESCRIPTIONS
                .iter()
                .map(|(c, d)| (c.to_string(), d.to_string()))
                .collect(),
        }
    }

    /// Built-in tables extended with configured codes. Extra descriptions
    /// replace built-in text for the same code.
    pub fn with_extras(
        extra_ignored: &[String],
        extra_descriptions: &HashMap<String, String>,
    ) -> Self {
        let mut cat = Self::builtin();
        cat.ignored.extend(extra_ignored.iter().cloned());
        for (code, desc) in extra_descriptions {
            cat.descriptions.insert(code.clone(), desc.clone());
        }
        cat
    }

    pub fn is_ignored(&self, code: &str) -> bool {
        self.ignored.contains(code)
    }

    /// Friendly description for `code`, empty when unknown.
    pub fn describe(&self, code: &str) -> &str {
        self.descriptions.get(code).map(String::as_str).unwrap_or("")
    }
}
