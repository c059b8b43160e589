//! ixreport core library.
//!
//! Turns the log of an external inline XBRL validator into a readable HTML
//! report, with each finding shown next to the offending source lines.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `catalog`: Ignore-list and friendly-description tables.
//! - `namespaces`: Namespace injection into the document's `<html>` tag.
//! - `validator`: External validator invocation and log replay.
//! - `parser`: Validator log parsing into diagnostics.
//! - `annotate`: Source context lines for each diagnostic.
//! - `report`: HTML rendering and atomic report writing.
//! - `pipeline`: The end-to-end run with scoped temporary files.
//! - `models`: Diagnostics, summaries and run outcome structs.
//! - `output`: Human/JSON console printers.
//! - `error`: Fatal error taxonomy.
//! - `utils`: Supporting helpers.
pub mod annotate;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod namespaces;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod utils;
pub mod validator;
