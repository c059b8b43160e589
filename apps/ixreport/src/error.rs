//! Fatal error taxonomy for a report run.
//!
//! Every variant aborts the run; per-entry log problems are not errors and
//! travel as `ParseWarning`s instead.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot read input document {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot create temporary working file: {0}")]
    WorkingCopy(#[source] io::Error),

    #[error("cannot launch validator `{program}`: {source}")]
    ValidatorInvocation {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("validator log is missing or malformed: {reason}")]
    LogFormat { reason: String },

    #[error("cannot write report {}: {source}", path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

impl ReportError {
    pub fn log_format<R: Into<String>>(reason: R) -> Self {
        Self::LogFormat {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
