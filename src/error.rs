//! Error types for the fix engine.
//!
//! Only conditions that stop a diagnostic from being processed at all live
//! here. Lines that cannot be safely rewritten are not errors; they surface
//! as [`SkipReason`](crate::outcome::SkipReason) values in the report.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading inputs or touching target files.
#[derive(Debug, Error)]
pub enum FixError {
    /// A target, report, or FQCN list file could not be read or written.
    #[error("{}: {source}", .path.display())]
    Io {
        /// File the operation was performed on.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A diagnostic record is missing a required field or carries an
    /// impossible line number.
    #[error("malformed diagnostic record: {0}")]
    MalformedRecord(String),

    /// The lint report is not valid JSON.
    #[error("failed to parse lint report: {0}")]
    Report(#[from] serde_json::Error),

    /// The configuration file is missing or invalid.
    #[error("{0}")]
    Config(String),
}

impl FixError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FixError::Io {
            path: path.into(),
            source,
        }
    }
}
