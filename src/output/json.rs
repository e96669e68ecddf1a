//! JSON output formatter.
//!
//! Produces a pretty-printed JSON document with run metadata, a status
//! summary, and one entry per diagnostic.

use crate::outcome::{FixReport, Outcome, RunStatus};
use std::path::PathBuf;

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    fixed_at: &'a str,
    dry_run: bool,
    status: RunStatus,
    passed: bool,
    summary: Summary,
    files_written: &'a [PathBuf],
    outcomes: &'a [Outcome],
}

#[derive(serde::Serialize)]
struct Summary {
    applied: usize,
    skipped: usize,
    failed: usize,
}

/// Formats a [`FixReport`] as pretty-printed JSON.
///
/// # Panics
///
/// Panics if the report cannot be serialized (should not happen with valid data).
pub fn format(report: &FixReport) -> String {
    let (applied, skipped, failed) = report.count_by_status();
    let output = JsonOutput {
        fixed_at: &report.fixed_at,
        dry_run: report.dry_run,
        status: report.status,
        passed: report.passed,
        summary: Summary {
            applied,
            skipped,
            failed,
        },
        files_written: &report.files_written,
        outcomes: &report.outcomes,
    };

    serde_json::to_string_pretty(&output).expect("JSON serialization failed")
}
