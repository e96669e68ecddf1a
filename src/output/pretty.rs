//! Human-readable colored text formatter.

use crate::outcome::{FixReport, OutcomeStatus, RunStatus};
use colored::Colorize;

/// Formats a [`FixReport`] as human-readable, ANSI-colored text.
///
/// Sections rendered (in order):
/// 1. **Header** — timestamp and dry-run marker.
/// 2. **Outcomes** — one entry per diagnostic, with the edit or the reason
///    it was skipped.
/// 3. **Files** — files written to disk.
/// 4. **Summary** — overall status and counts.
pub fn format(report: &FixReport) -> String {
    let mut out = String::new();

    let title = if report.dry_run {
        "  Lint Fix (dry run)  "
    } else {
        "  Lint Fix  "
    };
    out.push_str(&format!("\n{}\n", title.bold().on_blue().white()));
    out.push_str(&format!("  Timestamp: {}\n\n", report.fixed_at));

    if !report.outcomes.is_empty() {
        out.push_str(&format!("{}\n", "Outcomes".bold().underline()));
        for outcome in &report.outcomes {
            let location = format!("{}:{}", outcome.file.display(), outcome.line);
            match &outcome.status {
                OutcomeStatus::Applied { line, before, after } => {
                    out.push_str(&format!(
                        "  [{}] {:<22} {}\n",
                        "FIXED".green().bold(),
                        outcome.check_name.dimmed(),
                        location,
                    ));
                    if *line != outcome.line {
                        out.push_str(&format!("          (edited line {line})\n"));
                    }
                    out.push_str(&format!("          - {}\n", before.red()));
                    out.push_str(&format!("          + {}\n", after.green()));
                }
                OutcomeStatus::Skipped { reason } => {
                    out.push_str(&format!(
                        "  [{}] {:<22} {}  {}\n",
                        " SKIP".yellow().bold(),
                        outcome.check_name.dimmed(),
                        location,
                        reason.to_string().dimmed(),
                    ));
                }
                OutcomeStatus::Failed { error } => {
                    out.push_str(&format!(
                        "  [{}] {:<22} {}  {}\n",
                        " FAIL".red().bold(),
                        outcome.check_name.dimmed(),
                        location,
                        error,
                    ));
                }
            }
        }
        out.push('\n');
    }

    if !report.files_written.is_empty() {
        out.push_str(&format!(
            "{} ({})\n",
            "Files written".bold().underline(),
            report.files_written.len()
        ));
        for path in &report.files_written {
            out.push_str(&format!("  {}\n", path.display()));
        }
        out.push('\n');
    }

    let status_str = match report.status {
        RunStatus::Fixed => "FIXED".green().bold().to_string(),
        RunStatus::Partial => "PARTIAL".yellow().bold().to_string(),
        RunStatus::Failed => "FAILED".red().bold().to_string(),
    };
    let (applied, skipped, failed) = report.count_by_status();
    out.push_str(&format!(
        "Result: {status_str}  |  {applied} applied, {skipped} skipped, {failed} failed\n"
    ));

    out
}
