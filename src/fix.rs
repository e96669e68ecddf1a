//! Fix orchestration.
//!
//! [`run_fix`] is the main entry-point: it buckets diagnostics by check
//! type, dispatches each bucket to its [`FixRule`] in a fixed order, applies
//! the edits to in-memory buffers, and finally writes the changed files back
//! (unless running dry).
//!
//! Dispatch order is fixed by [`DISPATCH_ORDER`]. Diagnostics on the same
//! file are applied one after another, so each sees the edits made before
//! it. Checks outside that list are recorded as skipped and never touch a
//! file.

use crate::config::Config;
use crate::diagnostic::{Buckets, Diagnostic};
use crate::fqcn::FqcnTable;
use crate::outcome::{FixReport, Outcome, OutcomeStatus, SkipReason};
use crate::rules::fqcn::FqcnRule;
use crate::rules::name_casing::NameCasingRule;
use crate::rules::octal::OctalValuesRule;
use crate::rules::truthy::TruthyRule;
use crate::rules::{FixRule, Rewrite};
use crate::source::Workspace;
use std::path::PathBuf;

/// Check labels with a fixer, in the order their buckets are processed.
pub const DISPATCH_ORDER: &[&str] = &[
    "yaml[truthy]",
    "yaml[octal-values]",
    "name[casing]",
    "fqcn[action-core]",
    "fqcn[action]",
];

/// Run-level switches that do not come from the config file.
#[derive(Debug, Clone, Default)]
pub struct FixOptions {
    /// Directory relative diagnostic paths are resolved against.
    pub root: Option<PathBuf>,
    /// Compute and report edits without writing any file.
    pub dry_run: bool,
}

/// Fixes every diagnostic it can and reports what happened to each.
///
/// # Pipeline
///
/// 1. Groups `diagnostics` into [`Buckets`].
/// 2. Runs [`dispatch`] against a fresh [`Workspace`].
/// 3. Writes dirty files with [`write_back`] (skipped when
///    [`FixOptions::dry_run`] is set).
/// 4. Assembles the [`FixReport`].
///
/// # Examples
///
/// ```rust,no_run
/// use oxidized_lint_fix::{config::Config, diagnostic, fix};
///
/// let diagnostics = diagnostic::read_report(None).unwrap();
/// let report = fix::run_fix(diagnostics, None, &Config::default(), &fix::FixOptions::default());
/// std::process::exit(if report.passed { 0 } else { 1 });
/// ```
pub fn run_fix(
    diagnostics: Vec<Diagnostic>,
    table: Option<&FqcnTable>,
    config: &Config,
    options: &FixOptions,
) -> FixReport {
    let buckets = Buckets::from_diagnostics(diagnostics);
    let mut workspace = Workspace::new(options.root.clone());
    let mut outcomes = dispatch(&buckets, table, config, &mut workspace);

    let files_written = if options.dry_run {
        Vec::new()
    } else {
        write_back(&mut workspace, &mut outcomes)
    };

    let report = FixReport::from_outcomes(
        outcomes,
        files_written,
        options.dry_run,
        config.strict.enabled,
    );
    let (applied, skipped, failed) = report.count_by_status();
    tracing::info!(
        applied,
        skipped,
        failed,
        files = report.files_written.len(),
        "fix run complete"
    );
    report
}

/// Flushes `workspace` and returns the files written.
///
/// Applied outcomes whose file failed to write become
/// [`OutcomeStatus::Failed`] with the write error.
pub fn write_back(workspace: &mut Workspace, outcomes: &mut [Outcome]) -> Vec<PathBuf> {
    let (written, failures) = workspace.flush();
    if failures.is_empty() {
        return written;
    }
    for outcome in outcomes.iter_mut().filter(|o| o.is_applied()) {
        let key = workspace.key(&outcome.file);
        if let Some((_, err)) = failures.iter().find(|(p, _)| *p == key) {
            outcome.status = OutcomeStatus::Failed {
                error: err.to_string(),
            };
        }
    }
    written
}

/// Routes each bucket to its rule and applies the resulting edits to
/// `workspace`. Returns one [`Outcome`] per diagnostic.
///
/// The FQCN rule takes part only when `table` is present and non-empty;
/// otherwise FQCN diagnostics are skipped with [`SkipReason::NoFqcnTable`].
pub fn dispatch(
    buckets: &Buckets,
    table: Option<&FqcnTable>,
    config: &Config,
    workspace: &mut Workspace,
) -> Vec<Outcome> {
    let fqcn_rule = table.filter(|t| !t.is_empty()).map(FqcnRule::new);
    let mut rules: Vec<&dyn FixRule> = vec![&TruthyRule, &OctalValuesRule, &NameCasingRule];
    if let Some(rule) = &fqcn_rule {
        rules.push(rule);
    }

    let mut outcomes = Vec::with_capacity(buckets.len());

    for check in DISPATCH_ORDER {
        let rule = rules
            .iter()
            .copied()
            .find(|r| r.check_names().contains(check));
        for diagnostic in buckets.get(check) {
            let status = match rule {
                None => skipped(SkipReason::NoFqcnTable),
                Some(rule) if !config.is_rule_enabled(rule.name()) => {
                    skipped(SkipReason::RuleDisabled)
                }
                Some(_) if config.is_excluded(&diagnostic.path) => skipped(SkipReason::Excluded),
                Some(rule) => apply(rule, diagnostic, workspace),
            };
            outcomes.push(outcome(diagnostic, status));
        }
    }

    for label in buckets
        .labels()
        .filter(|l| !DISPATCH_ORDER.iter().any(|known| known == l))
    {
        for diagnostic in buckets.get(label) {
            tracing::debug!(check = label, "no fixer for check");
            outcomes.push(outcome(diagnostic, skipped(SkipReason::UnsupportedCheck)));
        }
    }

    outcomes
}

fn apply(rule: &dyn FixRule, diagnostic: &Diagnostic, workspace: &mut Workspace) -> OutcomeStatus {
    let file = match workspace.open(&diagnostic.path) {
        Ok(f) => f,
        Err(e) => {
            tracing::warn!(check = %diagnostic.check_name, error = %e, "cannot open target file");
            return OutcomeStatus::Failed {
                error: e.to_string(),
            };
        }
    };

    match rule.rewrite(file, diagnostic.line_index()) {
        Rewrite::Edit { index, line } => {
            let before = file.line(index).unwrap_or_default().to_string();
            file.replace_line(index, line.clone());
            tracing::debug!(
                check = %diagnostic.check_name,
                path = %diagnostic.path.display(),
                line = index + 1,
                "applied fix"
            );
            OutcomeStatus::Applied {
                line: index + 1,
                before,
                after: line,
            }
        }
        Rewrite::Skip(reason) => {
            tracing::debug!(
                check = %diagnostic.check_name,
                path = %diagnostic.path.display(),
                line = diagnostic.line_begin,
                %reason,
                "skipped"
            );
            skipped(reason)
        }
    }
}

fn skipped(reason: SkipReason) -> OutcomeStatus {
    OutcomeStatus::Skipped { reason }
}

fn outcome(diagnostic: &Diagnostic, status: OutcomeStatus) -> Outcome {
    Outcome {
        check_name: diagnostic.check_name.clone(),
        file: diagnostic.path.clone(),
        line: diagnostic.line_begin,
        status,
    }
}
