use std::fmt;
use std::path::PathBuf;

/// Why a diagnostic was left alone.
///
/// Every variant is a safe no-op: the target line is not modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The line does not have a `key: value` shape.
    ParseFailure,
    /// The value is not one the rule knows how to rewrite.
    UnrecognizedValue(String),
    /// The key has no value to rewrite.
    EmptyValue,
    /// The short module name has no FQCN in the table.
    ResolutionMiss(String),
    /// The rewrite would not change the line.
    Unchanged,
    /// The diagnostic points past the end of the file.
    LineOutOfRange { line: usize, lines_in_file: usize },
    /// An FQCN check was reported but no table was supplied.
    NoFqcnTable,
    /// No rule handles this check type.
    UnsupportedCheck,
    /// The rule handling this check is disabled in the configuration.
    RuleDisabled,
    /// The target file matches a configured exclusion.
    Excluded,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::ParseFailure => write!(f, "line is not a key/value pair"),
            SkipReason::UnrecognizedValue(v) => write!(f, "unrecognized value '{v}'"),
            SkipReason::EmptyValue => write!(f, "value is empty"),
            SkipReason::ResolutionMiss(name) => write!(f, "no FQCN known for '{name}'"),
            SkipReason::Unchanged => write!(f, "already fixed"),
            SkipReason::LineOutOfRange {
                line,
                lines_in_file,
            } => write!(f, "line {line} is past end of file ({lines_in_file} lines)"),
            SkipReason::NoFqcnTable => write!(f, "no FQCN table supplied"),
            SkipReason::UnsupportedCheck => write!(f, "unsupported check"),
            SkipReason::RuleDisabled => write!(f, "rule disabled in config"),
            SkipReason::Excluded => write!(f, "path excluded in config"),
        }
    }
}

impl serde::Serialize for SkipReason {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// What happened to one diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum OutcomeStatus {
    /// The line was rewritten. `line` is the 1-based line actually edited,
    /// which differs from the diagnostic's line when an FQCN fix skips a
    /// task's `name:` line.
    Applied {
        line: usize,
        before: String,
        after: String,
    },
    Skipped { reason: SkipReason },
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Outcome {
    pub check_name: String,
    pub file: PathBuf,
    /// 1-based line reported by the linter.
    pub line: usize,
    #[serde(flatten)]
    pub status: OutcomeStatus,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self.status, OutcomeStatus::Applied { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self.status, OutcomeStatus::Skipped { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, OutcomeStatus::Failed { .. })
    }
}

/// Overall verdict of a fix run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    /// Every diagnostic was fixed (or there was nothing to fix).
    Fixed,
    /// Some diagnostics were skipped and need manual attention.
    Partial,
    /// At least one diagnostic could not be processed.
    Failed,
}

#[derive(Debug, serde::Serialize)]
pub struct FixReport {
    pub fixed_at: String,
    pub dry_run: bool,
    pub status: RunStatus,
    pub outcomes: Vec<Outcome>,
    /// Files rewritten on disk. Always empty for a dry run.
    pub files_written: Vec<PathBuf>,
    pub passed: bool,
}

impl FixReport {
    pub fn from_outcomes(
        outcomes: Vec<Outcome>,
        files_written: Vec<PathBuf>,
        dry_run: bool,
        strict: bool,
    ) -> Self {
        let status = compute_status(&outcomes, strict);
        FixReport {
            fixed_at: chrono::Utc::now().to_rfc3339(),
            dry_run,
            status,
            passed: status != RunStatus::Failed,
            outcomes,
            files_written,
        }
    }

    /// Count applied, skipped, and failed outcomes in a single pass.
    ///
    /// Returns `(applied, skipped, failed)`.
    pub fn count_by_status(&self) -> (usize, usize, usize) {
        self.outcomes
            .iter()
            .fold((0, 0, 0), |(a, s, f), o| match o.status {
                OutcomeStatus::Applied { .. } => (a + 1, s, f),
                OutcomeStatus::Skipped { .. } => (a, s + 1, f),
                OutcomeStatus::Failed { .. } => (a, s, f + 1),
            })
    }
}

fn compute_status(outcomes: &[Outcome], strict: bool) -> RunStatus {
    let (has_failed, has_skipped) = outcomes.iter().fold((false, false), |(f, s), o| {
        (f || o.is_failed(), s || o.is_skipped())
    });

    if has_failed {
        RunStatus::Failed
    } else if has_skipped {
        if strict {
            RunStatus::Failed
        } else {
            RunStatus::Partial
        }
    } else {
        RunStatus::Fixed
    }
}
