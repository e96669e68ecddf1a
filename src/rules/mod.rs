//! Line rewrite rules.
//!
//! Every rule implements [`FixRule`]: given a target file's lines and the
//! 0-based index a diagnostic points at, it either produces a replacement
//! line or explains why it left the line alone. Rules never touch the disk;
//! the [`fix`](crate::fix) dispatcher owns all file I/O.
//!
//! | Rule | Checks | Rewrite |
//! |------|--------|---------|
//! | [`truthy`] | `yaml[truthy]` | `yes`/`no` → `true`/`false` |
//! | [`octal`] | `yaml[octal-values]` | `0644` → `"0644"` |
//! | [`name_casing`] | `name[casing]` | `deploy` → `Deploy` |
//! | [`fqcn`] | `fqcn[action-core]`, `fqcn[action]` | `copy:` → `ansible.builtin.copy:` |

pub mod fqcn;
pub mod name_casing;
pub mod octal;
pub mod truthy;

use crate::grammar::KeyValueLine;
use crate::outcome::SkipReason;
use crate::source::SourceFile;

/// Result of applying a rule to one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    /// Replace the body of line `index` with `line`.
    Edit { index: usize, line: String },
    /// Leave the file untouched.
    Skip(SkipReason),
}

/// A fixer for one or more ansible-lint check types.
pub trait FixRule {
    /// Config key for the rule (e.g., `"truthy"`).
    fn name(&self) -> &'static str;

    /// Check-type labels this rule handles.
    fn check_names(&self) -> &'static [&'static str];

    /// Computes the rewrite for the diagnostic at 0-based line `index`.
    fn rewrite(&self, file: &SourceFile, index: usize) -> Rewrite;
}

/// Fetches and parses the line at `index`.
pub(crate) fn parse_line(file: &SourceFile, index: usize) -> Result<KeyValueLine<'_>, SkipReason> {
    let line = file.line(index).ok_or(SkipReason::LineOutOfRange {
        line: index + 1,
        lines_in_file: file.len(),
    })?;
    KeyValueLine::parse(line).ok_or(SkipReason::ParseFailure)
}

/// Wraps a rule body that rewrites one parsed line.
///
/// `compute` returns the new line text; a result identical to the current
/// line becomes [`SkipReason::Unchanged`].
pub(crate) fn rewrite_line<F>(file: &SourceFile, index: usize, compute: F) -> Rewrite
where
    F: FnOnce(&KeyValueLine<'_>) -> Result<String, SkipReason>,
{
    let parsed = match parse_line(file, index) {
        Ok(p) => p,
        Err(reason) => return Rewrite::Skip(reason),
    };
    match compute(&parsed) {
        Ok(line) if file.line(index) == Some(line.as_str()) => Rewrite::Skip(SkipReason::Unchanged),
        Ok(line) => Rewrite::Edit { index, line },
        Err(reason) => Rewrite::Skip(reason),
    }
}

/// Metadata for a supported check.
///
/// Returned by [`all_rules`] and used by the `list-rules` and `explain`
/// CLI commands.
pub struct RuleInfo {
    /// ansible-lint check label (e.g., `"yaml[truthy]"`).
    pub check: &'static str,
    /// Config key of the rule that fixes it.
    pub rule: &'static str,
    /// What the fix does.
    pub description: &'static str,
    /// Sample offending line.
    pub before: &'static str,
    /// The same line after the fix.
    pub after: &'static str,
}

/// Aggregates [`RuleInfo`] from every rule module, in dispatch order.
pub fn all_rules() -> Vec<RuleInfo> {
    let mut rules = Vec::new();
    rules.extend(truthy::rules());
    rules.extend(octal::rules());
    rules.extend(name_casing::rules());
    rules.extend(fqcn::rules());
    rules
}
