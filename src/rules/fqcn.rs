//! `fqcn[action-core]` / `fqcn[action]`: fully-qualified module names.
//!
//! ansible-lint reports these findings on the first line of the task, which
//! is often its `name:` field rather than the action key. When the reported
//! line's key is `name`, the action is assumed to be on the next line.
//!
//! The key is replaced with the FQCN resolved by an [`FqcnTable`]; the
//! divider, value, and any trailing content are kept as-is.

use crate::fqcn::FqcnTable;
use crate::outcome::SkipReason;
use crate::rules::{rewrite_line, FixRule, Rewrite, RuleInfo};
use crate::source::SourceFile;

/// Fixer for the `fqcn[...]` checks, backed by a resolution table.
pub struct FqcnRule<'a> {
    table: &'a FqcnTable,
}

impl<'a> FqcnRule<'a> {
    pub fn new(table: &'a FqcnTable) -> Self {
        FqcnRule { table }
    }
}

impl FixRule for FqcnRule<'_> {
    fn name(&self) -> &'static str {
        "fqcn"
    }

    fn check_names(&self) -> &'static [&'static str] {
        &["fqcn[action-core]", "fqcn[action]"]
    }

    fn rewrite(&self, file: &SourceFile, index: usize) -> Rewrite {
        let index = match crate::rules::parse_line(file, index) {
            Ok(line) if line.key == "name" => index + 1,
            _ => index,
        };
        rewrite_line(file, index, |line| {
            self.table
                .resolve(line.key)
                .map(|fqcn| line.with_key(fqcn))
                .ok_or_else(|| SkipReason::ResolutionMiss(line.key.to_string()))
        })
    }
}

pub fn rules() -> Vec<RuleInfo> {
    vec![
        RuleInfo {
            check: "fqcn[action-core]",
            rule: "fqcn",
            description: "Replace a builtin module's short name with its ansible.builtin FQCN (needs --fqcn-file)",
            before: "    copy: src=a dest=b",
            after: "    ansible.builtin.copy: src=a dest=b",
        },
        RuleInfo {
            check: "fqcn[action]",
            rule: "fqcn",
            description: "Replace a collection module's short name with its FQCN (needs --fqcn-file)",
            before: "    sysctl: name=vm.swappiness value=10",
            after: "    ansible.posix.sysctl: name=vm.swappiness value=10",
        },
    ]
}
