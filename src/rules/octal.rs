//! `yaml[octal-values]`: quote octal-looking scalars.
//!
//! An unquoted `0644` may be read as an integer. The fix always wraps the
//! raw value token in double quotes so it is typed as a string.

use crate::rules::{rewrite_line, FixRule, Rewrite, RuleInfo};
use crate::source::SourceFile;

/// Fixer for `yaml[octal-values]`.
pub struct OctalValuesRule;

impl FixRule for OctalValuesRule {
    fn name(&self) -> &'static str {
        "octal_values"
    }

    fn check_names(&self) -> &'static [&'static str] {
        &["yaml[octal-values]"]
    }

    fn rewrite(&self, file: &SourceFile, index: usize) -> Rewrite {
        rewrite_line(file, index, |line| Ok(line.with_value(&format!("\"{}\"", line.value))))
    }
}

pub fn rules() -> Vec<RuleInfo> {
    vec![RuleInfo {
        check: "yaml[octal-values]",
        rule: "octal_values",
        description: "Wrap octal-looking values in double quotes so they load as strings",
        before: "    mode: 0644",
        after: "    mode: \"0644\"",
    }]
}
