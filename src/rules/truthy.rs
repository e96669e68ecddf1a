//! `yaml[truthy]`: canonical boolean literals.
//!
//! YAML 1.1 accepts `yes`/`no` (in any case) as booleans; yamllint only
//! allows `true`/`false`. The raw value is matched case-insensitively and
//! replaced with the lowercase literal. Anything else is left alone.

use crate::outcome::SkipReason;
use crate::rules::{rewrite_line, FixRule, Rewrite, RuleInfo};
use crate::source::SourceFile;

/// Fixer for `yaml[truthy]`.
pub struct TruthyRule;

/// Canonical literal for a truthy value, or `None` if it is not one.
///
/// ```
/// use oxidized_lint_fix::rules::truthy::canonical_truthy;
///
/// assert_eq!(canonical_truthy("Yes"), Some("true"));
/// assert_eq!(canonical_truthy("NO"), Some("false"));
/// assert_eq!(canonical_truthy("maybe"), None);
/// ```
pub fn canonical_truthy(value: &str) -> Option<&'static str> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" => Some("true"),
        "false" | "no" => Some("false"),
        _ => None,
    }
}

impl FixRule for TruthyRule {
    fn name(&self) -> &'static str {
        "truthy"
    }

    fn check_names(&self) -> &'static [&'static str] {
        &["yaml[truthy]"]
    }

    fn rewrite(&self, file: &SourceFile, index: usize) -> Rewrite {
        rewrite_line(file, index, |line| {
            canonical_truthy(line.value)
                .map(|canonical| line.with_value(canonical))
                .ok_or_else(|| SkipReason::UnrecognizedValue(line.value.to_string()))
        })
    }
}

pub fn rules() -> Vec<RuleInfo> {
    vec![RuleInfo {
        check: "yaml[truthy]",
        rule: "truthy",
        description: "Replace yes/no/True/False style booleans with lowercase true/false",
        before: "    become: yes",
        after: "    become: true",
    }]
}
