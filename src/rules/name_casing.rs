//! `name[casing]`: task and play names start with an uppercase letter.
//!
//! Only the first token of the value is touched: its first character is
//! upper-cased and the rest lower-cased. A leading quote is kept in place
//! so `"deploy app"` becomes `"Deploy app"`.

use crate::outcome::SkipReason;
use crate::rules::{rewrite_line, FixRule, Rewrite, RuleInfo};
use crate::source::SourceFile;

/// Fixer for `name[casing]`.
pub struct NameCasingRule;

/// Upper-cases the first character of `word` and lower-cases the rest.
///
/// ```
/// use oxidized_lint_fix::rules::name_casing::capitalize;
///
/// assert_eq!(capitalize("deploy"), "Deploy");
/// assert_eq!(capitalize("iNSTALL"), "Install");
/// assert_eq!(capitalize("'restart"), "'Restart");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(word: &str) -> String {
    let (quote, body) = match word.chars().next() {
        Some(q @ ('"' | '\'')) => word.split_at(q.len_utf8()),
        _ => ("", word),
    };
    let mut chars = body.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push_str(quote);
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => word.to_string(),
    }
}

impl FixRule for NameCasingRule {
    fn name(&self) -> &'static str {
        "name_casing"
    }

    fn check_names(&self) -> &'static [&'static str] {
        &["name[casing]"]
    }

    fn rewrite(&self, file: &SourceFile, index: usize) -> Rewrite {
        rewrite_line(file, index, |line| {
            if line.value.is_empty() {
                return Err(SkipReason::EmptyValue);
            }
            Ok(line.with_value(&capitalize(line.value)))
        })
    }
}

pub fn rules() -> Vec<RuleInfo> {
    vec![RuleInfo {
        check: "name[casing]",
        rule: "name_casing",
        description: "Capitalize the first word of a task or play name (after any leading quote)",
        before: "  - name: deploy app",
        after: "  - name: Deploy app",
    }]
}
