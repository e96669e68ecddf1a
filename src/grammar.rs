//! Key/value line grammar.
//!
//! Task files are never parsed as YAML. Instead each affected line is split
//! by a single permissive pattern into five fields:
//!
//! ```text
//!   - name: deploy app   # comment
//! └──┬──┘└─┬┘└┬┘└──┬──┘└─────┬─────┘
//!  prefix key div value   remainder
//! ```
//!
//! Concatenating the fields in order always reproduces the input byte for
//! byte, so a rule can swap exactly one field and leave the rest of the line
//! (indentation, list marker, inline comments, flow syntax) untouched.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static RE_KEY_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<prefix> *(?:- *)?)(?P<key>[\w-]+)(?P<divider>: *)(?P<value>\S*)(?P<remainder>.*)$")
        .unwrap()
});

/// A line decomposed into `prefix`, `key`, `divider`, `value`, `remainder`.
///
/// All fields borrow from the parsed line.
///
/// # Examples
///
/// ```
/// use oxidized_lint_fix::grammar::KeyValueLine;
///
/// let line = KeyValueLine::parse("    mode: 0644  # rw-r--r--").unwrap();
/// assert_eq!(line.key, "mode");
/// assert_eq!(line.value, "0644");
/// assert_eq!(line.remainder, "  # rw-r--r--");
/// assert_eq!(line.with_value("\"0644\""), "    mode: \"0644\"  # rw-r--r--");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyValueLine<'a> {
    /// Leading spaces and an optional `- ` list marker.
    pub prefix: &'a str,
    /// The mapping key (word characters and hyphens).
    pub key: &'a str,
    /// The colon and any spaces following it.
    pub divider: &'a str,
    /// First run of non-whitespace after the divider. May be empty.
    pub value: &'a str,
    /// Everything after the value.
    pub remainder: &'a str,
}

impl<'a> KeyValueLine<'a> {
    /// Splits `line` into its fields, or returns `None` when the line does
    /// not have a `key: value` shape.
    ///
    /// `line` must not contain its line terminator.
    pub fn parse(line: &'a str) -> Option<Self> {
        let caps = RE_KEY_VALUE.captures(line)?;
        let field = |name: &str| caps.name(name).map_or("", |m| m.as_str());
        Some(KeyValueLine {
            prefix: field("prefix"),
            key: field("key"),
            divider: field("divider"),
            value: field("value"),
            remainder: field("remainder"),
        })
    }

    /// Reassembles the line with `value` substituted.
    pub fn with_value(&self, value: &str) -> String {
        let mut out = String::with_capacity(self.len() + value.len());
        out.push_str(self.prefix);
        out.push_str(self.key);
        out.push_str(self.divider);
        out.push_str(value);
        out.push_str(self.remainder);
        out
    }

    /// Reassembles the line with `key` substituted.
    pub fn with_key(&self, key: &str) -> String {
        let mut out = String::with_capacity(self.len() + key.len());
        out.push_str(self.prefix);
        out.push_str(key);
        out.push_str(self.divider);
        out.push_str(self.value);
        out.push_str(self.remainder);
        out
    }

    fn len(&self) -> usize {
        self.prefix.len() + self.key.len() + self.divider.len() + self.value.len() + self.remainder.len()
    }
}

impl fmt::Display for KeyValueLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.prefix, self.key, self.divider, self.value, self.remainder
        )
    }
}
