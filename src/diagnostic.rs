//! Lint diagnostics and check-type bucketing.
//!
//! Diagnostics are read from ansible-lint's codeclimate JSON output
//! (`ansible-lint -f codeclimate`). Only the fields the fixer needs are
//! kept; everything else in a record is ignored.
//!
//! ```json
//! [
//!   {
//!     "check_name": "yaml[truthy]",
//!     "location": { "path": "roles/web/tasks/main.yml", "lines": { "begin": 12 } }
//!   }
//! ]
//! ```

use crate::error::FixError;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};

/// A single lint finding pointing at a file and line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Check-type label, e.g. `yaml[truthy]`.
    pub check_name: String,
    /// File the finding refers to, as reported by the linter.
    pub path: PathBuf,
    /// 1-based line the finding starts on.
    pub line_begin: usize,
}

impl Diagnostic {
    pub fn new(check_name: &str, path: impl Into<PathBuf>, line_begin: usize) -> Self {
        Diagnostic {
            check_name: check_name.to_string(),
            path: path.into(),
            line_begin,
        }
    }

    /// 0-based index of the referenced line.
    pub fn line_index(&self) -> usize {
        self.line_begin.saturating_sub(1)
    }
}

#[derive(Debug, serde::Deserialize)]
struct RawDiagnostic {
    check_name: String,
    location: RawLocation,
}

#[derive(Debug, serde::Deserialize)]
struct RawLocation {
    path: PathBuf,
    lines: Option<RawLines>,
    positions: Option<RawPositions>,
}

#[derive(Debug, serde::Deserialize)]
struct RawLines {
    begin: usize,
}

#[derive(Debug, serde::Deserialize)]
struct RawPositions {
    begin: RawPosition,
}

#[derive(Debug, serde::Deserialize)]
struct RawPosition {
    line: usize,
}

impl TryFrom<RawDiagnostic> for Diagnostic {
    type Error = FixError;

    fn try_from(raw: RawDiagnostic) -> Result<Self, Self::Error> {
        let line_begin = raw
            .location
            .lines
            .map(|l| l.begin)
            .or(raw.location.positions.map(|p| p.begin.line))
            .ok_or_else(|| {
                FixError::MalformedRecord(format!(
                    "{} in {}: no begin line",
                    raw.check_name,
                    raw.location.path.display()
                ))
            })?;

        if line_begin == 0 {
            return Err(FixError::MalformedRecord(format!(
                "{} in {}: line numbers are 1-based",
                raw.check_name,
                raw.location.path.display()
            )));
        }

        Ok(Diagnostic {
            check_name: raw.check_name,
            path: raw.location.path,
            line_begin,
        })
    }
}

/// Parses a codeclimate JSON report into diagnostics, preserving order.
///
/// # Errors
///
/// Returns [`FixError::Report`] when the text is not a JSON array of records
/// with `check_name` and `location.path`, and [`FixError::MalformedRecord`]
/// when a record has no usable begin line.
pub fn parse_report(json: &str) -> Result<Vec<Diagnostic>, FixError> {
    let raw: Vec<RawDiagnostic> = serde_json::from_str(json)?;
    raw.into_iter().map(Diagnostic::try_from).collect()
}

/// Reads a report from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_report(path: Option<&Path>) -> Result<Vec<Diagnostic>, FixError> {
    let content = match path {
        Some(p) if p != Path::new("-") => {
            std::fs::read_to_string(p).map_err(|e| FixError::io(p, e))?
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| FixError::io("<stdin>", e))?;
            buf
        }
    };
    parse_report(&content)
}

/// Diagnostics grouped by check-type label.
///
/// Within a bucket diagnostics keep their report order. Labels iterate in
/// sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buckets {
    by_check: BTreeMap<String, Vec<Diagnostic>>,
}

impl Buckets {
    /// Groups `diagnostics` by their check name.
    ///
    /// # Examples
    ///
    /// ```
    /// use oxidized_lint_fix::diagnostic::{Buckets, Diagnostic};
    ///
    /// let buckets = Buckets::from_diagnostics(vec![
    ///     Diagnostic::new("A", "a.yml", 1),
    ///     Diagnostic::new("B", "b.yml", 2),
    ///     Diagnostic::new("A", "a.yml", 3),
    /// ]);
    /// assert_eq!(buckets.get("A").len(), 2);
    /// assert_eq!(buckets.get("B")[0].line_begin, 2);
    /// assert!(buckets.get("C").is_empty());
    /// ```
    pub fn from_diagnostics(diagnostics: impl IntoIterator<Item = Diagnostic>) -> Self {
        let mut by_check: BTreeMap<String, Vec<Diagnostic>> = BTreeMap::new();
        for diagnostic in diagnostics {
            by_check
                .entry(diagnostic.check_name.clone())
                .or_default()
                .push(diagnostic);
        }
        Buckets { by_check }
    }

    /// Diagnostics carrying `check_name`; empty when there are none.
    pub fn get(&self, check_name: &str) -> &[Diagnostic] {
        self.by_check.get(check_name).map_or(&[], Vec::as_slice)
    }

    /// All check labels present, sorted.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.by_check.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_check.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_check.is_empty()
    }
}
