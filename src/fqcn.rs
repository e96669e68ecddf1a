//! Short-name to FQCN resolution.
//!
//! An [`FqcnTable`] maps a module's short name (`copy`) to every
//! fully-qualified collection name it is known under
//! (`ansible.builtin.copy`, `community.general.copy`, …) and picks one by a
//! fixed collection preference.
//!
//! The table is usually built from the output of:
//!
//! ```text
//! ansible-doc --list | awk '{print $1}'
//! ```
//!
//! [`FqcnTable::load`] accepts that output directly, with or without the
//! description column.

use crate::error::FixError;
use std::collections::HashMap;
use std::path::Path;

/// Collections consulted first, in order, when a short name is ambiguous.
pub const PREFERRED_COLLECTIONS: &[&str] = &["ansible.builtin", "ansible.posix", "community.general"];

/// Read-only mapping from short module names to fully-qualified names.
#[derive(Debug, Clone, Default)]
pub struct FqcnTable {
    /// short name -> [(collection, fqcn)], in first-insertion order.
    entries: HashMap<String, Vec<(String, String)>>,
}

impl FqcnTable {
    /// Builds a table from fully-qualified dotted names.
    ///
    /// A later name with the same short name and collection replaces the
    /// earlier one in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use oxidized_lint_fix::fqcn::FqcnTable;
    ///
    /// let table = FqcnTable::from_names(["community.general.copy", "ansible.builtin.copy"]);
    /// assert_eq!(table.resolve("copy"), Some("ansible.builtin.copy"));
    /// assert_eq!(table.resolve("nope"), None);
    /// ```
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = FqcnTable::default();
        for name in names {
            table.insert(name.as_ref());
        }
        table
    }

    /// Loads a table from a text file with one FQCN per line.
    ///
    /// Only the first whitespace-delimited token of each line is used.
    /// Blank lines, `#` comments, and tokens with fewer than three dotted
    /// segments are ignored.
    pub fn load(path: &Path) -> Result<Self, FixError> {
        let content = std::fs::read_to_string(path).map_err(|e| FixError::io(path, e))?;
        let names = content
            .lines()
            .filter_map(|line| line.split_whitespace().next())
            .filter(|token| !token.starts_with('#'))
            .filter(|token| token.split('.').count() >= 3);
        let table = FqcnTable::from_names(names);
        tracing::debug!(
            path = %path.display(),
            short_names = table.len(),
            "loaded FQCN table"
        );
        Ok(table)
    }

    fn insert(&mut self, fqcn: &str) {
        let fqcn = fqcn.trim_end();
        let short = fqcn.rsplit('.').next().unwrap_or(fqcn);
        let collection = fqcn.splitn(3, '.').take(2).collect::<Vec<_>>().join(".");

        let group = self.entries.entry(short.to_string()).or_default();
        match group.iter_mut().find(|(c, _)| *c == collection) {
            Some(slot) => slot.1 = fqcn.to_string(),
            None => group.push((collection, fqcn.to_string())),
        }
    }

    /// Resolves a short name to its preferred fully-qualified form.
    ///
    /// Candidates under [`PREFERRED_COLLECTIONS`] win in that order;
    /// otherwise the first collection the name was seen under is used.
    pub fn resolve(&self, short: &str) -> Option<&str> {
        let group = self.entries.get(short)?;
        PREFERRED_COLLECTIONS
            .iter()
            .find_map(|preferred| {
                group
                    .iter()
                    .find(|(collection, _)| collection.as_str() == *preferred)
            })
            .or_else(|| group.first())
            .map(|(_, fqcn)| fqcn.as_str())
    }

    /// Number of distinct short names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
