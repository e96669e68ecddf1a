//! # oxidized-lint-fix
//!
//! Automatic remediation for [ansible-lint] findings.
//!
//! `oxidized-lint-fix` reads an ansible-lint codeclimate report and rewrites
//! the offending lines of the referenced task files in place. Files are
//! never parsed as YAML: each affected line is split by a permissive
//! `key: value` grammar, one field is replaced, and every other byte
//! (indentation, list markers, comments, line endings) is kept.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use oxidized_lint_fix::{config::Config, diagnostic, fix, fqcn::FqcnTable, output};
//! use std::path::Path;
//!
//! let config = Config::load(None).expect("failed to load config");
//! let table = FqcnTable::load(Path::new("fqcns.txt")).ok();
//! let diagnostics = diagnostic::read_report(Some(Path::new("lint.json"))).unwrap();
//!
//! let report = fix::run_fix(diagnostics, table.as_ref(), &config, &fix::FixOptions::default());
//! print!("{}", output::format_report(&report, &output::OutputFormat::Pretty));
//! ```
//!
//! ## Architecture
//!
//! 1. **[`diagnostic`]** — parse the report and bucket findings by check type.
//! 2. **[`grammar`]** — split a line into prefix, key, divider, value, remainder.
//! 3. **[`rules`]** — one [`rules::FixRule`] per fixable check.
//! 4. **[`fqcn`]** — short module name to FQCN resolution.
//! 5. **[`source`]** — per-file line buffers and atomic write-back.
//! 6. **[`fix`]** — dispatch buckets to rules and build the [`outcome::FixReport`].
//! 7. **[`output`]** — format reports as pretty text, JSON, or SARIF.
//!
//! ## Fixable checks
//!
//! | Check | Fix |
//! |-------|-----|
//! | `yaml[truthy]` | `yes`/`no` → `true`/`false` |
//! | `yaml[octal-values]` | `0644` → `"0644"` |
//! | `name[casing]` | capitalize the first word |
//! | `fqcn[action-core]`, `fqcn[action]` | short module name → FQCN |
//!
//! [ansible-lint]: https://ansible.readthedocs.io/projects/lint/

pub mod config;
pub mod diagnostic;
pub mod error;
pub mod fix;
pub mod fqcn;
pub mod grammar;
pub mod outcome;
pub mod output;
pub mod rules;
pub mod source;
