//! Configuration loading and management.
//!
//! The default configuration file is `oxidized-lint-fix.toml` in the current
//! working directory. Every field has a default, so the file can be omitted
//! entirely.
//!
//! ```toml
//! [rules]
//! fqcn = false          # never rename modules
//!
//! [fqcn]
//! file = "fqcns.txt"    # output of `ansible-doc --list`
//!
//! [strict]
//! enabled = true        # unfixed diagnostics fail the run
//!
//! [paths]
//! exclude = ["roles/vendored"]
//! ```

use crate::error::FixError;
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "oxidized-lint-fix.toml";

/// Main configuration for a fix run.
///
/// # Examples
///
/// ```rust,no_run
/// use oxidized_lint_fix::config::Config;
///
/// // Load from the default location or fall back to built-in defaults.
/// let config = Config::load(None).unwrap();
/// ```
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Per-rule on/off toggles.
    pub rules: RulesConfig,
    /// FQCN resolution settings.
    pub fqcn: FqcnConfig,
    /// When strict mode is enabled, skipped diagnostics fail the run.
    pub strict: StrictConfig,
    /// Paths the fixer must never modify.
    pub paths: PathsConfig,
}

/// Per-rule on/off toggles. Every rule defaults to **enabled**.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct RulesConfig {
    /// `yaml[truthy]`
    pub truthy: bool,
    /// `yaml[octal-values]`
    pub octal_values: bool,
    /// `name[casing]`
    pub name_casing: bool,
    /// `fqcn[action-core]` and `fqcn[action]`
    pub fqcn: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            truthy: true,
            octal_values: true,
            name_casing: true,
            fqcn: true,
        }
    }
}

#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct FqcnConfig {
    /// FQCN list used when `--fqcn-file` is not given.
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct StrictConfig {
    /// Set to `true` to treat skipped diagnostics as failures.
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Files or directories to leave untouched. Matched component-wise
    /// against the path and its ancestors, so `"roles/vendored"` covers
    /// every file below it and `"main.yml"` does not match `domain.yml`.
    pub exclude: Vec<PathBuf>,
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. If `path` is `None`, try `oxidized-lint-fix.toml` in the current directory.
    /// 3. If that file does not exist either, return [`Config::default()`].
    ///
    /// # Errors
    ///
    /// Returns [`FixError::Config`] when the explicit path does not exist,
    /// the file cannot be read, or the TOML fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Config, FixError> {
        let config_path = if let Some(p) = path {
            if p.exists() {
                Some(p.to_path_buf())
            } else {
                return Err(FixError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
        } else {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            default_path.exists().then(|| default_path.to_path_buf())
        };

        match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(&path).map_err(|e| {
                    FixError::Config(format!("Failed to read config {}: {}", path.display(), e))
                })?;
                let config: Config = toml::from_str(&content).map_err(|e| {
                    FixError::Config(format!("Failed to parse config {}: {}", path.display(), e))
                })?;
                tracing::debug!(path = %path.display(), "loaded config");
                Ok(config)
            }
            None => Ok(Config::default()),
        }
    }

    /// Returns `true` if the named rule is enabled.
    ///
    /// Unknown rule names are considered enabled.
    ///
    /// ```
    /// use oxidized_lint_fix::config::Config;
    ///
    /// let config = Config::default();
    /// assert!(config.is_rule_enabled("truthy"));
    /// assert!(config.is_rule_enabled("unknown_rule"));
    /// ```
    pub fn is_rule_enabled(&self, name: &str) -> bool {
        match name {
            "truthy" => self.rules.truthy,
            "octal_values" => self.rules.octal_values,
            "name_casing" => self.rules.name_casing,
            "fqcn" => self.rules.fqcn,
            _ => true,
        }
    }

    /// Returns `true` if `path` matches an entry in `[paths] exclude`.
    pub fn is_excluded(&self, path: &Path) -> bool {
        self.paths
            .exclude
            .iter()
            .filter(|entry| !entry.as_os_str().is_empty())
            .any(|entry| path.ancestors().any(|a| a.ends_with(entry)))
    }
}
