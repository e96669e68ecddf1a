use clap::{Parser, Subcommand};
use oxidized_lint_fix::output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "oxidized-lint-fix",
    version,
    about = "Automatically fix ansible-lint findings in place"
)]
pub struct Cli {
    /// Log filter (e.g. "warn", "debug", "oxidized_lint_fix=trace")
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply fixes from an ansible-lint codeclimate report
    Fix {
        /// Report file produced by `ansible-lint -f codeclimate` (stdin if omitted or "-")
        report: Option<PathBuf>,

        /// File listing fully-qualified collection names, one per line
        #[arg(long)]
        fqcn_file: Option<PathBuf>,

        /// Directory relative paths in the report are resolved against
        #[arg(long)]
        root: Option<PathBuf>,

        /// Report the fixes without modifying any file
        #[arg(long)]
        dry_run: bool,

        /// Output format
        #[arg(long, short, default_value = "pretty", value_enum)]
        format: OutputFormat,

        /// Write output to file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Treat diagnostics that could not be fixed as failures
        #[arg(long)]
        strict: bool,

        /// Custom config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List every check that can be fixed
    ListRules,

    /// Show what the fix for a check does
    Explain {
        /// Check label (e.g., "yaml[truthy]")
        check: String,
    },
}
