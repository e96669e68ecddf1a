mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use oxidized_lint_fix::{config, diagnostic, fix, fqcn::FqcnTable, output, rules};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Fix {
            report,
            fqcn_file,
            root,
            dry_run,
            format,
            output: output_path,
            strict,
            config: config_path,
        } => {
            if let Some(ref p) = report {
                if p.as_os_str() != "-" && !p.exists() {
                    eprintln!("Error: report does not exist: {}", p.display());
                    std::process::exit(2);
                }
            }

            let mut config = config::Config::load(config_path.as_deref()).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(2);
            });

            if strict {
                config.strict.enabled = true;
            }

            let table = fqcn_file
                .or_else(|| config.fqcn.file.clone())
                .map(|path| {
                    FqcnTable::load(&path).unwrap_or_else(|e| {
                        eprintln!("Error: failed to load FQCN list {e}");
                        std::process::exit(2);
                    })
                });

            let diagnostics = diagnostic::read_report(report.as_deref()).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(2);
            });

            let options = fix::FixOptions { root, dry_run };
            let report = fix::run_fix(diagnostics, table.as_ref(), &config, &options);
            let formatted = output::format_report(&report, &format);

            if let Some(out_path) = output_path {
                std::fs::write(&out_path, &formatted).unwrap_or_else(|e| {
                    eprintln!("Error writing output: {e}");
                    std::process::exit(2);
                });
                eprintln!("Output written to {}", out_path.display());
            } else {
                print!("{formatted}");
            }

            std::process::exit(if report.passed { 0 } else { 1 });
        }

        Commands::ListRules => {
            let rules = rules::all_rules();
            println!("{}", "Fixable Checks".bold().underline());
            println!();

            for rule in &rules {
                println!(
                    "  {check:<22} [{name}] {description}",
                    check = rule.check.bold(),
                    name = rule.rule.dimmed(),
                    description = rule.description,
                );
            }

            println!();
            println!("  Total: {} checks", rules.len());
        }

        Commands::Explain { check } => {
            let rules = rules::all_rules();
            match rules.iter().find(|r| r.check == check) {
                Some(rule) => {
                    println!("{}", rule.check.bold());
                    println!();
                    println!("  Rule:         {}", rule.rule);
                    println!("  Description:  {}", rule.description);
                    println!("  Before:       {}", rule.before.red());
                    println!("  After:        {}", rule.after.green());
                }
                None => {
                    eprintln!("Unknown check: {check}");
                    eprintln!("Use 'oxidized-lint-fix list-rules' to see all fixable checks.");
                    std::process::exit(2);
                }
            }
        }
    }
}
