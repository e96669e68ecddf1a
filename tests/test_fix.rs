use std::path::{Path, PathBuf};

use oxidized_lint_fix::config::Config;
use oxidized_lint_fix::diagnostic::{Buckets, Diagnostic};
use oxidized_lint_fix::fix::{dispatch, run_fix, write_back, FixOptions};
use oxidized_lint_fix::fqcn::FqcnTable;
use oxidized_lint_fix::outcome::{FixReport, OutcomeStatus, RunStatus, SkipReason};
use oxidized_lint_fix::source::Workspace;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const PLAYBOOK: &str = "\
- hosts: all
  become: yes
  tasks:
    - name: install nginx
      apt: name=nginx state=present
    - name: Write config
      copy:
        src: nginx.conf
        dest: /etc/nginx/nginx.conf
        mode: 0644
";

fn write_playbook(dir: &Path) -> PathBuf {
    let path = dir.join("site.yml");
    std::fs::write(&path, PLAYBOOK).unwrap();
    path
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

fn options() -> FixOptions {
    FixOptions::default()
}

fn table() -> FqcnTable {
    FqcnTable::from_names([
        "community.general.copy",
        "ansible.builtin.copy",
        "ansible.builtin.apt",
    ])
}

// ---------------------------------------------------------------------------
// Applying fixes
// ---------------------------------------------------------------------------

#[test]
fn fixes_every_supported_check() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_playbook(dir.path());
    let table = table();

    let diagnostics = vec![
        Diagnostic::new("yaml[truthy]", &path, 2),
        Diagnostic::new("name[casing]", &path, 4),
        Diagnostic::new("fqcn[action-core]", &path, 4),
        Diagnostic::new("fqcn[action-core]", &path, 6),
        Diagnostic::new("yaml[octal-values]", &path, 10),
    ];

    let report = run_fix(diagnostics, Some(&table), &Config::default(), &options());

    assert_eq!(
        read(&path),
        "\
- hosts: all
  become: true
  tasks:
    - name: Install nginx
      ansible.builtin.apt: name=nginx state=present
    - name: Write config
      ansible.builtin.copy:
        src: nginx.conf
        dest: /etc/nginx/nginx.conf
        mode: \"0644\"
"
    );
    assert_eq!(report.count_by_status(), (5, 0, 0));
    assert_eq!(report.status, RunStatus::Fixed);
    assert!(report.passed);
    assert_eq!(report.files_written, vec![path.canonicalize().unwrap()]);
}

#[test]
fn outcomes_follow_dispatch_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_playbook(dir.path());

    let diagnostics = vec![
        Diagnostic::new("yaml[octal-values]", &path, 10),
        Diagnostic::new("name[casing]", &path, 4),
        Diagnostic::new("yaml[truthy]", &path, 2),
    ];
    let report = run_fix(diagnostics, None, &Config::default(), &options());

    let checks: Vec<&str> = report.outcomes.iter().map(|o| o.check_name.as_str()).collect();
    assert_eq!(checks, vec!["yaml[truthy]", "yaml[octal-values]", "name[casing]"]);
}

#[test]
fn fqcn_outcome_records_edited_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_playbook(dir.path());
    let table = table();

    let report = run_fix(
        vec![Diagnostic::new("fqcn[action]", &path, 4)],
        Some(&table),
        &Config::default(),
        &options(),
    );

    match &report.outcomes[0].status {
        OutcomeStatus::Applied { line, before, after } => {
            assert_eq!(*line, 5);
            assert_eq!(before, "      apt: name=nginx state=present");
            assert_eq!(after, "      ansible.builtin.apt: name=nginx state=present");
        }
        other => panic!("expected applied, got {other:?}"),
    }
    assert_eq!(report.outcomes[0].line, 4);
}

#[test]
fn later_diagnostics_see_earlier_edits() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_playbook(dir.path());

    let diagnostics = vec![
        Diagnostic::new("yaml[octal-values]", &path, 10),
        Diagnostic::new("yaml[octal-values]", &path, 10),
    ];
    let report = run_fix(diagnostics, None, &Config::default(), &options());

    // The octal rule quotes unconditionally, so the second pass wraps again.
    assert!(read(&path).contains("mode: \"\"0644\"\"\n"));
    assert_eq!(report.count_by_status(), (2, 0, 0));
}

#[test]
fn repeated_truthy_fix_is_reported_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_playbook(dir.path());

    let diagnostics = vec![
        Diagnostic::new("yaml[truthy]", &path, 2),
        Diagnostic::new("yaml[truthy]", &path, 2),
    ];
    let report = run_fix(diagnostics, None, &Config::default(), &options());

    assert!(report.outcomes[0].is_applied());
    assert_eq!(
        report.outcomes[1].status,
        OutcomeStatus::Skipped {
            reason: SkipReason::Unchanged
        }
    );
}

#[test]
fn crlf_file_keeps_its_line_endings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crlf.yml");
    std::fs::write(&path, "- name: t\r\n  become: no\r\n").unwrap();

    run_fix(
        vec![Diagnostic::new("yaml[truthy]", &path, 2)],
        None,
        &Config::default(),
        &options(),
    );
    assert_eq!(read(&path), "- name: t\r\n  become: false\r\n");
}

// ---------------------------------------------------------------------------
// Skips
// ---------------------------------------------------------------------------

#[test]
fn unknown_check_mutates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_playbook(dir.path());

    let report = run_fix(
        vec![Diagnostic::new("unknown[rule]", &path, 2)],
        None,
        &Config::default(),
        &options(),
    );

    assert_eq!(read(&path), PLAYBOOK);
    assert_eq!(
        report.outcomes[0].status,
        OutcomeStatus::Skipped {
            reason: SkipReason::UnsupportedCheck
        }
    );
    assert_eq!(report.status, RunStatus::Partial);
    assert!(report.passed);
    assert!(report.files_written.is_empty());
}

#[test]
fn unknown_check_on_missing_file_is_not_an_error() {
    let report = run_fix(
        vec![Diagnostic::new("risky-shell-pipe", "does/not/exist.yml", 1)],
        None,
        &Config::default(),
        &options(),
    );
    assert!(report.outcomes[0].is_skipped());
}

#[test]
fn fqcn_without_table_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_playbook(dir.path());
    let empty = FqcnTable::default();

    for table in [None, Some(&empty)] {
        let report = run_fix(
            vec![Diagnostic::new("fqcn[action-core]", &path, 4)],
            table,
            &Config::default(),
            &options(),
        );
        assert_eq!(
            report.outcomes[0].status,
            OutcomeStatus::Skipped {
                reason: SkipReason::NoFqcnTable
            }
        );
    }
    assert_eq!(read(&path), PLAYBOOK);
}

#[test]
fn disabled_rule_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_playbook(dir.path());
    let mut config = Config::default();
    config.rules.truthy = false;

    let report = run_fix(
        vec![Diagnostic::new("yaml[truthy]", &path, 2)],
        None,
        &config,
        &options(),
    );
    assert_eq!(
        report.outcomes[0].status,
        OutcomeStatus::Skipped {
            reason: SkipReason::RuleDisabled
        }
    );
    assert_eq!(read(&path), PLAYBOOK);
}

#[test]
fn excluded_path_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_playbook(dir.path());
    let mut config = Config::default();
    config.paths.exclude = vec![PathBuf::from("site.yml")];

    let report = run_fix(
        vec![Diagnostic::new("yaml[truthy]", &path, 2)],
        None,
        &config,
        &options(),
    );
    assert_eq!(
        report.outcomes[0].status,
        OutcomeStatus::Skipped {
            reason: SkipReason::Excluded
        }
    );
    assert_eq!(read(&path), PLAYBOOK);
}

#[test]
fn strict_mode_fails_on_skips() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_playbook(dir.path());
    let mut config = Config::default();
    config.strict.enabled = true;

    let report = run_fix(
        vec![Diagnostic::new("yaml[truthy]", &path, 1)],
        None,
        &config,
        &options(),
    );
    assert!(matches!(
        report.outcomes[0].status,
        OutcomeStatus::Skipped {
            reason: SkipReason::UnrecognizedValue(_)
        }
    ));
    assert_eq!(report.status, RunStatus::Failed);
    assert!(!report.passed);
}

// ---------------------------------------------------------------------------
// Failures and dry runs
// ---------------------------------------------------------------------------

#[test]
fn missing_file_fails_only_its_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_playbook(dir.path());
    let missing = dir.path().join("missing.yml");

    let diagnostics = vec![
        Diagnostic::new("yaml[truthy]", &missing, 1),
        Diagnostic::new("yaml[truthy]", &path, 2),
    ];
    let report = run_fix(diagnostics, None, &Config::default(), &options());

    assert!(report.outcomes[0].is_failed());
    assert!(report.outcomes[1].is_applied());
    assert!(read(&path).contains("  become: true\n"));
    assert_eq!(report.status, RunStatus::Failed);
    assert!(!report.passed);
}

#[test]
fn different_spellings_of_one_file_share_edits() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("sub")).unwrap();
    let path = dir.path().join("a.yml");
    std::fs::write(&path, "become: yes\nenabled: no\n").unwrap();

    let diagnostics = vec![
        Diagnostic::new("yaml[truthy]", "a.yml", 1),
        Diagnostic::new("yaml[truthy]", &path, 2),
    ];
    let report = run_fix(
        diagnostics,
        None,
        &Config::default(),
        &FixOptions {
            root: Some(dir.path().join("sub").join("..")),
            dry_run: false,
        },
    );

    assert_eq!(report.count_by_status(), (2, 0, 0));
    assert_eq!(report.files_written, vec![path.canonicalize().unwrap()]);
    assert_eq!(read(&path), "become: true\nenabled: false\n");
}

#[cfg(unix)]
#[test]
fn symlinked_target_is_edited_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let real = write_playbook(dir.path());
    let link = dir.path().join("link.yml");
    std::os::unix::fs::symlink(&real, &link).unwrap();

    let report = run_fix(
        vec![Diagnostic::new("yaml[truthy]", &link, 2)],
        None,
        &Config::default(),
        &options(),
    );

    assert!(report.outcomes[0].is_applied());
    assert!(std::fs::symlink_metadata(&link)
        .unwrap()
        .file_type()
        .is_symlink());
    assert!(read(&real).contains("  become: true\n"));
}

#[test]
fn write_failure_fails_applied_outcomes_for_that_file() {
    let dir = tempfile::tempdir().unwrap();
    let doomed_dir = dir.path().join("doomed");
    std::fs::create_dir(&doomed_dir).unwrap();
    let doomed = write_playbook(&doomed_dir);
    let kept = dir.path().join("kept.yml");
    std::fs::write(&kept, "become: yes\n").unwrap();

    let buckets = Buckets::from_diagnostics(vec![
        Diagnostic::new("yaml[truthy]", &doomed, 2),
        Diagnostic::new("yaml[truthy]", &kept, 1),
    ]);
    let mut workspace = Workspace::new(None);
    let mut outcomes = dispatch(&buckets, None, &Config::default(), &mut workspace);
    assert!(outcomes.iter().all(|o| o.is_applied()));

    // The directory vanishes between reading and writing back.
    std::fs::remove_dir_all(&doomed_dir).unwrap();
    let written = write_back(&mut workspace, &mut outcomes);
    let report = FixReport::from_outcomes(outcomes, written, false, false);

    assert!(report.outcomes[0].is_failed());
    assert!(report.outcomes[1].is_applied());
    assert_eq!(report.files_written, vec![kept.canonicalize().unwrap()]);
    assert_eq!(read(&kept), "become: true\n");
    assert_eq!(report.status, RunStatus::Failed);
    assert!(!report.passed);
}

#[cfg(unix)]
#[test]
fn read_only_directory_fails_the_run() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let locked = dir.path().join("locked");
    std::fs::create_dir(&locked).unwrap();
    let path = write_playbook(&locked);
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o555)).unwrap();

    // Privileged users can write regardless of mode bits.
    if tempfile::NamedTempFile::new_in(&locked).is_ok() {
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let report = run_fix(
        vec![Diagnostic::new("yaml[truthy]", &path, 2)],
        None,
        &Config::default(),
        &options(),
    );
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

    assert!(report.outcomes[0].is_failed());
    assert!(report.files_written.is_empty());
    assert_eq!(read(&path), PLAYBOOK);
    assert_eq!(report.status, RunStatus::Failed);
}

#[test]
fn dry_run_reports_but_does_not_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_playbook(dir.path());

    let report = run_fix(
        vec![Diagnostic::new("yaml[truthy]", &path, 2)],
        None,
        &Config::default(),
        &FixOptions {
            root: None,
            dry_run: true,
        },
    );

    assert_eq!(read(&path), PLAYBOOK);
    assert!(report.dry_run);
    assert!(report.outcomes[0].is_applied());
    assert!(report.files_written.is_empty());
}

#[test]
fn relative_paths_resolve_against_root() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_playbook(dir.path());

    let report = run_fix(
        vec![Diagnostic::new("yaml[truthy]", "site.yml", 2)],
        None,
        &Config::default(),
        &FixOptions {
            root: Some(dir.path().to_path_buf()),
            dry_run: false,
        },
    );

    assert!(report.outcomes[0].is_applied());
    assert_eq!(report.outcomes[0].file, PathBuf::from("site.yml"));
    assert!(read(&path).contains("  become: true\n"));
}

#[test]
fn empty_report_is_fixed() {
    let report = run_fix(Vec::new(), None, &Config::default(), &options());
    assert!(report.outcomes.is_empty());
    assert_eq!(report.status, RunStatus::Fixed);
    assert!(report.passed);
}
