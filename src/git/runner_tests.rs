use std::process::Command;

use tempfile::TempDir;

use super::*;

fn create_git_repo() -> TempDir {
    let dir = TempDir::new().unwrap();
    Command::new("git")
        .args(["init"])
        .current_dir(dir.path())
        .output()
        .expect("Failed to init git repo");
    dir
}

#[test]
fn git_output_success_requires_zero_code() {
    let ok = GitOutput {
        code: Some(0),
        ..GitOutput::default()
    };
    let failed = GitOutput {
        code: Some(128),
        ..GitOutput::default()
    };
    let signalled = GitOutput::default();

    assert!(ok.success());
    assert!(!failed.success());
    assert!(!signalled.success());
}

#[test]
fn git_cli_runs_inside_directory() {
    let dir = create_git_repo();
    let output = GitCli::in_dir(dir.path())
        .run(&["rev-parse", "--is-inside-work-tree"])
        .unwrap();

    assert!(output.success());
    assert_eq!(output.stdout.trim(), "true");
}

#[test]
fn git_cli_reports_failure_through_code() {
    let dir = create_git_repo();
    // No commits yet, so HEAD cannot be resolved.
    let output = GitCli::in_dir(dir.path())
        .run(&["rev-list", "--count", "HEAD"])
        .unwrap();

    assert!(!output.success());
    assert!(!output.stderr.is_empty());
}
