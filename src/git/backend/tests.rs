// vendor-sync: vendored submodule mirror synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{GitMutation, GitQuery, ShellBackend};
use crate::error::VendorError;
use std::path::Path;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn git(args: &[&str], cwd: &Path) -> String {
    ShellBackend::git_command(args, cwd).expect("git command failed")
}

/// Repository on `main` with one commit and a committer identity.
fn init_repo_with_commit(path: &Path) -> ShellBackend {
    git(&["init", "-q", "-b", "main"], path);
    git(&["config", "user.email", "test@example.com"], path);
    git(&["config", "user.name", "Test"], path);
    std::fs::write(path.join("README.md"), "# Test\n").expect("write README");
    git(&["add", "README.md"], path);
    git(&["commit", "-q", "-m", "Initial commit"], path);
    ShellBackend::new(path)
}

#[test]
fn test_remote_url_absent_then_added_then_rebound() {
    let temp = temp_dir();
    let repo = init_repo_with_commit(temp.path());

    assert_eq!(repo.remote_url("upstream").unwrap(), None);

    repo.add_remote("upstream", "https://example.com/a.git")
        .unwrap();
    assert_eq!(
        repo.remote_url("upstream").unwrap().as_deref(),
        Some("https://example.com/a.git")
    );

    repo.set_remote_url("upstream", "https://example.com/b.git")
        .unwrap();
    assert_eq!(
        repo.remote_url("upstream").unwrap().as_deref(),
        Some("https://example.com/b.git")
    );
}

#[test]
fn test_local_branches_and_dirty_state() {
    let temp = temp_dir();
    let repo = init_repo_with_commit(temp.path());
    git(&["branch", "feature"], temp.path());

    let mut names: Vec<_> = repo
        .local_branches()
        .unwrap()
        .into_iter()
        .map(|b| b.name)
        .collect();
    names.sort();
    assert_eq!(names, vec!["feature".to_string(), "main".to_string()]);

    assert!(!repo.has_uncommitted_changes().unwrap());
    std::fs::write(temp.path().join("new.txt"), "x").unwrap();
    assert!(repo.has_uncommitted_changes().unwrap());

    std::fs::remove_file(temp.path().join("new.txt")).unwrap();
    assert!(!repo.has_uncommitted_changes().unwrap());
    std::fs::write(temp.path().join("README.md"), "# Edited\n").unwrap();
    assert!(repo.has_uncommitted_changes().unwrap());
}

#[test]
fn test_fetch_and_remote_branches_from_local_remote() {
    let temp = temp_dir();
    let source_dir = temp.path().join("source");
    let wc_dir = temp.path().join("wc");
    std::fs::create_dir_all(&source_dir).unwrap();
    std::fs::create_dir_all(&wc_dir).unwrap();

    init_repo_with_commit(&source_dir);
    git(&["branch", "dev"], &source_dir);
    let wc = init_repo_with_commit(&wc_dir);

    wc.add_remote("upstream", source_dir.to_str().unwrap())
        .unwrap();
    wc.fetch_all().unwrap();

    let mut names: Vec<_> = wc
        .remote_branches("upstream")
        .unwrap()
        .into_iter()
        .filter(|b| !b.symbolic)
        .map(|b| b.name)
        .collect();
    names.sort();
    assert_eq!(names, vec!["dev".to_string(), "main".to_string()]);
}

#[test]
fn test_command_failure_is_typed() {
    let temp = temp_dir();
    let repo = init_repo_with_commit(temp.path());

    let err = repo.checkout("does-not-exist").unwrap_err();
    match err {
        VendorError::Git(boxed) => {
            assert!(boxed.to_string().contains("git checkout"));
        }
        other => panic!("expected git error, got {other:?}"),
    }
}

#[test]
fn test_push_nothing_is_noop() {
    let temp = temp_dir();
    let repo = init_repo_with_commit(temp.path());
    // No "origin" remote exists; an empty push must not reach git.
    repo.push("origin", &[], false).unwrap();
}
