// vendor-sync: vendored submodule mirror synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for superproject-level git commands and queries.
//!
//! Tests the git module with real temporary repositories.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use vendor_sync::git::backend::ShellBackend;
use vendor_sync::git::cmd::{
    GITMODULES, ensure_git_available, init_submodules, read_gitmodules, set_gitmodules_value,
};
use vendor_sync::git::query::{current_branch, has_uncommitted_changes, is_initialized};
use vendor_sync::registry::Registry;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn git(args: &[&str], cwd: &Path) -> String {
    ShellBackend::git_command(args, cwd).expect("git command failed")
}

fn init_repo_with_commit(path: &Path) {
    git(&["init", "-q", "-b", "main"], path);
    git(&["config", "user.email", "test@example.com"], path);
    git(&["config", "user.name", "Test"], path);
    git(&["config", "commit.gpgsign", "false"], path);
    fs::write(path.join("README.md"), "# Test\n").expect("write README");
    git(&["add", "README.md"], path);
    git(&["commit", "-q", "-m", "Initial commit"], path);
}

#[test]
fn test_git_is_available() {
    assert!(ensure_git_available().is_ok());
}

#[test]
fn test_init_submodules_without_paths_is_noop() {
    let temp = temp_dir();
    // not even a repository; nothing should be run
    assert!(init_submodules(temp.path(), &[]).is_ok());
}

#[test]
fn test_gitmodules_write_then_read() {
    let temp = temp_dir();
    git(&["init", "-q", "-b", "main"], temp.path());
    assert_eq!(read_gitmodules(temp.path()).unwrap(), "");

    set_gitmodules_value(temp.path(), "zlib", "path", "vendor/zlib").unwrap();
    set_gitmodules_value(
        temp.path(),
        "zlib",
        "url",
        "https://github.com/acme/zlib.git",
    )
    .unwrap();
    assert!(temp.path().join(GITMODULES).exists());

    let listing = read_gitmodules(temp.path()).unwrap();
    assert!(listing.contains("submodule.zlib.path=vendor/zlib"));
    assert!(listing.contains("submodule.zlib.url=https://github.com/acme/zlib.git"));

    Registry::register_upstream(temp.path(), "zlib", "https://github.com/madler/zlib.git")
        .unwrap();
    let registry = Registry::load(temp.path()).unwrap();
    let entry = registry.get("zlib").unwrap();
    assert_eq!(entry.workdir(temp.path()), temp.path().join("vendor/zlib"));
    assert_eq!(
        entry.upstream_url.as_deref(),
        Some("https://github.com/madler/zlib.git")
    );
}

#[test]
fn test_unreadable_gitmodules_is_error() {
    let temp = temp_dir();
    fs::write(temp.path().join(GITMODULES), "[submodule \"x\"\n\tpath = x\n").unwrap();
    assert!(read_gitmodules(temp.path()).is_err());
}

#[test]
fn test_queries_track_working_copy_state() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());

    assert!(is_initialized(temp.path()));
    assert!(!has_uncommitted_changes(temp.path()).unwrap());
    assert_eq!(current_branch(temp.path()).unwrap(), Some("main".to_string()));

    fs::write(temp.path().join("README.md"), "# Edited\n").unwrap();
    assert!(has_uncommitted_changes(temp.path()).unwrap());

    git(&["stash", "-q"], temp.path());
    git(&["checkout", "-q", "--detach"], temp.path());
    assert_eq!(current_branch(temp.path()).unwrap(), None);
}
