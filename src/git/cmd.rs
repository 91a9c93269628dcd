// vendor-sync: vendored submodule mirror synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Superproject-level git commands.
//!
//! ```text
//! cmd.rs --> ShellBackend::git_command --> git (cwd = superproject root)
//!   submodule update --init / add / sync
//!   config --file .gitmodules
//! ```

use crate::error::{ProcessError, VendorResult};
use std::path::Path;

use super::backend::ShellBackend;

/// File holding the submodule registry.
pub const GITMODULES: &str = ".gitmodules";

/// Fail early if the `git` executable is not on `PATH`.
///
/// # Errors
///
/// Returns `ProcessError::ExecutableNotFound` if git cannot be located.
pub fn ensure_git_available() -> VendorResult<()> {
    which::which("git").map_err(|_| ProcessError::ExecutableNotFound {
        name: "git".to_string(),
    })?;
    Ok(())
}

/// Check out the given submodule paths (`git submodule update --init`).
///
/// Already initialized submodules are left as they are.
///
/// # Errors
///
/// Returns a `GitError` if the update fails (e.g. a clone fails).
pub fn init_submodules(root: &Path, paths: &[&str]) -> VendorResult<()> {
    if paths.is_empty() {
        return Ok(());
    }
    let mut args = vec!["submodule", "update", "--init", "--"];
    args.extend_from_slice(paths);
    ShellBackend::git_command(&args, root)?;
    Ok(())
}

/// Add a new submodule named `name` at `path`, cloned from `url`.
///
/// # Errors
///
/// Returns a `GitError` if the clone or registration fails.
pub fn add_submodule(root: &Path, name: &str, url: &str, path: &str) -> VendorResult<()> {
    ShellBackend::git_command(
        &["submodule", "add", "--quiet", "--name", name, "--", url, path],
        root,
    )?;
    Ok(())
}

/// Propagate `.gitmodules` URLs into the submodule's remote config.
///
/// # Errors
///
/// Returns a `GitError` if the sync fails.
pub fn sync_submodule(root: &Path, path: &str) -> VendorResult<()> {
    ShellBackend::git_command(&["submodule", "sync", "--quiet", "--", path], root)?;
    Ok(())
}

/// Read `.gitmodules` as `key=value` lines; empty if the file does not exist.
///
/// # Errors
///
/// Returns a `GitError` if the file exists but cannot be parsed by git.
pub fn read_gitmodules(root: &Path) -> VendorResult<String> {
    if !root.join(GITMODULES).exists() {
        return Ok(String::new());
    }
    ShellBackend::git_command(&["config", "--file", GITMODULES, "--list"], root)
}

/// Set `submodule.<name>.<key>` in `.gitmodules`.
///
/// # Errors
///
/// Returns a `GitError` if the value cannot be written.
pub fn set_gitmodules_value(root: &Path, name: &str, key: &str, value: &str) -> VendorResult<()> {
    let full_key = format!("submodule.{name}.{key}");
    ShellBackend::git_command(&["config", "--file", GITMODULES, &full_key, value], root)?;
    Ok(())
}
