// vendor-sync: vendored submodule mirror synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git query operations using gix.
//!
//! ```text
//! query.rs --> GixBackend --> .git/ (no subprocess)
//! ```
//!
//! Used for cheap status reporting (`list`) where spawning git per entry
//! would dominate the runtime.

use crate::error::{GitError, GixError, VendorResult};
use std::path::Path;

/// Pure Rust read-only git backend.
pub struct GixBackend;

impl GixBackend {
    /// Whether `path` is inside a git work tree.
    #[must_use]
    pub fn is_git_repo(path: &Path) -> bool {
        gix::discover(path).is_ok()
    }

    /// Current branch name (None if HEAD is detached).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or head resolution fails.
    pub fn current_branch(path: &Path) -> VendorResult<Option<String>> {
        let repo =
            gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;
        let head = repo
            .head_name()
            .map_err(|e| GitError::Gix(GixError::Head(e)))?;
        Ok(head.map(|name| name.shorten().to_string()))
    }

    /// Check for uncommitted changes (staged, unstaged, or untracked files).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or status check fails.
    pub fn has_uncommitted_changes(path: &Path) -> VendorResult<bool> {
        use gix::status::UntrackedFiles;

        let repo =
            gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;
        if repo.workdir().is_none() {
            return Err(GitError::Gix(GixError::BareRepository).into());
        }

        let has_changes = repo
            .status(gix::progress::Discard)
            .map_err(|_| GitError::CommandFailed {
                command: "status".to_string(),
                message: "failed to prepare status check".to_string(),
            })?
            .untracked_files(UntrackedFiles::Files)
            .into_iter(None)
            .map_err(|_| GitError::CommandFailed {
                command: "status".to_string(),
                message: "failed to check repository status".to_string(),
            })?
            .next()
            .is_some();

        Ok(has_changes)
    }
}

/// Whether the working copy at `path` has been checked out.
///
/// A submodule that was never initialized is an empty directory inside the
/// superproject, so `gix::discover` would find the superproject instead; the
/// presence of `.git` (directory or gitlink file) is the reliable signal.
#[must_use]
pub fn is_initialized(path: &Path) -> bool {
    path.join(".git").exists()
}

#[must_use]
pub fn is_git_repo(path: &Path) -> bool {
    GixBackend::is_git_repo(path)
}

/// Get current branch name (None if HEAD is detached).
///
/// # Errors
///
/// Returns a `GitError` if repository discovery or head resolution fails.
pub fn current_branch(path: &Path) -> VendorResult<Option<String>> {
    GixBackend::current_branch(path)
}

/// Check for uncommitted changes.
///
/// # Errors
///
/// Returns a `GitError` if repository discovery or status check fails.
pub fn has_uncommitted_changes(path: &Path) -> VendorResult<bool> {
    GixBackend::has_uncommitted_changes(path)
}
