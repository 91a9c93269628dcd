// vendor-sync: vendored submodule mirror synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitQuery (read)     --+
//!                       +--> ShellBackend { workdir }  (git CLI)
//! GitMutation (write) --+
//! ```
//!
//! The dirty check goes through gix (`query.rs`); everything else runs git.
//!
//! Both traits take `&self`: a backend value is the capability to operate on
//! exactly one working copy.

use crate::error::{GitError, ProcessError, VendorResult};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use super::query;
use super::refs::{
    FOR_EACH_REF_FORMAT, LocalBranch, RemoteBranch, parse_local_branches, parse_remote_branches,
};

// --- Query Trait (Read-only operations) ---

/// Read-only queries against one working copy.
pub trait GitQuery {
    /// Directory of the working copy.
    fn workdir(&self) -> &Path;

    /// URL bound to a remote, `None` if the remote does not exist.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the remote list cannot be read.
    fn remote_url(&self, remote: &str) -> VendorResult<Option<String>>;

    /// Branches under `refs/remotes/<remote>/`, including symbolic aliases.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the refs cannot be listed.
    fn remote_branches(&self, remote: &str) -> VendorResult<Vec<RemoteBranch>>;

    /// Branches under `refs/heads/`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the refs cannot be listed.
    fn local_branches(&self) -> VendorResult<Vec<LocalBranch>>;

    /// Check for uncommitted changes (staged, unstaged, or untracked files).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the status check fails.
    fn has_uncommitted_changes(&self) -> VendorResult<bool>;
}

// --- Mutation Trait (Write operations) ---

/// Operations that modify the working copy or its remotes.
pub trait GitMutation {
    /// Add a remote bound to `url`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the remote cannot be added.
    fn add_remote(&self, name: &str, url: &str) -> VendorResult<()>;

    /// Rebind an existing remote to `url`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the URL cannot be changed.
    fn set_remote_url(&self, name: &str, url: &str) -> VendorResult<()>;

    /// Fetch every remote, pruning refs deleted on the remote side.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` on network or authentication failure.
    fn fetch_all(&self) -> VendorResult<()>;

    /// Switch to an existing local branch.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the checkout fails.
    fn checkout(&self, branch: &str) -> VendorResult<()>;

    /// Hard-reset the current branch to `target`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the reset fails.
    fn reset_hard(&self, target: &str) -> VendorResult<()>;

    /// Create and switch to `branch`, tracking `start_point`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the branch cannot be created.
    fn create_tracking_branch(&self, branch: &str, start_point: &str) -> VendorResult<()>;

    /// Push local branches to the same names on `remote`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the remote rejects the push.
    fn push(&self, remote: &str, branches: &[String], force: bool) -> VendorResult<()>;

    /// Rebase `branch` onto `onto`.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RebaseConflict` if the rebase stopped on conflicts
    /// (the rebase is left in progress), or another `GitError` otherwise.
    fn rebase(&self, branch: &str, onto: &str) -> VendorResult<()>;
}

// --- ShellBackend Implementation (Git CLI) ---

/// Shell-based git backend bound to one working copy.
#[derive(Debug, Clone)]
pub struct ShellBackend {
    workdir: PathBuf,
}

impl ShellBackend {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Execute a git command.
    ///
    /// Sets `GCM_INTERACTIVE=never`, `GIT_TERMINAL_PROMPT=0` and
    /// `GIT_EDITOR=true` so no command can block on user input.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::SpawnFailed` if git cannot be started and
    /// `GitError::CommandFailed` (with stderr) on a non-zero exit.
    pub fn git_command(args: &[&str], cwd: &Path) -> VendorResult<String> {
        use std::process::Command;

        let command_line = format!("git {}", args.join(" "));
        debug!(cwd = %cwd.display(), cmd = %command_line, "exec");

        let output = Command::new("git")
            .args(args)
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .env("GIT_EDITOR", "true")
            .output()
            .map_err(|source| ProcessError::SpawnFailed {
                command: command_line.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !stdout.is_empty() {
            trace!(cmd = %command_line, %stdout, "stdout");
        }
        if !stderr.is_empty() {
            trace!(cmd = %command_line, %stderr, "stderr");
        }

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: command_line,
                message: stderr,
            }
            .into());
        }
        Ok(stdout)
    }

    fn git(&self, args: &[&str]) -> VendorResult<String> {
        Self::git_command(args, &self.workdir)
    }

    /// Whether a rebase is stopped in this working copy.
    fn rebase_in_progress(&self) -> bool {
        ["rebase-merge", "rebase-apply"].iter().any(|dir| {
            self.git(&["rev-parse", "--git-path", dir])
                .map(|path| self.workdir.join(path).exists())
                .unwrap_or(false)
        })
    }
}

impl GitQuery for ShellBackend {
    fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn remote_url(&self, remote: &str) -> VendorResult<Option<String>> {
        let remotes = self.git(&["remote"])?;
        if !remotes.lines().any(|line| line.trim() == remote) {
            return Ok(None);
        }
        self.git(&["remote", "get-url", remote]).map(Some)
    }

    fn remote_branches(&self, remote: &str) -> VendorResult<Vec<RemoteBranch>> {
        let format = format!("--format={FOR_EACH_REF_FORMAT}");
        let pattern = format!("refs/remotes/{remote}");
        let output = self.git(&["for-each-ref", &format, &pattern])?;
        Ok(parse_remote_branches(&output, remote))
    }

    fn local_branches(&self) -> VendorResult<Vec<LocalBranch>> {
        let format = format!("--format={FOR_EACH_REF_FORMAT}");
        let output = self.git(&["for-each-ref", &format, "refs/heads"])?;
        Ok(parse_local_branches(&output))
    }

    fn has_uncommitted_changes(&self) -> VendorResult<bool> {
        query::has_uncommitted_changes(&self.workdir)
    }
}

impl GitMutation for ShellBackend {
    fn add_remote(&self, name: &str, url: &str) -> VendorResult<()> {
        self.git(&["remote", "add", name, url])?;
        Ok(())
    }

    fn set_remote_url(&self, name: &str, url: &str) -> VendorResult<()> {
        self.git(&["remote", "set-url", name, url])?;
        Ok(())
    }

    fn fetch_all(&self) -> VendorResult<()> {
        self.git(&["fetch", "--all", "--prune", "--quiet"])?;
        Ok(())
    }

    fn checkout(&self, branch: &str) -> VendorResult<()> {
        self.git(&["checkout", "-q", branch])?;
        Ok(())
    }

    fn reset_hard(&self, target: &str) -> VendorResult<()> {
        self.git(&["reset", "-q", "--hard", target])?;
        Ok(())
    }

    fn create_tracking_branch(&self, branch: &str, start_point: &str) -> VendorResult<()> {
        self.git(&["checkout", "-q", "--track", "-b", branch, start_point])?;
        Ok(())
    }

    fn push(&self, remote: &str, branches: &[String], force: bool) -> VendorResult<()> {
        if branches.is_empty() {
            return Ok(());
        }
        let refspecs: Vec<String> = branches
            .iter()
            .map(|b| format!("refs/heads/{b}:refs/heads/{b}"))
            .collect();

        let mut args = vec!["push", "--quiet"];
        if force {
            args.push("--force");
        }
        args.push(remote);
        args.extend(refspecs.iter().map(String::as_str));
        self.git(&args)?;
        Ok(())
    }

    fn rebase(&self, branch: &str, onto: &str) -> VendorResult<()> {
        match self.git(&["rebase", "--quiet", onto, branch]) {
            Ok(_) => Ok(()),
            Err(_) if self.rebase_in_progress() => Err(GitError::RebaseConflict {
                branch: branch.to_string(),
                onto: onto.to_string(),
            }
            .into()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests;
