// vendor-sync: vendored submodule mirror synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branch synchronizer for one working copy.
//!
//! ```text
//! fetch --all --prune
//!   |
//!   v
//! upstream/<b> (non-symbolic) --> local <b> == upstream/<b> --> push origin  (tracking)
//!   |
//!   v
//! origin/<b><suffix> --> local <b><suffix> rebased onto upstream/<b> --> push --force origin  (patch)
//! ```
//!
//! Tracking branches are disposable mirrors and are reset without asking.
//! Patch branches carry local work and are only ever rebased.

use std::collections::BTreeMap;

use bon::Builder;
use tracing::{debug, info, warn};

use crate::config::types::{DEFAULT_PATCH_SUFFIX, SyncConfig};
use crate::error::{GitError, VendorResult};
use crate::git::backend::{GitMutation, GitQuery};

use super::branch::{BranchRef, branch_tips};
use super::remotes::{ORIGIN, UPSTREAM};
use super::result::{Caveat, SyncReport, SyncWarning};

/// Knobs of a sync run.
#[derive(Debug, Clone, Builder)]
pub struct SyncOptions {
    /// Force-push tracking branches to origin.
    #[builder(setters(name = with_force_push), default = false)]
    pub force_push: bool,
    /// Suffix marking a patch branch.
    #[builder(into, setters(name = with_patch_suffix), default = DEFAULT_PATCH_SUFFIX.to_string())]
    pub patch_suffix: String,
    /// Sync a working copy even if it has uncommitted changes.
    #[builder(setters(name = with_allow_dirty), default = false)]
    pub allow_dirty: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl From<&SyncConfig> for SyncOptions {
    fn from(config: &SyncConfig) -> Self {
        Self::builder()
            .with_force_push(config.force_push)
            .with_patch_suffix(config.patch_suffix.as_str())
            .with_allow_dirty(config.allow_dirty)
            .build()
    }
}

/// Mirrors upstream branches into origin and rebases patch branches.
#[derive(Debug, Clone, Copy)]
pub struct BranchSynchronizer<'a> {
    options: &'a SyncOptions,
}

impl<'a> BranchSynchronizer<'a> {
    #[must_use]
    pub const fn new(options: &'a SyncOptions) -> Self {
        Self { options }
    }

    /// Synchronize `repo`, recording progress in `report`.
    ///
    /// Warnings and caveats land in `report` even when an error is returned,
    /// so a failed entry still shows what was observed before the failure.
    ///
    /// # Errors
    ///
    /// - `GitError::UncommittedChanges` if the working copy is dirty and
    ///   dirty syncs are not allowed
    /// - `GitError::CommandFailed` if fetch, checkout, reset, or the tracking
    ///   push fails
    /// - `GitError::RebaseConflict` if a patch branch does not rebase cleanly
    pub fn run<R>(&self, repo: &R, report: &mut SyncReport) -> VendorResult<()>
    where
        R: GitQuery + GitMutation,
    {
        if !self.options.allow_dirty && repo.has_uncommitted_changes()? {
            return Err(GitError::UncommittedChanges {
                path: repo.workdir().display().to_string(),
            }
            .into());
        }

        repo.fetch_all()?;

        let upstream = branch_tips(repo.remote_branches(UPSTREAM)?);
        if upstream.is_empty() {
            warn!("upstream has no branches");
            report.warn(SyncWarning::NoUpstreamBranches);
            return Ok(());
        }

        self.mirror_tracking(repo, &upstream, report)?;
        self.rebase_patches(repo, &upstream, report)
    }

    fn mirror_tracking<R>(
        &self,
        repo: &R,
        upstream: &BTreeMap<String, String>,
        report: &mut SyncReport,
    ) -> VendorResult<()>
    where
        R: GitQuery + GitMutation,
    {
        let local = local_tips(repo)?;
        for (name, tip) in upstream {
            let target = format!("{UPSTREAM}/{name}");
            match local.get(name) {
                Some(old_tip) => {
                    repo.checkout(name)?;
                    repo.reset_hard(&target)?;
                    if tip != old_tip {
                        debug!(branch = %name, "tracking branch moved");
                        report.updated.insert(name.clone());
                    }
                }
                None => {
                    repo.create_tracking_branch(name, &target)?;
                    debug!(branch = %name, "tracking branch created");
                    report.updated.insert(name.clone());
                }
            }
            report.mirrored.insert(name.clone());
        }

        let names: Vec<String> = upstream.keys().cloned().collect();
        repo.push(ORIGIN, &names, self.options.force_push)?;
        info!(
            mirrored = names.len(),
            updated = report.updated.len(),
            "tracking branches pushed"
        );
        Ok(())
    }

    fn rebase_patches<R>(
        &self,
        repo: &R,
        upstream: &BTreeMap<String, String>,
        report: &mut SyncReport,
    ) -> VendorResult<()>
    where
        R: GitQuery + GitMutation,
    {
        let suffix = self.options.patch_suffix.as_str();
        let patches: Vec<BranchRef> = branch_tips(repo.remote_branches(ORIGIN)?)
            .into_keys()
            // an upstream branch that happens to carry the suffix is a mirror
            .filter(|name| !upstream.contains_key(name))
            .map(|name| BranchRef::classify(&name, suffix))
            .filter(BranchRef::is_patch)
            .collect();
        if patches.is_empty() {
            return Ok(());
        }

        let local = local_tips(repo)?;
        for patch in &patches {
            let Some(base) = patch.base_name(suffix) else {
                continue;
            };
            if !upstream.contains_key(base) {
                warn!(branch = %patch.name, base, "patch branch has no upstream base");
                report.warn(SyncWarning::OrphanPatchBranch {
                    branch: patch.name.clone(),
                });
                continue;
            }

            let origin_ref = format!("{ORIGIN}/{}", patch.name);
            if local.contains_key(&patch.name) {
                repo.checkout(&patch.name)?;
                repo.reset_hard(&origin_ref)?;
            } else {
                repo.create_tracking_branch(&patch.name, &origin_ref)?;
            }
            repo.rebase(&patch.name, &format!("{UPSTREAM}/{base}"))?;

            match repo.push(ORIGIN, std::slice::from_ref(&patch.name), true) {
                Ok(()) => {
                    info!(branch = %patch.name, onto = base, "patch branch rebased");
                    report.rebased.insert(patch.name.clone());
                }
                Err(e) => {
                    warn!(branch = %patch.name, error = %e, "patch branch push failed");
                    report.caveats.push(Caveat::PatchPushFailed {
                        branch: patch.name.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

fn local_tips<R: GitQuery>(repo: &R) -> VendorResult<BTreeMap<String, String>> {
    Ok(repo
        .local_branches()?
        .into_iter()
        .map(|b| (b.name, b.tip))
        .collect())
}
