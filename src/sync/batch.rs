// vendor-sync: vendored submodule mirror synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Batch driver over registry entries.
//!
//! ```text
//! Registry entries --Selection--> selected
//!        |
//!        v
//! Workspace::initialize(uninitialized)
//!        |
//!        v  for each entry, in registry order
//! no upstream? --> Skipped
//! open --> configure_remotes --> BranchSynchronizer::run --> SyncResult
//!        |
//!        v
//! BatchSummary
//! ```
//!
//! A failing entry never stops the batch.

use std::path::PathBuf;

use tracing::{error, info, info_span, warn};
use wax::Pattern as _;

use crate::error::{GitError, VendorResult};
use crate::git::backend::{GitMutation, GitQuery, ShellBackend};
use crate::git::{cmd, query};
use crate::registry::VendorEntry;

use super::engine::{BranchSynchronizer, SyncOptions};
use super::remotes::{RemoteStatus, configure_remotes};
use super::result::{BatchSummary, SyncOutcome, SyncReport, SyncResult, SyncWarning};

/// Which entries a run covers. Empty means every entry.
///
/// Items are entry names or glob patterns (`lib*`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    patterns: Vec<String>,
}

impl Selection {
    /// Select every registered entry.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Select entries by name or glob.
    pub fn of<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        self.patterns.is_empty()
    }

    fn pattern_matches(pattern: &str, name: &str) -> bool {
        if pattern == name {
            return true;
        }
        wax::Glob::new(pattern).is_ok_and(|glob| glob.is_match(name))
    }

    /// Entries matched by this selection, in registry order, plus the
    /// patterns that matched nothing.
    #[must_use]
    pub fn apply<'a>(&self, entries: &'a [VendorEntry]) -> (Vec<&'a VendorEntry>, Vec<String>) {
        if self.is_all() {
            return (entries.iter().collect(), Vec::new());
        }

        let selected = entries
            .iter()
            .filter(|e| self.patterns.iter().any(|p| Self::pattern_matches(p, &e.name)))
            .collect();
        let unmatched = self
            .patterns
            .iter()
            .filter(|p| !entries.iter().any(|e| Self::pattern_matches(p, &e.name)))
            .cloned()
            .collect();
        (selected, unmatched)
    }
}

/// Where working copies live and how they are opened.
pub trait Workspace {
    type Repo: GitQuery + GitMutation;

    /// Whether the working copy of `entry` is checked out.
    fn is_initialized(&self, entry: &VendorEntry) -> bool;

    /// Check out the working copies of `entries`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if checking out fails.
    fn initialize(&self, entries: &[&VendorEntry]) -> VendorResult<()>;

    /// Open the working copy of `entry`.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepoNotFound` if the working copy is missing.
    fn open(&self, entry: &VendorEntry) -> VendorResult<Self::Repo>;
}

/// Working copies are submodules of a superproject.
#[derive(Debug, Clone)]
pub struct Superproject {
    root: PathBuf,
    init_submodules: bool,
}

impl Superproject {
    pub fn new(root: impl Into<PathBuf>, init_submodules: bool) -> Self {
        Self {
            root: root.into(),
            init_submodules,
        }
    }
}

impl Workspace for Superproject {
    type Repo = ShellBackend;

    fn is_initialized(&self, entry: &VendorEntry) -> bool {
        query::is_initialized(&entry.workdir(&self.root))
    }

    fn initialize(&self, entries: &[&VendorEntry]) -> VendorResult<()> {
        if !self.init_submodules {
            return Ok(());
        }
        let paths: Vec<&str> = entries.iter().map(|e| e.path.as_str()).collect();
        cmd::init_submodules(&self.root, &paths)
    }

    fn open(&self, entry: &VendorEntry) -> VendorResult<ShellBackend> {
        let workdir = entry.workdir(&self.root);
        if !query::is_initialized(&workdir) {
            return Err(GitError::RepoNotFound {
                path: workdir.display().to_string(),
            }
            .into());
        }
        Ok(ShellBackend::new(workdir))
    }
}

/// What the driver does to each entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pipeline {
    RemotesOnly,
    Full,
}

/// Runs the per-entry pipeline over a selection of entries.
#[derive(Debug)]
pub struct BatchDriver<'a, W: Workspace> {
    workspace: &'a W,
    options: &'a SyncOptions,
}

impl<'a, W: Workspace> BatchDriver<'a, W> {
    pub const fn new(workspace: &'a W, options: &'a SyncOptions) -> Self {
        Self { workspace, options }
    }

    /// Configure remotes and synchronize branches of every selected entry.
    pub fn sync(&self, entries: &[VendorEntry], selection: &Selection) -> BatchSummary {
        self.run(entries, selection, Pipeline::Full)
    }

    /// Only bind `origin` and `upstream` of every selected entry.
    pub fn configure(&self, entries: &[VendorEntry], selection: &Selection) -> BatchSummary {
        self.run(entries, selection, Pipeline::RemotesOnly)
    }

    fn run(&self, entries: &[VendorEntry], selection: &Selection, pipeline: Pipeline) -> BatchSummary {
        let (selected, unmatched) = selection.apply(entries);
        let mut summary = BatchSummary {
            requested: selected.len(),
            ..BatchSummary::default()
        };
        for pattern in unmatched {
            warn!(%pattern, "selection matches no entry");
            summary.warnings.push(SyncWarning::UnknownSelection { pattern });
        }

        let missing: Vec<&VendorEntry> = selected
            .iter()
            .copied()
            .filter(|e| e.upstream_url.is_some() && !self.workspace.is_initialized(e))
            .collect();
        if !missing.is_empty() {
            info!(count = missing.len(), "initializing working copies");
            if let Err(e) = self.workspace.initialize(&missing) {
                // entries still missing fail individually below
                error!(error = %e, "working copy initialization failed");
            }
        }

        for entry in selected {
            let span = info_span!("entry", name = %entry.name);
            let _enter = span.enter();

            let result = self.process(entry, pipeline);
            match result.outcome {
                SyncOutcome::Success => info!(detail = %result.detail, "done"),
                SyncOutcome::Skipped => warn!(detail = %result.detail, "skipped"),
                SyncOutcome::Failure => error!(detail = %result.detail, "failed"),
            }
            summary.results.push(result);
        }
        summary
    }

    fn process(&self, entry: &VendorEntry, pipeline: Pipeline) -> SyncResult {
        if entry.upstream_url.is_none() {
            return SyncResult::skipped(&entry.name, SyncWarning::MissingUpstream);
        }

        let mut report = SyncReport::default();
        let outcome = self.workspace.open(entry).and_then(|repo| {
            let status = configure_remotes(&repo, entry)?;
            if pipeline == Pipeline::RemotesOnly {
                return Ok(Some(status));
            }
            BranchSynchronizer::new(self.options).run(&repo, &mut report)?;
            Ok(None)
        });

        match outcome {
            Ok(Some(status @ RemoteStatus::Configured(_))) => {
                SyncResult::success_with(&entry.name, status.describe())
            }
            Ok(Some(RemoteStatus::MissingUpstream)) => {
                SyncResult::skipped(&entry.name, SyncWarning::MissingUpstream)
            }
            Ok(None) => SyncResult::success(&entry.name, report),
            Err(e) => SyncResult::failure(&entry.name, &e, report),
        }
    }
}
