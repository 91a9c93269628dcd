// vendor-sync: vendored submodule mirror synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-entry results and the batch summary.
//!
//! ```text
//! SyncReport (filled while syncing one entry)
//!      |
//!      v
//! SyncResult { entry_name, outcome, detail, warnings, caveats }
//!      |  x N
//!      v
//! BatchSummary --> Display (printed at the end of every run)
//! ```

use std::collections::BTreeSet;
use std::fmt;

use crate::error::VendorError;

/// Final state of one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    Success,
    /// Not attempted because of a configuration warning.
    Skipped,
    Failure,
}

impl SyncOutcome {
    const fn label(self) -> &'static str {
        match self {
            Self::Success => "ok",
            Self::Skipped => "skipped",
            Self::Failure => "FAILED",
        }
    }
}

/// Non-fatal conditions. None of them affect the exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncWarning {
    /// The entry has no `upstream` key in the registry.
    MissingUpstream,
    /// The upstream remote has no branches.
    NoUpstreamBranches,
    /// A patch branch exists on origin but its base is not an upstream branch.
    OrphanPatchBranch { branch: String },
    /// A requested name or pattern matched no registry entry.
    UnknownSelection { pattern: String },
}

impl fmt::Display for SyncWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingUpstream => f.write_str("no upstream URL configured"),
            Self::NoUpstreamBranches => f.write_str("upstream has no branches, nothing to sync"),
            Self::OrphanPatchBranch { branch } => {
                write!(f, "patch branch {branch} has no matching upstream branch, skipped")
            }
            Self::UnknownSelection { pattern } => {
                write!(f, "'{pattern}' does not match any registered entry")
            }
        }
    }
}

/// Success with a flagged problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caveat {
    /// A patch branch was rebased locally but the force-push to origin
    /// failed; the next run retries it.
    PatchPushFailed { branch: String, message: String },
}

impl fmt::Display for Caveat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PatchPushFailed { branch, message } => write!(
                f,
                "{branch} rebased locally but not pushed to origin ({message})"
            ),
        }
    }
}

/// What happened while synchronizing one working copy.
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    /// Every tracking branch mirrored from upstream.
    pub mirrored: BTreeSet<String>,
    /// Tracking branches created or moved by this run.
    pub updated: BTreeSet<String>,
    /// Patch branches rebased and force-pushed.
    pub rebased: BTreeSet<String>,
    pub warnings: Vec<SyncWarning>,
    pub caveats: Vec<Caveat>,
}

impl SyncReport {
    pub(crate) fn warn(&mut self, warning: SyncWarning) {
        self.warnings.push(warning);
    }

    fn describe(&self) -> String {
        let mut detail = format!(
            "{} branches mirrored, {} updated",
            self.mirrored.len(),
            self.updated.len()
        );
        if !self.rebased.is_empty() {
            detail.push_str(&format!(", {} patch branches rebased", self.rebased.len()));
        }
        detail
    }
}

/// Result of one entry, produced once per requested entry per run.
#[derive(Debug, Clone)]
pub struct SyncResult {
    pub entry_name: String,
    pub outcome: SyncOutcome,
    pub detail: String,
    pub warnings: Vec<SyncWarning>,
    pub caveats: Vec<Caveat>,
    /// Tracking branches created or moved.
    pub updated: BTreeSet<String>,
}

impl SyncResult {
    /// Successful entry built from its report.
    #[must_use]
    pub fn success(entry_name: &str, report: SyncReport) -> Self {
        Self {
            entry_name: entry_name.to_string(),
            outcome: SyncOutcome::Success,
            detail: report.describe(),
            warnings: report.warnings,
            caveats: report.caveats,
            updated: report.updated,
        }
    }

    /// Successful entry whose detail is given directly (remote configuration).
    #[must_use]
    pub fn success_with(entry_name: &str, detail: impl Into<String>) -> Self {
        Self {
            entry_name: entry_name.to_string(),
            outcome: SyncOutcome::Success,
            detail: detail.into(),
            warnings: Vec::new(),
            caveats: Vec::new(),
            updated: BTreeSet::new(),
        }
    }

    /// Entry not attempted because of `warning`.
    #[must_use]
    pub fn skipped(entry_name: &str, warning: SyncWarning) -> Self {
        Self {
            entry_name: entry_name.to_string(),
            outcome: SyncOutcome::Skipped,
            detail: warning.to_string(),
            warnings: vec![warning],
            caveats: Vec::new(),
            updated: BTreeSet::new(),
        }
    }

    /// Failed entry. Warnings gathered before the failure are kept.
    #[must_use]
    pub fn failure(entry_name: &str, error: &VendorError, report: SyncReport) -> Self {
        Self {
            entry_name: entry_name.to_string(),
            outcome: SyncOutcome::Failure,
            detail: error.to_string(),
            warnings: report.warnings,
            caveats: report.caveats,
            updated: report.updated,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome == SyncOutcome::Success
    }

    /// Whether the entry succeeded with a flagged caveat.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.is_success() && !self.caveats.is_empty()
    }
}

/// Aggregate of one batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    /// Number of entries selected for this run.
    pub requested: usize,
    pub results: Vec<SyncResult>,
    /// Warnings not tied to an entry.
    pub warnings: Vec<SyncWarning>,
}

impl BatchSummary {
    fn count(&self, outcome: SyncOutcome) -> usize {
        self.results.iter().filter(|r| r.outcome == outcome).count()
    }

    /// Entries that were actually processed (not skipped).
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.results.len() - self.skipped()
    }

    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.count(SyncOutcome::Success)
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(SyncOutcome::Skipped)
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(SyncOutcome::Failure)
    }

    /// True iff no entry failed. Warnings and skips do not count.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    #[must_use]
    pub fn result(&self, entry_name: &str) -> Option<&SyncResult> {
        self.results.iter().find(|r| r.entry_name == entry_name)
    }

    /// Every warning of the run, batch-level first.
    pub fn all_warnings(&self) -> impl Iterator<Item = &SyncWarning> {
        self.warnings
            .iter()
            .chain(self.results.iter().flat_map(|r| r.warnings.iter()))
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} requested, {} attempted, {} succeeded, {} skipped, {} failed",
            self.requested,
            self.attempted(),
            self.succeeded(),
            self.skipped(),
            self.failed()
        )?;

        let width = self
            .results
            .iter()
            .map(|r| r.entry_name.len())
            .max()
            .unwrap_or(0);
        for result in &self.results {
            writeln!(
                f,
                "  {:<7} {:<width$}  {}",
                result.outcome.label(),
                result.entry_name,
                result.detail
            )?;
            if result.outcome != SyncOutcome::Skipped {
                for warning in &result.warnings {
                    writeln!(f, "          warning: {warning}")?;
                }
            }
            for caveat in &result.caveats {
                writeln!(f, "          caveat: {caveat}")?;
            }
        }
        for warning in &self.warnings {
            writeln!(f, "  warning: {warning}")?;
        }
        Ok(())
    }
}
