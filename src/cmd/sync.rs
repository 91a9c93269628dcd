// vendor-sync: vendored submodule mirror synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sync and remotes command implementation.

use std::path::Path;

use anyhow::{Context, anyhow};

use crate::cli::sync::{RemotesArgs, SyncArgs};
use crate::config::Config;
use crate::error::Result;
use crate::registry::Registry;
use crate::sync::{BatchDriver, BatchSummary, Selection, Superproject, SyncOptions};

/// Main handler for the sync command.
///
/// # Errors
///
/// Returns an error if the registry cannot be loaded or any entry failed.
pub fn run_sync_command(args: &SyncArgs, config: &Config, root: &Path) -> Result<()> {
    let registry = load_registry(root)?;
    let options = SyncOptions::from(&config.sync);
    let workspace = Superproject::new(root, config.sync.init_submodules);

    let summary = BatchDriver::new(&workspace, &options)
        .sync(registry.list_entries(), &Selection::of(&args.entries));
    report_summary(&summary)
}

/// Main handler for the remotes command.
///
/// # Errors
///
/// Returns an error if the registry cannot be loaded or any entry failed.
pub fn run_remotes_command(args: &RemotesArgs, config: &Config, root: &Path) -> Result<()> {
    let registry = load_registry(root)?;
    let options = SyncOptions::from(&config.sync);
    let workspace = Superproject::new(root, config.sync.init_submodules);

    let summary = BatchDriver::new(&workspace, &options)
        .configure(registry.list_entries(), &Selection::of(&args.entries));
    report_summary(&summary)
}

pub(crate) fn load_registry(root: &Path) -> Result<Registry> {
    Registry::load(root).with_context(|| format!("failed to read registry in {}", root.display()))
}

/// Print the summary; fail iff an entry failed.
pub(crate) fn report_summary(summary: &BatchSummary) -> Result<()> {
    if summary.requested == 0 && summary.warnings.is_empty() {
        println!("No entries registered");
        return Ok(());
    }
    print!("{summary}");

    if summary.is_success() {
        Ok(())
    } else {
        Err(anyhow!(
            "{} of {} entries failed",
            summary.failed(),
            summary.requested
        ))
    }
}
