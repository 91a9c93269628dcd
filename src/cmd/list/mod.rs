// vendor-sync: vendored submodule mirror synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation.

use std::path::Path;

use tracing::debug;

use crate::cmd::sync::load_registry;
use crate::error::Result;
use crate::git::query;
use crate::registry::VendorEntry;

/// Main handler for the list command.
///
/// # Errors
///
/// Returns an error if the registry cannot be loaded.
pub fn run_list_command(root: &Path) -> Result<()> {
    let registry = load_registry(root)?;
    if registry.list_entries().is_empty() {
        println!("No entries registered");
        return Ok(());
    }
    for line in format_entries(root, registry.list_entries()) {
        println!("{line}");
    }
    Ok(())
}

/// One line per entry: name, path, checkout state, upstream.
///
/// The state of a checked out entry is its current branch.
#[must_use]
pub fn format_entries(root: &Path, entries: &[VendorEntry]) -> Vec<String> {
    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
    entries
        .iter()
        .map(|entry| {
            let state = checkout_state(&entry.workdir(root));
            let upstream = entry.upstream_url.as_deref().unwrap_or("(none)");
            format!(
                "{:<width$}  {}  [{state}]  {upstream}",
                entry.name, entry.path
            )
        })
        .collect()
}

fn checkout_state(workdir: &Path) -> String {
    if !query::is_initialized(workdir) {
        return "not checked out".to_string();
    }
    match query::current_branch(workdir) {
        Ok(Some(branch)) => branch,
        Ok(None) => "detached".to_string(),
        Err(e) => {
            debug!(path = %workdir.display(), error = %e, "cannot read HEAD");
            "unreadable".to_string()
        }
    }
}

#[cfg(test)]
mod tests;
