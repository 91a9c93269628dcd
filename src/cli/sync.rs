// vendor-sync: vendored submodule mirror synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sync and remote configuration arguments.
//!
//! ```text
//! sync [ENTRY...] [--force] [--allow-dirty]
//!   -> configure remotes, mirror branches, rebase patch branches
//! remotes [ENTRY...]
//!   -> configure remotes only
//! ```

use clap::Args;

/// Arguments for the `sync` command.
#[derive(Debug, Clone, Default, Args)]
pub struct SyncArgs {
    /// Entries to synchronize, by name or glob pattern. Defaults to all.
    #[arg(value_name = "ENTRY")]
    pub entries: Vec<String>,

    /// Force-push tracking branches to origin.
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Synchronize working copies with uncommitted changes.
    #[arg(long = "allow-dirty")]
    pub allow_dirty: bool,

    /// Suffix marking patch branches (overrides `sync.patch_suffix`).
    #[arg(long = "patch-suffix", value_name = "SUFFIX", allow_hyphen_values = true)]
    pub patch_suffix: Option<String>,
}

impl SyncArgs {
    /// Converts the flags to configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let mut overrides = Vec::new();
        if self.force {
            overrides.push("sync/force_push=true".to_string());
        }
        if self.allow_dirty {
            overrides.push("sync/allow_dirty=true".to_string());
        }
        if let Some(ref suffix) = self.patch_suffix {
            overrides.push(format!("sync/patch_suffix={suffix}"));
        }
        overrides
    }
}

/// Arguments for the `remotes` command.
#[derive(Debug, Clone, Default, Args)]
pub struct RemotesArgs {
    /// Entries to configure, by name or glob pattern. Defaults to all.
    #[arg(value_name = "ENTRY")]
    pub entries: Vec<String>,
}
