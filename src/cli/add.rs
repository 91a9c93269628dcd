// vendor-sync: vendored submodule mirror synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for registering a new vendored dependency.

use clap::Args;

use crate::config::types::Visibility;

/// Arguments for the `add` command.
#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    /// Entry name (also the default repository name and path).
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Upstream clone URL.
    #[arg(short = 'u', long, value_name = "URL")]
    pub upstream: String,

    /// Working copy path relative to the root (default: NAME).
    #[arg(short = 'p', long, value_name = "PATH")]
    pub path: Option<String>,

    /// Origin repository, as NAME or OWNER/NAME (default: last component of
    /// the entry name under `github.org`).
    #[arg(long = "repo", value_name = "REPO")]
    pub repo: Option<String>,

    /// Description of the origin repository.
    #[arg(short = 'd', long, value_name = "TEXT")]
    pub description: Option<String>,

    /// Homepage of the origin repository.
    #[arg(long, value_name = "URL")]
    pub homepage: Option<String>,

    /// Visibility of the origin repository (overrides `github.visibility`).
    #[arg(long, value_name = "VISIBILITY")]
    pub visibility: Option<Visibility>,

    /// GitHub API token (overrides `github.token`).
    #[arg(long = "github-token", env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Register the entry without synchronizing it afterwards.
    #[arg(long = "no-sync")]
    pub no_sync: bool,
}

impl AddArgs {
    /// Working copy path of the new entry.
    #[must_use]
    pub fn entry_path(&self) -> &str {
        self.path.as_deref().unwrap_or(&self.name)
    }

    /// Origin repository name of the new entry.
    #[must_use]
    pub fn repo_name(&self) -> &str {
        self.repo
            .as_deref()
            .unwrap_or_else(|| self.name.rsplit('/').next().unwrap_or(&self.name))
    }
}
