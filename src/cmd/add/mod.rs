// vendor-sync: vendored submodule mirror synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Add command implementation.
//!
//! ```text
//! registry check --> provision origin --> git submodule add (from upstream)
//!   --> .gitmodules url = origin, upstream = <url> --> submodule sync
//!   --> sync the new entry
//! ```

use std::path::Path;

use tracing::info;

use crate::cli::add::AddArgs;
use crate::cmd::sync::{load_registry, report_summary};
use crate::config::Config;
use crate::config::types::GithubConfig;
use crate::error::{ConfigError, NetworkError, RegistryError, Result};
use crate::git::cmd;
use crate::provision::{
    GithubHost, ProvisionOutcome, ProvisionRequest, RepoSlug, provision,
};
use crate::registry::Registry;
use crate::sync::{BatchDriver, Selection, Superproject, SyncOptions};

/// Main handler for the add command.
///
/// # Errors
///
/// Returns an error if:
/// - The name is already registered.
/// - The origin cannot be resolved (see [`resolve_origin`]).
/// - The API token is missing.
/// - Provisioning, cloning, or registration fails.
/// - The initial sync of the new entry fails.
pub async fn run_add_command(args: &AddArgs, config: &Config, root: &Path) -> Result<()> {
    let registry = load_registry(root)?;
    if registry.contains(&args.name) {
        return Err(RegistryError::AlreadyRegistered {
            name: args.name.clone(),
        }
        .into());
    }
    let (slug, origin_url) = resolve_origin(args, &config.github)?;

    let token = args.github_token.as_deref().unwrap_or(&config.github.token);
    let host = GithubHost::new(&config.github.api_url, token)?;
    let request = ProvisionRequest::builder()
        .slug(slug)
        .description(
            args.description
                .clone()
                .unwrap_or_else(|| format!("Mirror of {}", args.upstream)),
        )
        .maybe_homepage(args.homepage.clone())
        .visibility(args.visibility.unwrap_or(config.github.visibility))
        .build();

    match provision(&host, &request).await? {
        ProvisionOutcome::Created => println!("Created origin {}", request.slug),
        ProvisionOutcome::AlreadyExists => println!("Origin {} already exists", request.slug),
    }

    let path = args.entry_path();
    info!(name = %args.name, path, upstream = %args.upstream, origin = %origin_url, "registering entry");

    cmd::add_submodule(root, &args.name, &args.upstream, path)?;
    cmd::set_gitmodules_value(root, &args.name, "url", &origin_url)?;
    Registry::register_upstream(root, &args.name, &args.upstream)?;
    cmd::sync_submodule(root, path)?;
    println!("Registered {} at {path}", args.name);

    if args.no_sync {
        return Ok(());
    }

    let registry = load_registry(root)?;
    let options = SyncOptions::from(&config.sync);
    let workspace = Superproject::new(root, false);
    let summary = BatchDriver::new(&workspace, &options).sync(
        registry.list_entries(),
        &Selection::of([args.name.as_str()]),
    );
    report_summary(&summary)
}

/// Origin slug and clone URL of a new entry.
///
/// `--repo OWNER/NAME` overrides `github.org`. The clone URL must parse back
/// to the same slug, which rejects names a clone URL cannot carry before any
/// API call is made.
///
/// # Errors
///
/// Returns `ConfigError::MissingKey` if no owner is given and `github.org` is
/// empty, or `NetworkError::InvalidUrl` if the repository name is invalid.
pub fn resolve_origin(args: &AddArgs, github: &GithubConfig) -> Result<(RepoSlug, String)> {
    let slug = match args.repo.as_deref().filter(|repo| repo.contains('/')) {
        Some(full) => full.parse::<RepoSlug>()?,
        None if github.org.is_empty() => {
            return Err(ConfigError::MissingKey {
                section: "github".to_string(),
                key: "org".to_string(),
            }
            .into());
        }
        None => RepoSlug::new(&github.org, args.repo_name()),
    };

    let url = github.clone_url(&slug.owner, &slug.name);
    if RepoSlug::from_url(&url)? != slug {
        return Err(NetworkError::InvalidUrl(url).into());
    }
    Ok((slug, url))
}
