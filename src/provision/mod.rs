// vendor-sync: vendored submodule mirror synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Origin repository provisioning.
//!
//! ```text
//! provision(host, request)
//!   repo_exists? --yes--> AlreadyExists
//!       | no
//!       v
//!   create_repo --> Created
//!       |
//!       v  (both paths)
//!   disable_ci --> disable_ancillary_features
//! ```
//!
//! Every step is idempotent, so a provisioning interrupted halfway can be
//! run again.

pub mod github;

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use bon::Builder;
use regex::Regex;
use tracing::info;

use crate::config::types::Visibility;
use crate::error::{NetworkError, VendorError, VendorResult};

pub use github::GithubHost;

/// `owner/name` of a hosted repository.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RepoSlug {
    pub owner: String,
    pub name: String,
}

impl RepoSlug {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Extract the slug from an https, ssh, or scp-style clone URL.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError::InvalidUrl` if the URL has no `owner/name` path.
    pub fn from_url(url: &str) -> VendorResult<Self> {
        let regex = Regex::new(
            r"^(?:[a-z+]+://(?:[^@/]+@)?[^/]+/|[^@:/]+@[^:]+:)([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+?)(?:\.git)?/?$",
        )
        .map_err(|e| NetworkError::InvalidUrl(e.to_string()))?;

        let captures = regex
            .captures(url.trim())
            .ok_or_else(|| NetworkError::InvalidUrl(url.to_string()))?;
        match (captures.get(1), captures.get(2)) {
            (Some(owner), Some(name)) => Ok(Self::new(owner.as_str(), name.as_str())),
            _ => Err(NetworkError::InvalidUrl(url.to_string()).into()),
        }
    }
}

impl FromStr for RepoSlug {
    type Err = VendorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self::new(owner, name))
            }
            _ => Err(NetworkError::InvalidUrl(s.to_string()).into()),
        }
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Parameters of a new origin repository.
#[derive(Debug, Clone, Builder)]
pub struct ProvisionRequest {
    pub slug: RepoSlug,
    #[builder(into, default)]
    pub description: String,
    #[builder(into)]
    pub homepage: Option<String>,
    #[builder(default)]
    pub visibility: Visibility,
}

/// Whether `provision` had to create the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
    Created,
    AlreadyExists,
}

/// A code-hosting service able to host origin repositories.
pub trait OriginHost {
    /// Whether `slug` exists and is visible to the caller.
    fn repo_exists(&self, slug: &RepoSlug) -> impl Future<Output = VendorResult<bool>>;

    /// Create the repository described by `request`.
    fn create_repo(&self, request: &ProvisionRequest) -> impl Future<Output = VendorResult<()>>;

    /// Turn off hosted CI for `slug`.
    fn disable_ci(&self, slug: &RepoSlug) -> impl Future<Output = VendorResult<()>>;

    /// Turn off issues, wiki, projects and discussions for `slug`.
    fn disable_ancillary_features(&self, slug: &RepoSlug)
    -> impl Future<Output = VendorResult<()>>;
}

/// Make sure the origin repository of `request` exists and is configured as
/// a plain mirror.
///
/// # Errors
///
/// Returns a `NetworkError` if any hosting call fails.
pub async fn provision<H: OriginHost>(
    host: &H,
    request: &ProvisionRequest,
) -> VendorResult<ProvisionOutcome> {
    let slug = &request.slug;
    let outcome = if host.repo_exists(slug).await? {
        info!(repo = %slug, "origin repository already exists");
        ProvisionOutcome::AlreadyExists
    } else {
        host.create_repo(request).await?;
        info!(repo = %slug, visibility = %request.visibility, "created origin repository");
        ProvisionOutcome::Created
    };

    host.disable_ci(slug).await?;
    host.disable_ancillary_features(slug).await?;
    Ok(outcome)
}
