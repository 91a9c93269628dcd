// vendor-sync: vendored submodule mirror synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote configuration of one working copy.
//!
//! ```text
//! entry.origin_url   --> remote "origin"
//! entry.upstream_url --> remote "upstream"
//!
//! absent  --> add_remote        (Added)
//! differs --> set_remote_url    (Rebound, logged)
//! equal   --> no-op
//! ```

use std::fmt;

use tracing::{debug, info};

use crate::error::VendorResult;
use crate::git::backend::{GitMutation, GitQuery};
use crate::registry::VendorEntry;

/// Remote name of the organization-owned mirror.
pub const ORIGIN: &str = "origin";
/// Remote name of the source of truth.
pub const UPSTREAM: &str = "upstream";

/// A change applied to one remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteChange {
    Added {
        remote: String,
        url: String,
    },
    Rebound {
        remote: String,
        from: String,
        to: String,
    },
}

impl fmt::Display for RemoteChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added { remote, url } => write!(f, "added {remote} -> {url}"),
            Self::Rebound { remote, from, to } => write!(f, "rebound {remote}: {from} -> {to}"),
        }
    }
}

/// Outcome of [`configure_remotes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteStatus {
    /// Both remotes are bound; lists what had to change.
    Configured(Vec<RemoteChange>),
    /// The entry has no upstream URL, nothing was touched.
    MissingUpstream,
}

impl RemoteStatus {
    /// One-line description for the summary.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Configured(changes) if changes.is_empty() => "remotes unchanged".to_string(),
            Self::Configured(changes) => changes
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
            Self::MissingUpstream => "no upstream URL configured".to_string(),
        }
    }
}

/// Bind `origin` and `upstream` of `repo` to the URLs of `entry`.
///
/// Idempotent: a second call returns `Configured` with no changes.
///
/// # Errors
///
/// Returns a `GitError` if a remote cannot be read, added, or rebound.
pub fn configure_remotes<R>(repo: &R, entry: &VendorEntry) -> VendorResult<RemoteStatus>
where
    R: GitQuery + GitMutation,
{
    let Some(upstream_url) = entry.upstream_url.as_deref() else {
        return Ok(RemoteStatus::MissingUpstream);
    };

    let mut changes = Vec::new();
    for (remote, url) in [(ORIGIN, entry.origin_url.as_str()), (UPSTREAM, upstream_url)] {
        if let Some(change) = bind_remote(repo, remote, url)? {
            changes.push(change);
        }
    }
    Ok(RemoteStatus::Configured(changes))
}

fn bind_remote<R>(repo: &R, remote: &str, url: &str) -> VendorResult<Option<RemoteChange>>
where
    R: GitQuery + GitMutation,
{
    match repo.remote_url(remote)? {
        None => {
            repo.add_remote(remote, url)?;
            debug!(remote, url, "added remote");
            Ok(Some(RemoteChange::Added {
                remote: remote.to_string(),
                url: url.to_string(),
            }))
        }
        Some(current) if current == url => Ok(None),
        Some(current) => {
            repo.set_remote_url(remote, url)?;
            info!(remote, from = %current, to = url, "rebound remote");
            Ok(Some(RemoteChange::Rebound {
                remote: remote.to_string(),
                from: current,
                to: url.to_string(),
            }))
        }
    }
}
