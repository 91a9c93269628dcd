// vendor-sync: vendored submodule mirror synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed refs parsed from `git for-each-ref` output.
//!
//! ```text
//! refs/remotes/upstream/main<TAB>3f2a..<TAB>
//! refs/remotes/upstream/HEAD<TAB>3f2a..<TAB>refs/remotes/upstream/main
//!        |
//!        v
//! RemoteBranch { name: "main", tip: "3f2a..", symbolic: false }
//! RemoteBranch { name: "HEAD", tip: "3f2a..", symbolic: true }
//! ```

/// Format string passed to `git for-each-ref`.
pub const FOR_EACH_REF_FORMAT: &str = "%(refname)%09%(objectname)%09%(symref)";

/// A branch under `refs/remotes/<remote>/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteBranch {
    /// Branch name without the remote prefix.
    pub name: String,
    /// Commit id the ref points at.
    pub tip: String,
    /// Whether the ref is a symbolic alias (e.g. `upstream/HEAD`).
    pub symbolic: bool,
}

impl RemoteBranch {
    pub fn new(name: impl Into<String>, tip: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tip: tip.into(),
            symbolic: false,
        }
    }
}

/// A branch under `refs/heads/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalBranch {
    pub name: String,
    pub tip: String,
}

/// Parse remote branches of `remote` from for-each-ref output.
///
/// Lines outside `refs/remotes/<remote>/` are ignored. A ref named `HEAD` is
/// always treated as symbolic, even when git did not report a target.
#[must_use]
pub fn parse_remote_branches(output: &str, remote: &str) -> Vec<RemoteBranch> {
    let prefix = format!("refs/remotes/{remote}/");
    output
        .lines()
        .filter_map(|line| {
            let mut parts = line.splitn(3, '\t');
            let refname = parts.next()?.trim();
            let tip = parts.next().unwrap_or_default().trim();
            let symref = parts.next().unwrap_or_default().trim();
            let name = refname.strip_prefix(&prefix)?;
            if name.is_empty() {
                return None;
            }
            Some(RemoteBranch {
                name: name.to_string(),
                tip: tip.to_string(),
                symbolic: !symref.is_empty() || name == "HEAD",
            })
        })
        .collect()
}

/// Parse local branches from for-each-ref output over `refs/heads/`.
#[must_use]
pub fn parse_local_branches(output: &str) -> Vec<LocalBranch> {
    output
        .lines()
        .filter_map(|line| {
            let mut parts = line.splitn(3, '\t');
            let name = parts.next()?.trim().strip_prefix("refs/heads/")?;
            let tip = parts.next().unwrap_or_default().trim();
            Some(LocalBranch {
                name: name.to_string(),
                tip: tip.to_string(),
            })
        })
        .collect()
}
