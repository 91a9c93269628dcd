// vendor-sync: vendored submodule mirror synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branch classification.
//!
//! ```text
//! "main"          --> Tracking                 mirrors upstream/main
//! "main-avocado"  --> Patch { base: "main" }   rebased onto upstream/main
//! "-avocado"      --> Tracking                 (suffix alone is not a patch)
//! ```

use std::collections::BTreeMap;

use crate::git::refs::RemoteBranch;

/// Role of a branch in the mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BranchKind {
    /// Disposable mirror of the upstream branch of the same name.
    Tracking,
    /// Local modifications layered on top of an upstream branch.
    Patch,
}

/// A branch name with its role, parsed once from the ref listing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct BranchRef {
    pub name: String,
    pub kind: BranchKind,
}

impl BranchRef {
    /// Classify `name` by the patch suffix.
    #[must_use]
    pub fn classify(name: &str, patch_suffix: &str) -> Self {
        let kind = if name.len() > patch_suffix.len() && name.ends_with(patch_suffix) {
            BranchKind::Patch
        } else {
            BranchKind::Tracking
        };
        Self {
            name: name.to_string(),
            kind,
        }
    }

    #[must_use]
    pub fn is_patch(&self) -> bool {
        self.kind == BranchKind::Patch
    }

    /// Upstream branch a patch branch is layered on, `None` for tracking branches.
    #[must_use]
    pub fn base_name<'a>(&'a self, patch_suffix: &str) -> Option<&'a str> {
        match self.kind {
            BranchKind::Patch => self.name.strip_suffix(patch_suffix),
            BranchKind::Tracking => None,
        }
    }
}

/// Non-symbolic branches of a remote listing, by name.
#[must_use]
pub fn branch_tips(branches: Vec<RemoteBranch>) -> BTreeMap<String, String> {
    branches
        .into_iter()
        .filter(|b| !b.symbolic)
        .map(|b| (b.name, b.tip))
        .collect()
}
