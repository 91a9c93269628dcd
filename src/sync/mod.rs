// vendor-sync: vendored submodule mirror synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mirror synchronization.
//!
//! ```text
//! batch.rs    BatchDriver, Selection, Workspace   (many entries)
//!   |
//!   +-- remotes.rs  configure_remotes             (origin / upstream)
//!   +-- engine.rs   BranchSynchronizer            (tracking + patch branches)
//!          |
//!          +-- branch.rs  BranchRef classification
//!
//! result.rs   SyncResult, BatchSummary
//! ```

pub mod batch;
pub mod branch;
pub mod engine;
pub mod remotes;
pub mod result;

pub use batch::{BatchDriver, Selection, Superproject, Workspace};
pub use branch::{BranchKind, BranchRef};
pub use engine::{BranchSynchronizer, SyncOptions};
pub use remotes::{ORIGIN, RemoteChange, RemoteStatus, UPSTREAM, configure_remotes};
pub use result::{BatchSummary, Caveat, SyncOutcome, SyncReport, SyncResult, SyncWarning};

#[cfg(test)]
mod test_utils;
