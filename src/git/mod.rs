// vendor-sync: vendored submodule mirror synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!        Public API
//!   query.rs  cmd.rs  refs.rs
//!        \      |      /
//!         v     v     v
//!      ,------------------,
//!      | backend (traits) |
//!      '--+----------+----'
//!         |          |
//!         v          v
//!    GitQuery    GitMutation       (per working copy, &self)
//!         \          /
//!          v        v
//!         ShellBackend             git CLI, one instance per working copy
//!
//!    GixBackend (query.rs)         pure Rust, read-only, no subprocess
//!    .is_repo .branch .dirty
//! ```
//!
//! The sync engine only sees the two traits, so tests can substitute an
//! in-memory working copy. `cmd.rs` holds the superproject-level commands
//! (`git submodule`, `git config --file .gitmodules`).

pub mod backend;
pub mod cmd;
pub mod query;
pub mod refs;
