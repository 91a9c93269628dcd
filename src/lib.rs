// vendor-sync: vendored submodule mirror synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |         sync / remotes / add / list
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, env, overrides    |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!               sync      registry  provision
//!          batch/engine  .gitmodules  GitHub API
//!                 |           |
//!                 +-----+-----+
//!                       v
//!                      git
//!               gix queries / git CLI
//!
//!   +-----------------------------------------+
//!   |  foundation        error, logging       |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod provision;
pub mod registry;
pub mod sync;
