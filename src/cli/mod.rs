// vendor-sync: vendored submodule mirror synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for vendor-sync using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! vendor-sync [global options] <command>
//! sync [ENTRY...]
//! remotes [ENTRY...]
//! add NAME --upstream URL
//! list
//! options
//! configs
//! version
//! ```

pub mod add;
pub mod global;
pub mod sync;


use crate::cli::add::AddArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::sync::{RemotesArgs, SyncArgs};
use clap::{Parser, Subcommand};

/// Vendored submodule mirror synchronizer
///
/// Keeps organization-owned mirrors of vendored dependencies in step with
/// their upstream repositories.
#[derive(Debug, Parser)]
#[command(
    name = "vendor-sync",
    author,
    version,
    about = "Vendored submodule mirror synchronizer",
    long_about = "vendor-sync Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Mirrors every upstream branch of each vendored submodule into\n\
                  the organization-owned origin, and rebases patch branches\n\
                  (`<branch>-avocado`) onto the new upstream tips.\n\n\
                  Invoking `vendor-sync sync` synchronizes every entry of\n\
                  .gitmodules. Do `vendor-sync sync <entry>...` to pick entries.",
    after_help = "CONFIG FILES:\n\n\
                  vendor-sync reads `vendor-sync.toml` from the superproject root\n\
                  if it exists. Additional files can be given with --config, they\n\
                  are loaded in order after it. Environment variables such as\n\
                  VENDOR_SYNC_SYNC__FORCE_PUSH=true override files, and --set\n\
                  overrides everything."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the config files in use.
    Configs,

    /// Lists registered entries.
    List,

    /// Configures remotes and synchronizes branches.
    Sync(SyncArgs),

    /// Configures the origin and upstream remotes only.
    Remotes(RemotesArgs),

    /// Provisions an origin and registers a new entry.
    Add(AddArgs),
}

impl Command {
    /// Converts command flags to configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        match self {
            Self::Sync(args) => args.to_config_overrides(),
            _ => Vec::new(),
        }
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
