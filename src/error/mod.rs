// vendor-sync: vendored submodule mirror synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            VendorError (16 bytes)
//!                     |
//!      +------+------+---+---+------+------+
//!      |      |      |       |      |      |
//!      v      v      v       v      v      v
//!     Git    Net    Cfg     Reg   Proc    Io
//!     Box    Box    Box     Box   Box     Box
//!
//! Sub-errors (unboxed internally):
//!   Git      RepoNotFound, CommandFailed, Gix, UncommittedChanges,
//!            RebaseConflict
//!   Network  HttpError, Reqwest, InvalidUrl, MissingToken
//!   Config   ParseError, MissingKey, InvalidValue
//!   Registry MissingField, Malformed, AlreadyRegistered
//!   Process  ExecutableNotFound, SpawnFailed
//! ```
//!
//! Entry-level errors are captured by the batch driver and never abort a run;
//! only errors outside of an entry (bad config, missing `git`) reach `main`.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`VendorError`].
pub type VendorResult<T> = std::result::Result<T, VendorError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum VendorError {
    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Hosting API operation failed.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Registry (`.gitmodules`) error.
    #[error("registry error: {0}")]
    Registry(#[from] Box<RegistryError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

impl VendorError {
    /// Returns the git error if this is one.
    #[must_use]
    pub fn as_git(&self) -> Option<&GitError> {
        match self {
            Self::Git(err) => Some(err),
            _ => None,
        }
    }

    /// Whether this error is a rebase conflict awaiting manual resolution.
    #[must_use]
    pub fn is_rebase_conflict(&self) -> bool {
        matches!(self.as_git(), Some(GitError::RebaseConflict { .. }))
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for VendorError {
                fn from(err: $error) -> Self {
                    VendorError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    NetworkError => Network,
    ConfigError => Config,
    RegistryError => Registry,
    ProcessError => Process,
    std::io::Error => Io,
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
///
/// Large error types are boxed to keep enum size manageable.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to discover repository from path.
    #[error("failed to discover repository: {0}")]
    Discover(#[from] Box<gix::discover::Error>),

    /// Failed to get HEAD reference.
    #[error("failed to get head reference: {0}")]
    Head(#[from] gix::reference::find::existing::Error),

    /// Repository has no worktree (bare repository).
    #[error("repository has no worktree (bare repository)")]
    BareRepository,
}

// --- Git Errors ---

/// Git operation errors.
///
/// Each variant is one failure kind of the git capability traits, so callers
/// (and fakes in tests) can branch on it without parsing messages.
#[derive(Debug, Error)]
pub enum GitError {
    /// Working copy not found or not initialized.
    #[error("repository not found: {path}")]
    RepoNotFound { path: String },

    /// Git command execution failed.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),

    /// Uncommitted changes detected when clean working tree required.
    #[error("uncommitted changes in {path}")]
    UncommittedChanges { path: String },

    /// Rebase stopped on conflicts. The rebase is left in progress.
    #[error(
        "rebase of {branch} onto {onto} stopped on conflicts; automatic resolution was not \
         attempted, resolve manually then run `git rebase --continue` or `git rebase --abort`"
    )]
    RebaseConflict { branch: String, onto: String },
}

// --- Network Errors ---

/// Hosting API errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// HTTP error response.
    #[error("http error {status}: {url}")]
    HttpError { status: u16, url: String },

    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Invalid URL or repository slug.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// No API token available.
    #[error("missing API token (set github.token or GITHUB_TOKEN)")]
    MissingToken,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Registry Errors ---

/// Errors reading or updating the submodule registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A submodule section lacks a required key.
    #[error("submodule '{entry}' has no '{field}' key")]
    MissingField { entry: String, field: String },

    /// A line of `git config --list` output could not be parsed.
    #[error("malformed registry line: {line}")]
    Malformed { line: String },

    /// An entry with this name already exists.
    #[error("submodule '{name}' is already registered")]
    AlreadyRegistered { name: String },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
