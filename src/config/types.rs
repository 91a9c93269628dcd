// vendor-sync: vendored submodule mirror synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for vendor-sync.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, SyncConfig, GithubConfig
//! Visibility: private (default) | public | internal
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Suffix marking branches that carry local patches on top of upstream.
pub const DEFAULT_PATCH_SUFFIX: &str = "-avocado";

/// Repository visibility on the hosting service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Private,
    Public,
    Internal,
}

impl Visibility {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Public => "public",
            Self::Internal => "internal",
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Visibility {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "private" => Ok(Self::Private),
            "public" => Ok(Self::Public),
            "internal" => Ok(Self::Internal),
            _ => Err(ConfigError::InvalidValue {
                section: "github".to_string(),
                key: "visibility".to_string(),
                message: format!("expected 'private', 'public', or 'internal', got '{s}'"),
            }),
        }
    }
}

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file, empty for no file log.
    pub log_file: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: PathBuf::new(),
        }
    }
}

/// Branch synchronization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyncConfig {
    /// Suffix identifying patch branches.
    pub patch_suffix: String,
    /// Force-push tracking branches (patch branches are always forced).
    pub force_push: bool,
    /// Run `git submodule update --init` for missing working copies.
    pub init_submodules: bool,
    /// Synchronize even when the working copy has uncommitted changes.
    pub allow_dirty: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            patch_suffix: DEFAULT_PATCH_SUFFIX.to_string(),
            force_push: false,
            init_submodules: true,
            allow_dirty: false,
        }
    }
}

/// Hosting service settings used when provisioning new origins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GithubConfig {
    /// REST API base URL.
    pub api_url: String,
    /// Organization owning the origin mirrors.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub org: String,
    /// Prefix used to build origin clone URLs (`<prefix><org>/<name>.git`).
    pub clone_url_prefix: String,
    /// API token.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub token: String,
    /// Visibility of newly created origins.
    pub visibility: Visibility,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: crate::provision::github::DEFAULT_API_URL.to_string(),
            org: String::new(),
            clone_url_prefix: "https://github.com/".to_string(),
            token: String::new(),
            visibility: Visibility::default(),
        }
    }
}

impl GithubConfig {
    /// Origin clone URL for a repository of the configured organization.
    #[must_use]
    pub fn origin_url(&self, repo: &str) -> String {
        self.clone_url(&self.org, repo)
    }

    /// Clone URL of `owner/repo` under `clone_url_prefix`.
    #[must_use]
    pub fn clone_url(&self, owner: &str, repo: &str) -> String {
        let prefix = self.clone_url_prefix.trim_end_matches('/');
        // ssh style prefixes end with ':' and must not gain a slash
        if prefix.ends_with(':') {
            format!("{prefix}{owner}/{repo}.git")
        } else {
            format!("{prefix}/{owner}/{repo}.git")
        }
    }
}
