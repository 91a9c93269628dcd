// vendor-sync: vendored submodule mirror synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for vendor-sync.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. <root>/vendor-sync.toml (optional)
//! 3. --config FILE (repeatable)
//! 4. VENDOR_SYNC_* env vars
//! 5. --set KEY=VALUE overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! VENDOR_SYNC_SYNC__FORCE_PUSH=true  → sync.force_push = true
//! VENDOR_SYNC_GITHUB__ORG=acme       → github.org = "acme"
//! ```
//!
//! The registry of vendored entries is not part of this configuration; it
//! lives in the superproject's `.gitmodules`.

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{GithubConfig, GlobalConfig, SyncConfig};

/// Name of the optional config file looked up in the superproject root.
pub const CONFIG_FILE_NAME: &str = "vendor-sync.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "VENDOR_SYNC";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Synchronization options.
    pub sync: SyncConfig,
    /// Hosting service options.
    pub github: GithubConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use vendor_sync::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("vendor-sync.toml")
    ///     .with_env_prefix("VENDOR_SYNC")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate values the type system cannot express.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` if the patch suffix is empty or
    /// contains whitespace.
    pub fn validate(&self) -> Result<()> {
        let suffix = &self.sync.patch_suffix;
        if suffix.is_empty() || suffix.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidValue {
                section: "sync".to_string(),
                key: "patch_suffix".to_string(),
                message: format!("must be a non-empty ref name fragment, got '{suffix}'"),
            }
            .into());
        }
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Sensitive fields are shown as `[hidden]`. Output is ordered by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_sync_options(&mut options);
        self.format_github_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global.log_file.display().to_string(),
        );
    }

    fn format_sync_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("sync.patch_suffix".into(), self.sync.patch_suffix.clone());
        options.insert("sync.force_push".into(), self.sync.force_push.to_string());
        options.insert(
            "sync.init_submodules".into(),
            self.sync.init_submodules.to_string(),
        );
        options.insert("sync.allow_dirty".into(), self.sync.allow_dirty.to_string());
    }

    fn format_github_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("github.api_url".into(), self.github.api_url.clone());
        options.insert("github.org".into(), self.github.org.clone());
        options.insert(
            "github.clone_url_prefix".into(),
            self.github.clone_url_prefix.clone(),
        );
        if !self.github.token.is_empty() {
            options.insert("github.token".into(), "[hidden]".into());
        }
        options.insert(
            "github.visibility".into(),
            self.github.visibility.to_string(),
        );
    }
}
