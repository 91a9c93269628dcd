// vendor-sync: vendored submodule mirror synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Registry of vendored entries, read from the superproject's `.gitmodules`.
//!
//! ```text
//! [submodule "zlib"]                 VendorEntry {
//!     path = vendor/zlib       -->     name: "zlib", path: "vendor/zlib",
//!     url = <origin>                   origin_url, upstream_url: Some(..)
//!     upstream = <upstream>          }
//! ```
//!
//! `upstream` is a custom key; git ignores it. Entries keep the order in which
//! they appear in the file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{RegistryError, VendorResult};
use crate::git::cmd::{read_gitmodules, set_gitmodules_value};

/// Name of the custom `.gitmodules` key holding the upstream URL.
pub const UPSTREAM_KEY: &str = "upstream";

/// One vendored dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorEntry {
    /// Submodule name, unique within the registry.
    pub name: String,
    /// Working copy path relative to the superproject root.
    pub path: String,
    /// Organization-owned mirror URL.
    pub origin_url: String,
    /// Source-of-truth URL, if known.
    pub upstream_url: Option<String>,
}

impl VendorEntry {
    /// Absolute working copy directory.
    #[must_use]
    pub fn workdir(&self, root: &Path) -> PathBuf {
        root.join(&self.path)
    }
}

/// The set of vendored entries of one superproject.
#[derive(Debug, Clone)]
pub struct Registry {
    root: PathBuf,
    entries: Vec<VendorEntry>,
}

#[derive(Default)]
struct PartialEntry {
    path: Option<String>,
    url: Option<String>,
    upstream: Option<String>,
}

impl Registry {
    /// Load the registry from `<root>/.gitmodules`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if git cannot read the file, or a `RegistryError`
    /// if an entry is malformed.
    pub fn load(root: &Path) -> VendorResult<Self> {
        let listing = read_gitmodules(root)?;
        Self::parse(root, &listing)
    }

    /// Build the registry from `git config --list` style output.
    ///
    /// # Errors
    ///
    /// Returns a `RegistryError` if a line is malformed or an entry lacks
    /// `path` or `url`.
    pub fn parse(root: &Path, listing: &str) -> VendorResult<Self> {
        let mut order: Vec<String> = Vec::new();
        let mut partial: BTreeMap<String, PartialEntry> = BTreeMap::new();

        for line in listing.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let (key, value) = line.split_once('=').ok_or_else(|| RegistryError::Malformed {
                line: line.to_string(),
            })?;
            let Some(rest) = key.strip_prefix("submodule.") else {
                continue;
            };
            // names may contain dots; the variable is the last component
            let (name, var) = rest.rsplit_once('.').ok_or_else(|| RegistryError::Malformed {
                line: line.to_string(),
            })?;

            let entry = partial.entry(name.to_string()).or_insert_with(|| {
                order.push(name.to_string());
                PartialEntry::default()
            });
            let value = value.trim().to_string();
            match var {
                "path" => entry.path = Some(value),
                "url" => entry.url = Some(value),
                UPSTREAM_KEY => entry.upstream = Some(value).filter(|v| !v.is_empty()),
                _ => {}
            }
        }

        let mut entries = Vec::with_capacity(order.len());
        for name in order {
            let Some(parts) = partial.remove(&name) else {
                continue;
            };
            let path = parts.path.ok_or_else(|| RegistryError::MissingField {
                entry: name.clone(),
                field: "path".to_string(),
            })?;
            let origin_url = parts.url.ok_or_else(|| RegistryError::MissingField {
                entry: name.clone(),
                field: "url".to_string(),
            })?;
            entries.push(VendorEntry {
                name,
                path,
                origin_url,
                upstream_url: parts.upstream,
            });
        }

        Ok(Self {
            root: root.to_path_buf(),
            entries,
        })
    }

    /// Superproject root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All entries in file order.
    #[must_use]
    pub fn list_entries(&self) -> &[VendorEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&VendorEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Record the upstream URL of `name` in `.gitmodules`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the file cannot be written.
    pub fn register_upstream(root: &Path, name: &str, url: &str) -> VendorResult<()> {
        set_gitmodules_value(root, name, UPSTREAM_KEY, url)
    }
}
