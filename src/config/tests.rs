// vendor-sync: vendored submodule mirror synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::config::types::{DEFAULT_PATCH_SUFFIX, GithubConfig, Visibility};
use crate::logging::LogLevel;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.sync.patch_suffix, DEFAULT_PATCH_SUFFIX);
    assert!(!config.sync.force_push);
    assert!(config.sync.init_submodules);
    assert!(!config.sync.allow_dirty);
    assert_eq!(config.github.visibility, Visibility::Private);
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
}

#[test]
fn test_parse_toml() {
    let config = Config::parse(
        r#"
        [global]
        output_log_level = 4

        [sync]
        patch_suffix = "-local"
        force_push = true

        [github]
        org = "acme-mirrors"
        visibility = "internal"
        "#,
    )
    .expect("valid config");

    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.sync.patch_suffix, "-local");
    assert!(config.sync.force_push);
    assert!(config.sync.init_submodules, "unset keys keep defaults");
    assert_eq!(config.github.org, "acme-mirrors");
    assert_eq!(config.github.visibility, Visibility::Internal);
}

#[test]
fn test_unknown_sync_key_rejected() {
    let result = Config::parse(
        r#"
        [sync]
        force = true
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn test_empty_patch_suffix_rejected() {
    let result = Config::parse(
        r#"
        [sync]
        patch_suffix = ""
        "#,
    );
    let err = result.expect_err("empty suffix must fail validation");
    assert!(format!("{err:#}").contains("patch_suffix"));
}

#[test]
fn test_invalid_log_level_rejected() {
    let result = Config::parse(
        r"
        [global]
        output_log_level = 9
        ",
    );
    assert!(result.is_err());
}

#[test]
fn test_set_option_overrides_file() {
    let config = ConfigLoader::new()
        .add_toml_str("[sync]\nforce_push = false\n")
        .set_option("sync.force_push=true")
        .and_then(|l| l.set_option("github/org = mirrors"))
        .and_then(ConfigLoader::build)
        .expect("overrides apply");

    assert!(config.sync.force_push);
    assert_eq!(config.github.org, "mirrors");
}

#[test]
fn test_set_option_requires_equals() {
    assert!(ConfigLoader::new().set_option("sync.force_push").is_err());
}

#[test]
fn test_visibility_parse() {
    assert_eq!("Public".parse::<Visibility>().ok(), Some(Visibility::Public));
    assert_eq!(
        "private".parse::<Visibility>().ok(),
        Some(Visibility::Private)
    );
    assert!("secret".parse::<Visibility>().is_err());
}

#[test]
fn test_origin_url_prefixes() {
    let https = GithubConfig {
        org: "acme".to_string(),
        ..GithubConfig::default()
    };
    assert_eq!(https.origin_url("zlib"), "https://github.com/acme/zlib.git");

    let ssh = GithubConfig {
        org: "acme".to_string(),
        clone_url_prefix: "git@github.com:".to_string(),
        ..GithubConfig::default()
    };
    assert_eq!(ssh.origin_url("zlib"), "git@github.com:acme/zlib.git");
}

#[test]
fn test_format_options_hides_token() {
    let mut config = Config::default();
    config.github.token = "ghp_secret".to_string();
    let lines = config.format_options();

    assert!(lines.iter().any(|l| l.contains("github.token") && l.contains("[hidden]")));
    assert!(lines.iter().all(|l| !l.contains("ghp_secret")));
    assert!(lines.iter().any(|l| l.starts_with("sync.patch_suffix")));
}

#[test]
fn test_loaded_files_listing() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let file = temp.path().join("vendor-sync.toml");
    std::fs::write(&file, "[sync]\nforce_push = true\n").expect("write config");

    let loader = ConfigLoader::new()
        .add_toml_file_optional(&file)
        .add_toml_file_optional(temp.path().join("missing.toml"));
    let listing = loader.format_loaded_files();
    assert_eq!(listing.len(), 1);
    assert!(listing[0].starts_with("1. [optional]"));

    let config = loader.build().expect("optional files load");
    assert!(config.sync.force_push);
}
