// vendor-sync: vendored submodule mirror synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(6).is_ok());
    assert!(LogLevel::new(7).is_err());
    assert_eq!(LogLevel::from_u8(4), Some(LogLevel::DEBUG));
    assert_eq!(LogLevel::from_u8(9), None);
}

#[test]
fn test_filter_caps_noisy_crates_below_dump() {
    insta::assert_snapshot!(
        LogLevel::DEBUG.to_filter_string(),
        @"debug,hyper=warn,hyper_util=warn,reqwest=warn,rustls=warn,gix=warn,h2=warn"
    );
    assert_eq!(LogLevel::DUMP.to_filter_string(), "trace");
    assert_eq!(LogLevel::WARN.to_filter_string(), "warn");
    assert_eq!(LogLevel::SILENT.to_filter_string(), "off");
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());
}
