// vendor-sync: vendored submodule mirror synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::format_entries;
use crate::git::backend::ShellBackend;
use crate::registry::VendorEntry;

#[test]
fn test_format_entries() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let workdir = temp.path().join("vendor/zlib");
    std::fs::create_dir_all(&workdir).unwrap();
    ShellBackend::git_command(&["init", "-q", "-b", "develop"], &workdir).expect("git init");
    let entries = vec![
        VendorEntry {
            name: "zlib".to_string(),
            path: "vendor/zlib".to_string(),
            origin_url: "https://github.com/acme/zlib.git".to_string(),
            upstream_url: Some("https://github.com/madler/zlib.git".to_string()),
        },
        VendorEntry {
            name: "fmt".to_string(),
            path: "vendor/fmt".to_string(),
            origin_url: "https://github.com/acme/fmt.git".to_string(),
            upstream_url: None,
        },
    ];

    let lines = format_entries(temp.path(), &entries);
    assert_eq!(
        lines,
        vec![
            "zlib  vendor/zlib  [develop]  https://github.com/madler/zlib.git",
            "fmt   vendor/fmt  [not checked out]  (none)",
        ]
    );
}
