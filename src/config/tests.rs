// pydocs: Python package documentation builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::types::{DEFAULT_LOGO_LINK_URL, DEFAULT_LOGO_URL};
use super::{Config, ConfigLoader};
use crate::config::loader::parse_override;
use crate::logging::LogLevel;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(!config.global.dry);
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.docs.output_dir, PathBuf::from("docs"));
    assert_eq!(config.docs.logo_url, DEFAULT_LOGO_URL);
    assert_eq!(config.docs.logo_link_url, DEFAULT_LOGO_LINK_URL);
    assert!(config.docs.mermaid);
    assert!(config.docs.math);
    assert_eq!(config.docs.entry_point, "__init__.py");
    assert_eq!(config.docs.source_glob, "*.py");
    assert_eq!(config.dependency.requirement, "pdoc");
    assert!(config.dependency.upgrade);
    assert!(config.dependency.install);
    assert!(config.tools.python.is_none());
}

#[test]
fn test_parse_empty_is_default() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.docs, Config::default().docs);
    assert_eq!(config.dependency, Config::default().dependency);
}

#[test]
fn test_parse_docs_section() {
    let toml = r#"
[docs]
output_dir = "site"
logo_url = "https://example.com/logo.svg"
mermaid = false
extra_args = ["--docformat", "google"]
"#;
    let config = Config::parse(toml).unwrap();
    assert_eq!(config.docs.output_dir, PathBuf::from("site"));
    assert_eq!(config.docs.logo_url, "https://example.com/logo.svg");
    assert!(!config.docs.mermaid);
    assert!(config.docs.math, "unspecified keys keep their defaults");
    assert_eq!(config.docs.extra_args, ["--docformat", "google"]);
}

#[test]
fn test_parse_pinned_dependency() {
    let toml = r#"
[dependency]
requirement = "pdoc==14.7.0"
upgrade = false

[tools]
python = "/usr/bin/python3.12"
"#;
    let config = Config::parse(toml).unwrap();
    assert_eq!(config.dependency.requirement, "pdoc==14.7.0");
    assert!(!config.dependency.upgrade);
    assert_eq!(
        config.tools.python,
        Some(PathBuf::from("/usr/bin/python3.12"))
    );
}

#[test]
fn test_parse_rejects_unknown_keys() {
    let err = Config::parse("[docs]\nlogo = \"x\"\n").unwrap_err();
    assert!(err.to_string().contains("config error"), "{err:#}");
}

#[test]
fn test_parse_rejects_bad_log_level() {
    assert!(Config::parse("[global]\noutput_log_level = 9\n").is_err());
}

#[test]
fn test_set_override_str_takes_precedence() {
    let config = ConfigLoader::new()
        .add_toml_str("[docs]\nmath = true\noutput_dir = \"a\"\n")
        .set_override_str("docs.math=false")
        .unwrap()
        .set_override_str("docs.output_dir = b")
        .unwrap()
        .set_override_str("global.output_log_level=4")
        .unwrap()
        .build()
        .unwrap();
    assert!(!config.docs.math);
    assert_eq!(config.docs.output_dir, PathBuf::from("b"));
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
}

#[test]
fn test_parse_override_rejects_malformed() {
    assert!(parse_override("docs.math").is_err());
    assert!(parse_override("=true").is_err());
    assert_eq!(
        parse_override("docs.logo_url=https://a/b?c=d").unwrap(),
        ("docs.logo_url", "https://a/b?c=d")
    );
}

#[test]
fn test_optional_file_missing_is_not_listed() {
    let temp = tempfile::tempdir().unwrap();
    let loader = ConfigLoader::new().add_toml_file_optional(temp.path().join("pydocs.toml"));
    assert!(loader.loaded_files().is_empty());
    assert!(loader.build().is_ok());
}

#[test]
fn test_required_file_missing_fails() {
    let temp = tempfile::tempdir().unwrap();
    let result = Config::from_file(temp.path().join("missing.toml"));
    assert!(result.is_err());
}

#[test]
fn test_format_loaded_files() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("pydocs.toml");
    std::fs::write(&path, "[docs]\nmath = false\n").unwrap();

    let loader = ConfigLoader::new()
        .add_toml_file_optional(&path)
        .add_toml_str("");
    let lines = loader.format_loaded_files();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], format!("1. [optional] {}", path.display()));
    insta::assert_snapshot!(lines[1].as_str(), @"2. [string] <string>");
}

#[test]
fn test_format_options_sorted_and_aligned() {
    let lines = Config::default().format_options();
    let keys: Vec<&str> = lines
        .iter()
        .map(|l| l.split(" = ").next().unwrap().trim_end())
        .collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted);

    let separator_columns: Vec<usize> = lines.iter().map(|l| l.find(" = ").unwrap()).collect();
    assert!(separator_columns.windows(2).all(|w| w[0] == w[1]));

    assert!(lines.iter().any(|l| l.ends_with("= pdoc")));
    assert!(lines.iter().any(|l| l.ends_with("= <PATH>")));
    assert!(!lines.iter().any(|l| l.starts_with("global.log_file")));
}
