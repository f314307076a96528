// pydocs: Python package documentation builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use crate::cli::{Cli, Command};
use clap::Parser;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["pydocs", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_no_command_defaults_to_build() {
    let cli = Cli::try_parse_from(["pydocs", "--dry"]).unwrap();
    assert!(cli.command.is_none());
    assert!(cli.global.dry);

    let Command::Build(args) = cli.command_or_default() else {
        panic!("expected build");
    };
    assert!(args.root.is_none());
    assert!(args.to_config_overrides().is_empty());
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "pydocs",
        "-l",
        "4",
        "-c",
        "a.toml",
        "--config",
        "b.toml",
        "-s",
        "docs.math=false",
        "--log-file",
        "pydocs.log",
        "--dry",
        "options",
    ])
    .unwrap();

    assert!(matches!(cli.command, Some(Command::Options)));
    assert_eq!(
        cli.global.configs,
        [PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    insta::assert_snapshot!(cli.global.to_config_overrides().join("\n"), @r"
    docs.math=false
    global.output_log_level=4
    global.file_log_level=4
    global.log_file=pydocs.log
    global.dry=true
    ");
}

#[test]
fn test_file_log_level_overrides_log_level() {
    let cli =
        Cli::try_parse_from(["pydocs", "-l", "1", "--file-log-level", "5", "configs"]).unwrap();
    let overrides = cli.global.to_config_overrides();
    assert!(overrides.contains(&"global.output_log_level=1".to_string()));
    assert!(overrides.contains(&"global.file_log_level=5".to_string()));
}

#[test]
fn test_log_level_out_of_range_is_rejected() {
    assert!(Cli::try_parse_from(["pydocs", "-l", "6", "version"]).is_err());
}

#[test]
fn test_parse_build_flags() {
    let cli = Cli::try_parse_from([
        "pydocs",
        "build",
        "src/mypkg",
        "--output",
        "site",
        "--logo",
        "",
        "--no-mermaid",
        "--no-upgrade",
        "--requirement",
        "pdoc==14.7.0",
        "--force",
    ])
    .unwrap();

    let Some(Command::Build(args)) = cli.command else {
        panic!("expected build");
    };
    assert_eq!(args.root, Some(PathBuf::from("src/mypkg")));
    assert!(args.force);
    assert!(!args.skip_install);
    insta::assert_snapshot!(args.to_config_overrides().join("\n"), @r"
    docs.output_dir=site
    docs.logo_url=
    docs.mermaid=false
    dependency.upgrade=false
    dependency.requirement=pdoc==14.7.0
    ");
}

#[test]
fn test_parse_status_json() {
    let cli = Cli::try_parse_from(["pydocs", "status", "--json", "/work/mypkg"]).unwrap();
    let Some(Command::Status(args)) = cli.command else {
        panic!("expected status");
    };
    assert!(args.json);
    assert_eq!(args.root, Some(PathBuf::from("/work/mypkg")));
}
