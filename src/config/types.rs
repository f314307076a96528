// pydocs: Python package documentation builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections.
//!
//! ```text
//! [global]      dry, output_log_level, file_log_level, log_file
//! [docs]        output_dir, logo_url, logo_link_url, mermaid, math,
//!               entry_point, source_glob, touch_entry_point, extra_args
//! [dependency]  install, requirement, upgrade
//! [tools]       python, timeout_secs
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Logo shown in the generated documentation.
pub const DEFAULT_LOGO_URL: &str = "https://www.eudoxys.com/eudoxys.png";

/// Where the logo links to.
pub const DEFAULT_LOGO_LINK_URL: &str = "https://www.eudoxys.com/";

/// Global options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log what would run without running it.
    pub dry: bool,
    /// Console log level (0-5).
    pub output_log_level: LogLevel,
    /// File log level (0-5).
    pub file_log_level: LogLevel,
    /// Log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::DEBUG,
            log_file: None,
        }
    }
}

/// Documentation output and display options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocsConfig {
    /// Output directory, relative to the package root unless absolute.
    pub output_dir: PathBuf,
    pub logo_url: String,
    pub logo_link_url: String,
    /// Render mermaid diagrams.
    pub mermaid: bool,
    /// Render math.
    pub math: bool,
    /// File name of the entry point inside the package directory.
    pub entry_point: String,
    /// Glob (relative to the package directory) selecting source files.
    pub source_glob: String,
    /// Refresh the entry point's mtime after a successful build.
    pub touch_entry_point: bool,
    /// Extra arguments appended to the generator command line.
    pub extra_args: Vec<String>,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("docs"),
            logo_url: DEFAULT_LOGO_URL.to_string(),
            logo_link_url: DEFAULT_LOGO_LINK_URL.to_string(),
            mermaid: true,
            math: true,
            entry_point: "__init__.py".to_string(),
            source_glob: "*.py".to_string(),
            touch_entry_point: true,
            extra_args: Vec::new(),
        }
    }
}

/// How the documentation generator gets installed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DependencyConfig {
    /// Run the installer at all.
    pub install: bool,
    /// pip requirement specifier, e.g. `pdoc` or `pdoc==14.7.0`.
    pub requirement: String,
    /// Pass `--upgrade` so the latest matching version is always installed.
    pub upgrade: bool,
}

impl Default for DependencyConfig {
    fn default() -> Self {
        Self {
            install: true,
            requirement: "pdoc".to_string(),
            upgrade: true,
        }
    }
}

/// External tool locations and limits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    /// Python interpreter; looked up in PATH when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python: Option<PathBuf>,
    /// Kill pip or pdoc after this many seconds; no limit when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}
