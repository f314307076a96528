// pydocs: Python package documentation builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Status command: reports staleness without running any tool.

use std::path::Path;

use anyhow::Context;

use crate::cli::build::StatusArgs;
use crate::config::Config;
use crate::error::{DocsError, PackageError, Result};
use crate::package::PackageLayout;
use crate::package::freshness::{Freshness, SourceSet};

/// Main handler for status command.
///
/// # Errors
///
/// Returns an error if the package directory does not exist or the report
/// cannot be serialized.
pub fn run_status_command(args: &StatusArgs, config: &Config) -> Result<()> {
    let root = args.root.as_deref().unwrap_or_else(|| Path::new("."));
    let report = status_report(root, config)?;

    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .context("failed to serialize status report")?;
        println!("{json}");
    } else {
        for line in format_status(&report) {
            println!("{line}");
        }
    }
    Ok(())
}

/// Staleness report for the package rooted at `root`.
///
/// A missing entry point is reported as stale rather than an error; the
/// sources are counted either way.
///
/// # Errors
///
/// Returns `PackageError::PackageDirMissing` if `<root>/<name>` is not a
/// directory.
pub fn status_report(root: &Path, config: &Config) -> Result<Freshness> {
    let layout = PackageLayout::resolve(root, &config.docs.entry_point)?;
    if !layout.package_dir().is_dir() {
        return Err(DocsError::from(PackageError::PackageDirMissing {
            path: layout.package_dir().display().to_string(),
        })
        .into());
    }

    let sources = SourceSet::collect(&layout, &config.docs.source_glob)?;
    Ok(sources.report(layout.name()))
}

/// Report as aligned `key = value` lines.
#[must_use]
pub fn format_status(report: &Freshness) -> Vec<String> {
    let newest = report
        .newest_source
        .as_ref()
        .map_or_else(|| "-".to_string(), |p| p.display().to_string());
    let rows = [
        ("package", report.package.clone()),
        ("entry_point", report.entry_point.display().to_string()),
        ("exists", report.entry_point_exists.to_string()),
        ("sources", report.source_count.to_string()),
        ("newest_source", newest),
        ("stale", report.stale.to_string()),
    ];
    let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(key, value)| format!("{key:<width$} = {value}"))
        .collect()
}
