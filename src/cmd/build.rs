// pydocs: Python package documentation builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build command implementation for pydocs.

use std::path::Path;
use std::sync::Arc;

use crate::cli::build::BuildArgs;
use crate::config::Config;
use crate::error::Result;
use crate::package::PackageLayout;
use crate::pipeline::{BuildOutcome, DocBuilder};
use crate::tools::ToolContext;
use crate::tools::pdoc::PdocGenerator;
use crate::tools::pip::PipInstaller;

/// Main handler for build command.
///
/// `config` already carries the flag overrides from `args`; only the root
/// and `--force` are read from `args` directly.
///
/// # Errors
///
/// Returns an error if the package layout is invalid, the entry point is
/// missing, or the installer or generator fails.
pub async fn run_build_command(args: &BuildArgs, config: &Config) -> Result<BuildOutcome> {
    let root = args.root.as_deref().unwrap_or_else(|| Path::new("."));
    let layout = PackageLayout::resolve(root, &config.docs.entry_point)?;

    let config = Arc::new(config.clone());
    let ctx = ToolContext::new(Arc::clone(&config), config.global.dry)
        .with_working_dir(layout.root());

    let builder = DocBuilder::new(
        layout,
        config.docs.clone(),
        PipInstaller::from_config(&config.dependency),
        PdocGenerator::new(),
    )
    .with_force(args.force)
    .with_install(config.dependency.install);

    match builder.run(&ctx).await {
        Ok(outcome) => {
            if outcome == BuildOutcome::DryRun {
                tracing::info!("Dry run complete, nothing was executed");
            }
            Ok(outcome)
        }
        Err(e) => {
            tracing::error!(package = %builder.layout().name(), "Build failed");
            Err(e)
        }
    }
}
