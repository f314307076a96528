// pydocs: Python package documentation builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Documentation build pipeline.
//!
//! ```text
//! DocBuilder::new(layout, docs, installer, generator)
//!   .with_force()  .with_install()
//!   .run(&ctx).await
//!       ensure entry point --> staleness --> install --> generate --> touch
//!            |                   |
//!            v                   v
//!   MissingEntryPoint        UpToDate
//! ```
//!
//! The entry point is checked before any tool runs, so a broken layout never
//! creates or modifies the output directory.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::types::DocsConfig;
use crate::error::Result;
use crate::package::PackageLayout;
use crate::package::freshness::{SourceSet, touch};
use crate::tools::{DependencyInstaller, DocGenerator, GenerateOptions, ToolContext};

/// Result of a successful [`DocBuilder::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// The entry point is at least as new as every source; nothing ran.
    UpToDate,
    /// Documentation was written to `output_dir`.
    Generated { output_dir: PathBuf },
    /// Commands were logged but not executed.
    DryRun,
}

impl BuildOutcome {
    #[must_use]
    pub const fn is_up_to_date(&self) -> bool {
        matches!(self, Self::UpToDate)
    }
}

/// Builds the documentation of one package.
pub struct DocBuilder<I, G> {
    layout: PackageLayout,
    docs: DocsConfig,
    installer: I,
    generator: G,
    force: bool,
    install: bool,
}

impl<I, G> DocBuilder<I, G>
where
    I: DependencyInstaller,
    G: DocGenerator,
{
    #[must_use]
    pub const fn new(layout: PackageLayout, docs: DocsConfig, installer: I, generator: G) -> Self {
        Self {
            layout,
            docs,
            installer,
            generator,
            force: false,
            install: true,
        }
    }

    /// Rebuild even when the entry point is up to date.
    #[must_use]
    pub const fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Run the dependency installer before generating.
    #[must_use]
    pub const fn with_install(mut self, install: bool) -> Self {
        self.install = install;
        self
    }

    #[must_use]
    pub const fn layout(&self) -> &PackageLayout {
        &self.layout
    }

    /// Absolute output directory.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.layout.resolve_output_dir(&self.docs.output_dir)
    }

    /// Options handed to the generator.
    #[must_use]
    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions::builder()
            .entry_point(self.layout.entry_point())
            .output_dir(self.output_dir())
            .logo_url(self.docs.logo_url.as_str())
            .logo_link_url(self.docs.logo_link_url.as_str())
            .mermaid(self.docs.mermaid)
            .math(self.docs.math)
            .extra_args(self.docs.extra_args.clone())
            .build()
    }

    /// Runs the pipeline.
    ///
    /// # Errors
    ///
    /// Returns `PackageError::MissingEntryPoint` (or `PackageDirMissing`)
    /// before any tool runs, `DependencyInstallError` if the installer fails
    /// and `DocGenerationError` if the generator fails.
    pub async fn run(&self, ctx: &ToolContext) -> Result<BuildOutcome> {
        self.layout.ensure_entry_point()?;

        let sources = SourceSet::collect(&self.layout, &self.docs.source_glob)?;
        let report = sources.report(self.layout.name());
        debug!(
            package = %report.package,
            sources = report.source_count,
            stale = report.stale,
            "checked entry point"
        );

        if !report.stale && !self.force {
            info!(package = %report.package, "Documentation is up to date");
            return Ok(BuildOutcome::UpToDate);
        }
        match (&report.newest_source, report.stale) {
            (Some(newest), _) => {
                info!(package = %report.package, newest = %newest.display(), "Sources changed, rebuilding");
            }
            (None, true) => info!(package = %report.package, "Rebuilding"),
            (None, false) => info!(package = %report.package, "Forced rebuild"),
        }

        if self.install {
            self.installer.ensure(ctx).await?;
        } else {
            debug!(installer = self.installer.name(), "Skipping dependency install");
        }

        let options = self.generate_options();
        self.generator.generate(ctx, &options).await?;

        if ctx.is_dry_run() {
            return Ok(BuildOutcome::DryRun);
        }

        if self.docs.touch_entry_point {
            refresh_entry_point(self.layout.entry_point())?;
        }

        info!(
            package = %report.package,
            output = %options.output_dir().display(),
            "Documentation generated"
        );
        Ok(BuildOutcome::Generated {
            output_dir: options.output_dir().to_path_buf(),
        })
    }
}

fn refresh_entry_point(entry_point: &Path) -> Result<()> {
    touch(entry_point)?;
    debug!(entry_point = %entry_point.display(), "refreshed entry point mtime");
    Ok(())
}
