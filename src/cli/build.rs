// pydocs: Python package documentation builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build and status command arguments.
//!
//! # Flag Effects
//!
//! ```text
//! --output/--logo/--logo-link     docs.output_dir/logo_url/logo_link_url
//! --no-mermaid/--no-math          docs.mermaid/math = false
//! --skip-install                  dependency.install = false
//! --no-upgrade/--requirement      dependency.upgrade/requirement
//! --force                         rebuild even if up to date (not a config key)
//! ```

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `build` command.
#[derive(Debug, Clone, Default, Args)]
pub struct BuildArgs {
    /// Package root; its last path segment names the package.
    /// Defaults to the current directory.
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// Output directory, relative to the package root unless absolute.
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Logo image URL; pass an empty string to omit the logo.
    #[arg(long, value_name = "URL")]
    pub logo: Option<String>,

    /// URL the logo links to.
    #[arg(long = "logo-link", value_name = "URL")]
    pub logo_link: Option<String>,

    /// Disables mermaid diagram rendering.
    #[arg(long = "no-mermaid")]
    pub no_mermaid: bool,

    /// Disables math rendering.
    #[arg(long = "no-math")]
    pub no_math: bool,

    /// Rebuilds even when the documentation is up to date.
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Does not run the dependency installer.
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Installs the requirement without --upgrade.
    #[arg(long = "no-upgrade")]
    pub no_upgrade: bool,

    /// pip requirement for the generator, such as 'pdoc==14.7.0'.
    #[arg(long, value_name = "SPEC")]
    pub requirement: Option<String>,
}

impl BuildArgs {
    /// Converts the build flags to `section.key=value` overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let mut overrides = Vec::new();

        if let Some(ref output) = self.output {
            overrides.push(format!("docs.output_dir={}", output.display()));
        }
        if let Some(ref logo) = self.logo {
            overrides.push(format!("docs.logo_url={logo}"));
        }
        if let Some(ref link) = self.logo_link {
            overrides.push(format!("docs.logo_link_url={link}"));
        }
        if self.no_mermaid {
            overrides.push("docs.mermaid=false".to_string());
        }
        if self.no_math {
            overrides.push("docs.math=false".to_string());
        }
        if self.skip_install {
            overrides.push("dependency.install=false".to_string());
        }
        if self.no_upgrade {
            overrides.push("dependency.upgrade=false".to_string());
        }
        if let Some(ref requirement) = self.requirement {
            overrides.push(format!("dependency.requirement={requirement}"));
        }

        overrides
    }
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, Args)]
pub struct StatusArgs {
    /// Package root; defaults to the current directory.
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// Prints the report as JSON.
    #[arg(long)]
    pub json: bool,
}
