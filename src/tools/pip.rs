// pydocs: Python package documentation builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! pip installer for the documentation generator.
//!
//! ```text
//! <python> -m pip install [--upgrade] <requirement>
//! ```
//!
//! With the default `upgrade = true` every build pulls the newest release of
//! the requirement, so output can change between runs when the generator
//! publishes a new version. Pin it with e.g. `requirement = "pdoc==14.7.0"`.

use crate::config::types::DependencyConfig;
use crate::error::{DependencyInstallError, DocsError, Result};
use tracing::{debug, info};

use super::{BoxFuture, DependencyInstaller, ToolContext};

/// Installs a requirement with `python -m pip`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipInstaller {
    requirement: String,
    upgrade: bool,
}

impl PipInstaller {
    #[must_use]
    pub fn new(requirement: impl Into<String>) -> Self {
        Self {
            requirement: requirement.into(),
            upgrade: true,
        }
    }

    #[must_use]
    pub fn from_config(config: &DependencyConfig) -> Self {
        Self::new(config.requirement.clone()).upgrade(config.upgrade)
    }

    #[must_use]
    pub const fn upgrade(mut self, upgrade: bool) -> Self {
        self.upgrade = upgrade;
        self
    }

    #[must_use]
    pub fn requirement(&self) -> &str {
        &self.requirement
    }

    /// Arguments passed to the interpreter.
    #[must_use]
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "-m".to_string(),
            "pip".to_string(),
            "install".to_string(),
            "--disable-pip-version-check".to_string(),
        ];
        if self.upgrade {
            args.push("--upgrade".to_string());
        }
        args.push(self.requirement.clone());
        args
    }
}

impl DependencyInstaller for PipInstaller {
    fn name(&self) -> &str {
        "pip"
    }

    fn ensure<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            let builder = ctx
                .python_command("pip")
                .map_err(|e| DocsError::from(DependencyInstallError::InterpreterNotFound(e)))?
                .args(self.args());

            if ctx.is_dry_run() {
                info!(cmd = %builder.command_line(), "[dry-run] Would install dependency");
                return Ok(());
            }

            info!(requirement = %self.requirement, upgrade = self.upgrade, "Installing dependency");
            let output = builder.run().await?;

            if !output.success() {
                return Err(DocsError::from(DependencyInstallError::InstallFailed {
                    requirement: self.requirement.clone(),
                    code: output.exit_code(),
                    diagnostics: output.diagnostics().to_string(),
                })
                .into());
            }

            debug!(requirement = %self.requirement, "Dependency ready");
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests;
