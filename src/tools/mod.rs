// pydocs: Python package documentation builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! External tools behind narrow interfaces.
//!
//! ```text
//! DocBuilder --> ToolContext --> DependencyInstaller  (pip install --upgrade pdoc)
//!                            --> DocGenerator         (python -m pdoc ...)
//!                                     |
//!                                     v
//!                               ProcessBuilder
//! ```
//!
//! Both traits return boxed futures so the builder can hold either the real
//! tools or test doubles.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use bon::Builder;
use futures_util::future::BoxFuture;

use crate::config::Config;
use crate::core::process::builder::ProcessBuilder;
use crate::error::{ProcessError, Result};

pub mod pdoc;
pub mod pip;

/// Interpreters tried, in order, when `tools.python` is not configured.
const PYTHON_CANDIDATES: &[&str] = &["python3", "python"];

/// Forces UTF-8 on the tools' stdout and stderr regardless of locale.
const PYTHON_IO_ENCODING: (&str, &str) = ("PYTHONIOENCODING", "utf-8");

/// Context shared by the tools of one build.
#[derive(Clone)]
pub struct ToolContext {
    config: Arc<Config>,
    dry_run: bool,
    working_dir: Option<PathBuf>,
}

impl ToolContext {
    #[must_use]
    pub const fn new(config: Arc<Config>, dry_run: bool) -> Self {
        Self {
            config,
            dry_run,
            working_dir: None,
        }
    }

    /// Runs the tools from `dir`, normally the package root.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    #[must_use]
    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    #[must_use]
    pub const fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// When true, tools log their command lines instead of running them.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// The Python interpreter: `tools.python`, else the first candidate in PATH.
    ///
    /// A dry run never executes it, so there it falls back to the bare
    /// candidate name for display.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` if no interpreter is found.
    pub fn python(&self) -> std::result::Result<PathBuf, ProcessError> {
        resolve_python(
            self.config.tools.python.as_deref(),
            self.dry_run,
            ProcessBuilder::find,
        )
    }

    /// A process running the interpreter from the working directory, with
    /// UTF-8 output and the `tools.timeout_secs` limit applied.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` if no interpreter is found.
    pub fn python_command(
        &self,
        name: &str,
    ) -> std::result::Result<ProcessBuilder, ProcessError> {
        let mut builder = ProcessBuilder::new(self.python()?)
            .name(name)
            .env(PYTHON_IO_ENCODING.0, PYTHON_IO_ENCODING.1)
            .capture_output();
        if let Some(dir) = &self.working_dir {
            builder = builder.cwd(dir);
        }
        if let Some(secs) = self.config.tools.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(builder)
    }
}

fn resolve_python(
    configured: Option<&Path>,
    dry_run: bool,
    lookup: impl Fn(&str) -> Option<PathBuf>,
) -> std::result::Result<PathBuf, ProcessError> {
    if let Some(python) = configured {
        return Ok(python.to_path_buf());
    }
    if let Some(python) = PYTHON_CANDIDATES.iter().find_map(|name| lookup(name)) {
        return Ok(python);
    }
    if dry_run {
        return Ok(PathBuf::from(PYTHON_CANDIDATES[0]));
    }
    Err(ProcessError::ExecutableNotFound {
        name: PYTHON_CANDIDATES.join(" or "),
    })
}

/// Installs or upgrades the documentation generator.
pub trait DependencyInstaller: Send + Sync {
    /// Short name for logs, e.g. "pip".
    fn name(&self) -> &str;

    /// Makes sure the generator is installed.
    ///
    /// Failures are reported as `DependencyInstallError`; a killed run as
    /// `ProcessError::Timeout`.
    fn ensure<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>>;
}

/// Produces a documentation tree from a package entry point.
pub trait DocGenerator: Send + Sync {
    /// Short name for logs, e.g. "pdoc".
    fn name(&self) -> &str;

    /// Writes documentation for `options.entry_point()` into
    /// `options.output_dir()`.
    ///
    /// Failures are reported as `DocGenerationError` carrying the tool's own
    /// diagnostics; a killed run as `ProcessError::Timeout`.
    fn generate<'a>(
        &'a self,
        ctx: &'a ToolContext,
        options: &'a GenerateOptions,
    ) -> BoxFuture<'a, Result<()>>;
}

/// What to document and how to display it.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct GenerateOptions {
    #[builder(into)]
    entry_point: PathBuf,
    #[builder(into)]
    output_dir: PathBuf,
    /// Logo image; omitted from the command line when empty.
    #[builder(into, default)]
    logo_url: String,
    /// Logo link target; omitted from the command line when empty.
    #[builder(into, default)]
    logo_link_url: String,
    #[builder(default = true)]
    mermaid: bool,
    #[builder(default = true)]
    math: bool,
    #[builder(default)]
    extra_args: Vec<String>,
}

impl GenerateOptions {
    #[must_use]
    pub fn entry_point(&self) -> &Path {
        &self.entry_point
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    #[must_use]
    pub fn logo_url(&self) -> &str {
        &self.logo_url
    }

    #[must_use]
    pub fn logo_link_url(&self) -> &str {
        &self.logo_link_url
    }

    #[must_use]
    pub const fn mermaid(&self) -> bool {
        self.mermaid
    }

    #[must_use]
    pub const fn math(&self) -> bool {
        self.math
    }

    #[must_use]
    pub fn extra_args(&self) -> &[String] {
        &self.extra_args
    }
}

#[cfg(test)]
pub(crate) mod test_utils;
