// pydocs: Python package documentation builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! pdoc documentation generator.
//!
//! ```text
//! <python> -m pdoc <entry_point> -o <output_dir>
//!          --logo <url> --logo-link <url> [--mermaid] [--math] [extra...]
//! ```
//!
//! pdoc writes into the output directory itself; on failure whatever it
//! already wrote is left in place.

use crate::error::{DocGenerationError, DocsError, Result};
use tracing::info;

use super::{BoxFuture, DocGenerator, GenerateOptions, ToolContext};

/// Runs pdoc as a module of the configured interpreter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PdocGenerator;

impl PdocGenerator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Arguments passed to the interpreter.
    #[must_use]
    pub fn args(options: &GenerateOptions) -> Vec<String> {
        let mut args = vec![
            "-m".to_string(),
            "pdoc".to_string(),
            options.entry_point().display().to_string(),
            "-o".to_string(),
            options.output_dir().display().to_string(),
        ];
        if !options.logo_url().is_empty() {
            args.push("--logo".to_string());
            args.push(options.logo_url().to_string());
        }
        if !options.logo_link_url().is_empty() {
            args.push("--logo-link".to_string());
            args.push(options.logo_link_url().to_string());
        }
        if options.mermaid() {
            args.push("--mermaid".to_string());
        }
        if options.math() {
            args.push("--math".to_string());
        }
        args.extend(options.extra_args().iter().cloned());
        args
    }
}

impl DocGenerator for PdocGenerator {
    fn name(&self) -> &str {
        "pdoc"
    }

    fn generate<'a>(
        &'a self,
        ctx: &'a ToolContext,
        options: &'a GenerateOptions,
    ) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            let builder = ctx
                .python_command("pdoc")
                .map_err(DocsError::from)?
                .args(Self::args(options));

            if ctx.is_dry_run() {
                info!(cmd = %builder.command_line(), "[dry-run] Would generate documentation");
                return Ok(());
            }

            info!(
                entry_point = %options.entry_point().display(),
                output = %options.output_dir().display(),
                "Generating documentation"
            );
            let output = builder.run().await?;

            if !output.success() {
                return Err(DocsError::from(DocGenerationError::GeneratorFailed {
                    generator: self.name().to_string(),
                    entry_point: options.entry_point().display().to_string(),
                    code: output.exit_code(),
                    diagnostics: output.diagnostics().to_string(),
                })
                .into());
            }

            Ok(())
        })
    }
}

#[cfg(test)]
mod tests;
