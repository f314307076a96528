// pydocs: Python package documentation builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for pydocs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! pydocs [global options] [command]
//! build [ROOT]      (default when no command is given)
//! status [ROOT]
//! options
//! configs
//! version
//! ```

pub mod build;
pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::build::{BuildArgs, StatusArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Python package documentation builder
///
/// Regenerates API documentation for a Python package when its sources
/// change.
#[derive(Debug, Parser)]
#[command(
    name = "pydocs",
    author,
    version,
    about = "Python package documentation builder",
    long_about = "pydocs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Regenerates API documentation for a Python package with pdoc.\n\n\
                  Invoking `pydocs` in a package root builds <root>/docs when\n\
                  any source under <root>/<name>/ is newer than its __init__.py.\n\
                  See `pydocs <command> --help` for more information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  pydocs reads `pydocs.toml` from the package root if present.\n\
                  Additional files can be given with --config; they are loaded\n\
                  in order and override earlier ones. PYDOCS_<SECTION>__<KEY>\n\
                  environment variables come next, then --set, then flags."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their effective values.
    Options,

    /// Lists the configuration files that were loaded.
    Configs,

    /// Builds the documentation if it is out of date.
    Build(BuildArgs),

    /// Reports whether the documentation is out of date.
    Status(StatusArgs),
}

impl Cli {
    /// The command to run; `build` with default arguments when none is given.
    #[must_use]
    pub fn command_or_default(&self) -> Command {
        self.command
            .clone()
            .unwrap_or_else(|| Command::Build(BuildArgs::default()))
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
