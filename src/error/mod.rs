// pydocs: Python package documentation builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!                  DocsError
//!                      |
//!   +-------+--------+-+------+--------+-----+
//!   |       |        |        |        |     |
//!   v       v        v        v        v     v
//!  Cfg   Package  Install  Generate  Proc    Fs
//!  Box     Box      Box      Box      Box   Box
//!
//! Sub-errors:
//!   Package   UnnamedRoot, PackageDirMissing, MissingEntryPoint
//!   Install   InterpreterNotFound, InstallFailed
//!   Generate  GeneratorFailed
//!   Process   ExecutableNotFound, SpawnFailed, Timeout
//! ```
//!
//! Handlers propagate `anyhow::Error`; `main` downcasts back to [`DocsError`]
//! to pick the exit code of the failing external step.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`DocsError`].
pub type DocsResult<T> = std::result::Result<T, DocsError>;

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum DocsError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Package layout error.
    #[error("package error: {0}")]
    Package(#[from] Box<PackageError>),

    /// The documentation generator could not be installed or upgraded.
    #[error("dependency install error: {0}")]
    DependencyInstall(#[from] Box<DependencyInstallError>),

    /// The documentation generator failed.
    #[error("doc generation error: {0}")]
    DocGeneration(#[from] Box<DocGenerationError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),
}

impl DocsError {
    /// Exit code the process should terminate with for this error.
    ///
    /// Failures of an external step propagate that step's exit code when it
    /// is a usable non-zero value; everything else maps to 1.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        let code = match self {
            Self::DependencyInstall(e) => e.exit_code(),
            Self::DocGeneration(e) => e.exit_code(),
            _ => None,
        };
        code.and_then(|c| u8::try_from(c).ok())
            .filter(|c| *c != 0)
            .unwrap_or(1)
    }

    /// Finds the [`DocsError`] inside an `anyhow` chain, if any.
    #[must_use]
    pub fn find_in(err: &anyhow::Error) -> Option<&Self> {
        err.chain().find_map(|cause| cause.downcast_ref::<Self>())
    }
}

// --- From implementations for boxing ---

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for DocsError {
                fn from(err: $error) -> Self {
                    DocsError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    PackageError => Package,
    DependencyInstallError => DependencyInstall,
    DocGenerationError => DocGeneration,
    ProcessError => Process,
    FsError => Fs,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse a configuration source.
    #[error("failed to parse config '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Malformed `--set` override.
    #[error("invalid override '{0}', expected 'section.key=value'")]
    InvalidOverride(String),
}

// --- Package Errors ---

/// Errors resolving the package layout.
#[derive(Debug, Error)]
pub enum PackageError {
    /// The package root has no final path segment to name the package after.
    #[error("cannot derive a package name from '{root}'")]
    UnnamedRoot { root: String },

    /// The package directory named after the root does not exist.
    #[error("package directory not found: {path}")]
    PackageDirMissing { path: String },

    /// The entry-point file does not exist, so the build has no prerequisite.
    #[error("entry point not found: {path}")]
    MissingEntryPoint { path: String },
}

// --- Dependency Errors ---

/// The documentation generator could not be installed or upgraded.
#[derive(Debug, Error)]
pub enum DependencyInstallError {
    /// No Python interpreter to run the installer with.
    #[error("python interpreter not found: {0}")]
    InterpreterNotFound(#[source] ProcessError),

    /// The installer exited with a failure.
    #[error("installing '{requirement}' failed with code {code}\n{diagnostics}")]
    InstallFailed {
        requirement: String,
        code: i32,
        diagnostics: String,
    },
}

impl DependencyInstallError {
    const fn exit_code(&self) -> Option<i32> {
        match self {
            Self::InterpreterNotFound(_) => None,
            Self::InstallFailed { code, .. } => Some(*code),
        }
    }
}

// --- Generation Errors ---

/// The documentation generator exited with a failure.
#[derive(Debug, Error)]
pub enum DocGenerationError {
    /// Non-zero exit; `diagnostics` is the generator's own output.
    #[error("{generator} failed on '{entry_point}' with code {code}\n{diagnostics}")]
    GeneratorFailed {
        generator: String,
        entry_point: String,
        code: i32,
        diagnostics: String,
    },
}

impl DocGenerationError {
    const fn exit_code(&self) -> Option<i32> {
        match self {
            Self::GeneratorFailed { code, .. } => Some(*code),
        }
    }
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process timed out.
    #[error("process '{command}' timed out after {timeout_secs} seconds")]
    Timeout { command: String, timeout_secs: u64 },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed.
    #[error("failed to walk '{path}': {message}")]
    WalkFailed { path: String, message: String },
}
