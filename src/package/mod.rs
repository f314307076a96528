// pydocs: Python package documentation builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Python package layout and source discovery.
//!
//! ```text
//! <root>/                  package root, name = last path segment
//!   <name>/                package directory
//!     __init__.py          entry point
//!     *.py                 sources (source_glob, entry point excluded)
//!   docs/                  output (docs.output_dir)
//! ```

pub mod freshness;


use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::debug;
use wax::Program as _;

use crate::error::{DocsError, FsError, PackageError, Result};

/// Directories never scanned for sources.
const SKIP_DIRS: &[&str] = &["__pycache__", ".mypy_cache", ".pytest_cache"];

/// Derives the package name from the last segment of `root`.
///
/// # Errors
///
/// Returns `PackageError::UnnamedRoot` if `root` has no final segment
/// (e.g. `/`) or the segment is not valid UTF-8.
pub fn resolve_package_name(root: &Path) -> Result<String> {
    root.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| {
            DocsError::from(PackageError::UnnamedRoot {
                root: root.display().to_string(),
            })
            .into()
        })
}

/// Resolved paths of one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLayout {
    root: PathBuf,
    name: String,
    package_dir: PathBuf,
    entry_point: PathBuf,
}

impl PackageLayout {
    /// Resolves the layout of the package rooted at `root`.
    ///
    /// `root` is made absolute first so that `.` names the working directory.
    /// An existing root is canonicalized, so `link/..` follows the symlink;
    /// otherwise `.` and `..` are folded lexically. Nothing is required to
    /// exist yet; see [`Self::ensure_entry_point`].
    ///
    /// # Errors
    ///
    /// Returns an error if `root` cannot be made absolute or has no name.
    pub fn resolve(root: impl AsRef<Path>, entry_point_name: &str) -> Result<Self> {
        let root = root.as_ref();
        let root = match std::fs::canonicalize(root) {
            Ok(canonical) => canonical,
            Err(_) => {
                let absolute = std::path::absolute(root).map_err(|source| {
                    DocsError::from(FsError::IoError {
                        path: root.display().to_string(),
                        source,
                    })
                })?;
                normalize(&absolute)
            }
        };
        let name = resolve_package_name(&root)?;
        let package_dir = root.join(&name);
        let entry_point = package_dir.join(entry_point_name);
        debug!(root = %root.display(), package = %name, "resolved package layout");
        Ok(Self {
            root,
            name,
            package_dir,
            entry_point,
        })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn package_dir(&self) -> &Path {
        &self.package_dir
    }

    #[must_use]
    pub fn entry_point(&self) -> &Path {
        &self.entry_point
    }

    /// Resolves `dir` against the package root unless it is absolute.
    #[must_use]
    pub fn resolve_output_dir(&self, dir: &Path) -> PathBuf {
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            self.root.join(dir)
        }
    }

    /// Fails unless the package directory and the entry point exist.
    ///
    /// # Errors
    ///
    /// Returns `PackageError::PackageDirMissing` or
    /// `PackageError::MissingEntryPoint`.
    pub fn ensure_entry_point(&self) -> Result<()> {
        if !self.package_dir.is_dir() {
            return Err(DocsError::from(PackageError::PackageDirMissing {
                path: self.package_dir.display().to_string(),
            })
            .into());
        }
        if !self.entry_point.is_file() {
            return Err(DocsError::from(PackageError::MissingEntryPoint {
                path: self.entry_point.display().to_string(),
            })
            .into());
        }
        Ok(())
    }

    /// Source files matching `glob` (relative to the package directory),
    /// excluding the entry point, sorted by path.
    ///
    /// # Errors
    ///
    /// Returns an error if `glob` is invalid or the directory walk fails.
    pub fn find_sources(&self, glob: &str) -> Result<Vec<PathBuf>> {
        let glob = wax::Glob::new(glob).map_err(|e| {
            DocsError::from(crate::error::ConfigError::InvalidValue {
                section: "docs".to_string(),
                key: "source_glob".to_string(),
                message: e.to_string(),
            })
        })?;

        let mut walker = WalkBuilder::new(&self.package_dir);
        walker
            .standard_filters(false)
            .hidden(true)
            .filter_entry(|entry| {
                !(entry.file_type().is_some_and(|ft| ft.is_dir())
                    && entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| SKIP_DIRS.contains(&name)))
            });

        let mut sources = Vec::new();
        for entry in walker.build() {
            let entry = entry.map_err(|e| {
                DocsError::from(FsError::WalkFailed {
                    path: self.package_dir.display().to_string(),
                    message: e.to_string(),
                })
            })?;
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            let path = entry.into_path();
            if path == self.entry_point {
                continue;
            }
            if let Ok(relative) = path.strip_prefix(&self.package_dir)
                && glob.is_match(relative)
            {
                sources.push(path);
            }
        }
        sources.sort();
        debug!(package = %self.name, count = sources.len(), "found sources");
        Ok(sources)
    }
}

/// Drops `.` components and folds `..` lexically, without consulting the
/// filesystem.
fn normalize(path: &Path) -> PathBuf {
    use std::path::Component;
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
