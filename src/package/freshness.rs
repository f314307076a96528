// pydocs: Python package documentation builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Staleness check, make style.
//!
//! ```text
//! entry point (target)  vs  other sources (prerequisites)
//!   missing                 --> stale
//!   any source newer        --> stale
//!   otherwise               --> fresh
//! ```
//!
//! [`needs_rebuild`] only looks at the stamps it is given; reading the
//! filesystem happens in [`FileStamp::read`] and [`SourceSet::collect`].

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::Serialize;

use super::PackageLayout;
use crate::error::Result;

/// A path and its modification time (`None` when it cannot be read).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStamp {
    path: PathBuf,
    modified: Option<SystemTime>,
}

impl FileStamp {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, modified: Option<SystemTime>) -> Self {
        Self {
            path: path.into(),
            modified,
        }
    }

    /// Reads the modification time of `path`; missing files get `None`.
    #[must_use]
    pub fn read(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let modified = std::fs::metadata(&path)
            .and_then(|meta| meta.modified())
            .ok();
        Self { path, modified }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    #[must_use]
    pub const fn exists(&self) -> bool {
        self.modified.is_some()
    }
}

/// Returns true if `entry_point` is missing or strictly older than any of
/// `sources`. Sources without a timestamp are ignored.
#[must_use]
pub fn needs_rebuild(entry_point: &FileStamp, sources: &[FileStamp]) -> bool {
    newest_newer_source(entry_point, sources).is_some() || !entry_point.exists()
}

/// The newest source that is newer than the entry point, if any.
fn newest_newer_source<'a>(
    entry_point: &FileStamp,
    sources: &'a [FileStamp],
) -> Option<&'a FileStamp> {
    let target = entry_point.modified()?;
    sources
        .iter()
        .filter(|s| s.modified().is_some_and(|m| m > target))
        .max_by_key(|s| s.modified())
}

/// Entry point plus the other sources of a package.
#[derive(Debug, Clone)]
pub struct SourceSet {
    entry_point: FileStamp,
    sources: Vec<FileStamp>,
}

impl SourceSet {
    #[must_use]
    pub const fn new(entry_point: FileStamp, sources: Vec<FileStamp>) -> Self {
        Self {
            entry_point,
            sources,
        }
    }

    /// Stamps the entry point and every file matching `source_glob`.
    ///
    /// # Errors
    ///
    /// Returns an error if the source glob is invalid or the walk fails.
    pub fn collect(layout: &PackageLayout, source_glob: &str) -> Result<Self> {
        let sources = layout
            .find_sources(source_glob)?
            .into_iter()
            .map(FileStamp::read)
            .collect();
        Ok(Self::new(FileStamp::read(layout.entry_point()), sources))
    }

    #[must_use]
    pub const fn entry_point(&self) -> &FileStamp {
        &self.entry_point
    }

    #[must_use]
    pub fn sources(&self) -> &[FileStamp] {
        &self.sources
    }

    #[must_use]
    pub fn needs_rebuild(&self) -> bool {
        needs_rebuild(&self.entry_point, &self.sources)
    }

    /// Summary used for logging and `pydocs status`.
    #[must_use]
    pub fn report(&self, package: &str) -> Freshness {
        Freshness {
            package: package.to_string(),
            entry_point: self.entry_point.path().to_path_buf(),
            entry_point_exists: self.entry_point.exists(),
            source_count: self.sources.len(),
            newest_source: newest_newer_source(&self.entry_point, &self.sources)
                .map(|s| s.path().to_path_buf()),
            stale: self.needs_rebuild(),
        }
    }
}

/// Staleness summary of one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Freshness {
    pub package: String,
    pub entry_point: PathBuf,
    pub entry_point_exists: bool,
    pub source_count: usize,
    /// Newest source that is newer than the entry point.
    pub newest_source: Option<PathBuf>,
    pub stale: bool,
}

/// Sets the modification time of `path` to now.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or its time cannot be set.
pub fn touch(path: &Path) -> Result<()> {
    use anyhow::Context;
    let file = std::fs::OpenOptions::new()
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    file.set_modified(SystemTime::now())
        .with_context(|| format!("failed to update mtime of {}", path.display()))?;
    Ok(())
}
