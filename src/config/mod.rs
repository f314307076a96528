// pydocs: Python package documentation builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for pydocs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. pydocs.toml in the package root (optional)
//! 3. --config FILE (repeatable)
//! 4. PYDOCS_* env vars
//! 5. --set section.key=value
//! 6. build command flags (--output, --logo, --no-math, ...)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! PYDOCS_GLOBAL__DRY=true            → global.dry = true
//! PYDOCS_DOCS__OUTPUT_DIR=site       → docs.output_dir = "site"
//! PYDOCS_DEPENDENCY__UPGRADE=false   → dependency.upgrade = false
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use types::{DependencyConfig, DocsConfig, GlobalConfig, ToolsConfig};

/// File looked up in the package root.
pub const CONFIG_FILE_NAME: &str = "pydocs.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "PYDOCS";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub global: GlobalConfig,
    pub docs: DocsConfig,
    pub dependency: DependencyConfig,
    pub tools: ToolsConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pydocs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("pydocs.toml")
    ///     .with_env_prefix("PYDOCS")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Effective options as aligned `key = value` lines, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_docs_options(&mut options);
        self.format_dependency_options(&mut options);
        self.format_tools_options(&mut options);

        let max_key_len = options.keys().map(|k: &&str| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<&'static str, String>) {
        let global = &self.global;
        options.insert("global.dry", global.dry.to_string());
        options.insert(
            "global.output_log_level",
            global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level",
            global.file_log_level.as_u8().to_string(),
        );
        if let Some(log_file) = &global.log_file {
            options.insert("global.log_file", log_file.display().to_string());
        }
    }

    fn format_docs_options(&self, options: &mut BTreeMap<&'static str, String>) {
        let docs = &self.docs;
        options.insert("docs.output_dir", docs.output_dir.display().to_string());
        options.insert("docs.logo_url", docs.logo_url.clone());
        options.insert("docs.logo_link_url", docs.logo_link_url.clone());
        options.insert("docs.mermaid", docs.mermaid.to_string());
        options.insert("docs.math", docs.math.to_string());
        options.insert("docs.entry_point", docs.entry_point.clone());
        options.insert("docs.source_glob", docs.source_glob.clone());
        options.insert(
            "docs.touch_entry_point",
            docs.touch_entry_point.to_string(),
        );
        if !docs.extra_args.is_empty() {
            options.insert("docs.extra_args", docs.extra_args.join(" "));
        }
    }

    fn format_dependency_options(&self, options: &mut BTreeMap<&'static str, String>) {
        let dependency = &self.dependency;
        options.insert("dependency.install", dependency.install.to_string());
        options.insert("dependency.requirement", dependency.requirement.clone());
        options.insert("dependency.upgrade", dependency.upgrade.to_string());
    }

    fn format_tools_options(&self, options: &mut BTreeMap<&'static str, String>) {
        let python = self
            .tools
            .python
            .as_ref()
            .map_or_else(|| "<PATH>".to_string(), |p| p.display().to_string());
        options.insert("tools.python", python);
        let timeout = self
            .tools
            .timeout_secs
            .map_or_else(|| "<none>".to_string(), |secs| secs.to_string());
        options.insert("tools.timeout_secs", timeout);
    }
}
