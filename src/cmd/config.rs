// pydocs: Python package documentation builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config loading and the config-related commands.

use std::path::Path;

use crate::cli::global::GlobalOptions;
use crate::config::loader::ConfigLoader;
use crate::config::{CONFIG_FILE_NAME, Config, ENV_PREFIX};
use crate::error::Result;

/// Assembles the configuration sources for a package rooted at `root`.
///
/// Order: `<root>/pydocs.toml`, `--config` files, environment, then
/// `--set` and the flag-derived `overrides`.
///
/// # Errors
///
/// Returns `ConfigError::InvalidOverride` for a malformed `--set` value.
pub fn build_config_loader(
    global: &GlobalOptions,
    root: &Path,
    overrides: &[String],
) -> Result<ConfigLoader> {
    build_config_loader_with_prefix(global, root, overrides, ENV_PREFIX)
}

/// [`build_config_loader`] reading `<env_prefix>_SECTION__KEY` variables.
pub(crate) fn build_config_loader_with_prefix(
    global: &GlobalOptions,
    root: &Path,
    overrides: &[String],
    env_prefix: &str,
) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new().add_toml_file_optional(root.join(CONFIG_FILE_NAME));
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(env_prefix);
    for option in global.to_config_overrides().iter().chain(overrides) {
        loader = loader.set_override_str(option)?;
    }
    Ok(loader)
}

/// Display current configuration options.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Display loaded configuration files.
pub fn run_configs_command(config_files: &[String]) {
    if config_files.is_empty() {
        println!("No configuration files loaded");
    } else {
        for line in config_files {
            println!("{line}");
        }
    }
}
