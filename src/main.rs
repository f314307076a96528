// pydocs: Python package documentation builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Build (default) | Status | Options | Configs | Version
//! ```

use std::path::Path;
use std::process::ExitCode;

use pydocs::cli::{self, Command};
use pydocs::cmd::build::run_build_command;
use pydocs::cmd::config::{build_config_loader, run_configs_command, run_options_command};
use pydocs::cmd::status::run_status_command;
use pydocs::config::Config;
use pydocs::error::{DocsError, Result};
use pydocs::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = cli::parse();
    let command = cli.command_or_default();

    match run(&cli, &command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(DocsError::find_in(&e).map_or(1, DocsError::exit_code))
        }
    }
}

async fn run(cli: &cli::Cli, command: &Command) -> Result<()> {
    if matches!(command, Command::Version) {
        handle_version_command();
        return Ok(());
    }

    let (root, overrides) = match command {
        Command::Build(args) => (args.root.as_deref(), args.to_config_overrides()),
        Command::Status(args) => (args.root.as_deref(), Vec::new()),
        _ => (None, Vec::new()),
    };
    let root = root.unwrap_or_else(|| Path::new("."));
    let loader = build_config_loader(&cli.global, root, &overrides)?;
    let loaded_files = loader.format_loaded_files();
    let config = loader.build()?;

    let _log_guard = init_logging(&build_log_config(&config))?;
    tracing::debug!(files = ?loaded_files, "loaded configuration");

    match command {
        Command::Version => {
            handle_version_command();
            Ok(())
        }
        Command::Options => {
            run_options_command(&config);
            Ok(())
        }
        Command::Configs => {
            run_configs_command(&loaded_files);
            Ok(())
        }
        Command::Build(args) => run_build_command(args, &config).await.map(|_| ()),
        Command::Status(args) => run_status_command(args, &config),
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_log_config(config: &Config) -> LogConfig {
    let global = &config.global;
    LogConfig::builder()
        .with_console_level(global.output_log_level)
        .with_file_level(global.file_log_level)
        .maybe_with_log_file(global.log_file.clone())
        .build()
}

