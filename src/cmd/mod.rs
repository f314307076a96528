// pydocs: Python package documentation builder
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   build, status, options, configs
//! ```

pub mod build;
pub mod config;
pub mod status;
