// env-manage: project .env helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options.
//!
//! # Option Precedence
//!
//! ```text
//! --root DIR        ← project root (ENV_MANAGE_ROOT, default: cwd)
//! --config FILE     ← extra settings file
//! --example NAME    ← files.example
//! --target NAME     ← files.target
//! --require KEY     ← keys.required (repeat or a,b)
//! --key KEY         ← keys.display  (repeat or a,b)
//! --log-level N     ← console verbosity (0-5)
//! --file-log-level N ← log file verbosity (0-5)
//!
//! Precedence: CLI flags > ENV_MANAGE_* > --config > env-manage.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::logging::{LogConfig, LogLevel};

/// Global options.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Project root holding the example and target files.
    #[arg(short = 'C', long = "root", value_name = "DIR", env = "ENV_MANAGE_ROOT")]
    pub root: Option<PathBuf>,

    /// Additional TOML settings file, loaded after `<root>/env-manage.toml`.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Example file name, relative to the root.
    #[arg(long, value_name = "NAME")]
    pub example: Option<PathBuf>,

    /// Target env file name, relative to the root.
    #[arg(long, value_name = "NAME")]
    pub target: Option<PathBuf>,

    /// Key that `validate` requires. Repeat or separate with commas.
    #[arg(
        short = 'r',
        long = "require",
        value_name = "KEY",
        value_delimiter = ',',
        action = clap::ArgAction::Append
    )]
    pub required: Vec<String>,

    /// Key that `show` prints. Repeat or separate with commas.
    #[arg(
        short = 'k',
        long = "key",
        value_name = "KEY",
        value_delimiter = ',',
        action = clap::ArgAction::Append
    )]
    pub display: Vec<String>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(
        short = 'l',
        long = "log-level",
        value_name = "LEVEL",
        env = "ENV_MANAGE_LOG_LEVEL",
        value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// Log level for the log file, defaults to 4 (debug).
    #[arg(
        long = "file-log-level",
        value_name = "LEVEL",
        value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Also write logs to this file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Logging setup for these options.
    ///
    /// Event targets are shown on the console from debug level up.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        let console_level = self
            .log_level
            .and_then(LogLevel::from_u8)
            .unwrap_or_default();

        LogConfig::builder()
            .with_console_level(console_level)
            .maybe_with_file_level(self.file_log_level.and_then(LogLevel::from_u8))
            .maybe_with_log_file(self.log_file.as_ref().map(|p| p.display().to_string()))
            .with_show_target(console_level >= LogLevel::DEBUG)
            .build()
    }

    /// Converts command-line options to settings overrides.
    ///
    /// Only options that were given produce an override.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(&'static str, config::Value)> {
        let mut overrides: Vec<(&'static str, config::Value)> = Vec::new();

        if let Some(ref example) = self.example {
            overrides.push(("files.example", example.display().to_string().into()));
        }

        if let Some(ref target) = self.target {
            overrides.push(("files.target", target.display().to_string().into()));
        }

        if !self.required.is_empty() {
            overrides.push(("keys.required", self.required.clone().into()));
        }

        if !self.display.is_empty() {
            overrides.push(("keys.display", self.display.clone().into()));
        }

        overrides
    }
}
