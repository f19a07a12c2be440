// env-manage: project .env helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!                 EnvError  (stdout, exit 1|2)
//!                     |
//!   +----------+------+-----+---------+---------+
//!   v          v            v         v         v
//! Example    Target       Keys      Usage    Unknown
//!   1          2            1         2         2
//!
//! ConfigError  InvalidValue, NotFound  (anyhow, stderr, exit 1)
//! ```
//!
//! `EnvError` values are operation reports: the dispatcher prints them as a
//! single line on stdout and exits with [`EnvError::exit_code`]. Everything
//! else travels as `anyhow::Error` and ends up on stderr.

use std::path::Path;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvError`].
pub type EnvResult<T> = std::result::Result<T, EnvError>;

/// Hint appended when `validate` cannot find the target file.
pub const INIT_HINT: &str = " Run `init` or create it manually.";

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum EnvError {
    /// The example template does not exist.
    #[error("Example file {path} not found.")]
    MissingExampleFile { path: Box<str> },

    /// The target env file does not exist.
    #[error("{name} not found.{hint}")]
    MissingTargetFile { name: Box<str>, hint: &'static str },

    /// Required keys are absent or empty.
    #[error("Missing required keys: {}", .keys.join(", "))]
    MissingRequiredKeys { keys: Box<[String]> },

    /// No command was given.
    #[error("Usage: {0} [init|validate|show]")]
    Usage(Box<str>),

    /// The command is not one of the known operations.
    #[error("Unknown command: {0}")]
    UnknownCommand(Box<str>),
}

impl EnvError {
    /// Missing example file at `path`.
    #[must_use]
    pub fn missing_example(path: &Path) -> Self {
        Self::MissingExampleFile {
            path: path.display().to_string().into_boxed_str(),
        }
    }

    /// Missing target file, reported under its configured name.
    #[must_use]
    pub fn missing_target(name: impl Into<String>) -> Self {
        Self::MissingTargetFile {
            name: name.into().into_boxed_str(),
            hint: "",
        }
    }

    /// Missing target file with a pointer to `init`.
    #[must_use]
    pub fn missing_target_with_hint(name: impl Into<String>) -> Self {
        Self::MissingTargetFile {
            name: name.into().into_boxed_str(),
            hint: INIT_HINT,
        }
    }

    /// Process exit status for this error.
    ///
    /// `1` for failed checks, `2` for usage errors and an absent target file.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::MissingTargetFile { .. } | Self::Usage(_) | Self::UnknownCommand(_) => 2,
            Self::MissingExampleFile { .. } | Self::MissingRequiredKeys { .. } => 1,
        }
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

#[cfg(test)]
mod tests;
