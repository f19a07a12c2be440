// env-manage: project .env helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for env-manage using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! env-manage [global options] <command>
//! init       create the target from the example (never overwrites)
//! validate   check that required keys are set
//! show       print masked values of the display keys
//! ```
//!
//! The command is a plain positional value, matched case-insensitively, so
//! that a missing or unknown command is reported by the dispatcher rather
//! than by clap. Positional arguments after the command are ignored.

pub mod global;


use std::fmt;
use std::str::FromStr;

use crate::cli::global::GlobalOptions;
use crate::error::{EnvError, EnvResult};
use clap::Parser;

/// Binary name used in usage messages.
pub const BIN_NAME: &str = "env-manage";

/// Create, validate and inspect a project's `.env` file.
#[derive(Debug, Parser)]
#[command(
    name = "env-manage",
    author,
    version,
    about = "Create, validate and inspect a project's .env file",
    long_about = "Create, validate and inspect a project's .env file.\n\n\
                  `env-manage init` copies .env.example to .env unless .env\n\
                  already exists. `env-manage validate` checks that the\n\
                  required keys are set. `env-manage show` prints the display\n\
                  keys with their values masked.",
    after_help = "EXIT STATUS:\n\n\
                  0  success, or init found an existing target\n\
                  1  missing required keys or missing example file\n\
                  2  usage error or missing target file\n\n\
                  SETTINGS:\n\n\
                  Settings are read from env-manage.toml in the project root,\n\
                  then --config, then ENV_MANAGE_* variables (for example\n\
                  ENV_MANAGE_KEYS__REQUIRED=A,B), then command-line options."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to run: init, validate or show
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,

    /// Anything after the command is accepted and ignored.
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub ignored: Vec<String>,
}

impl Cli {
    /// Resolves the positional command.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::Usage` when no command was given and
    /// `EnvError::UnknownCommand` when it is not recognized.
    pub fn resolve_command(&self) -> EnvResult<Command> {
        self.command
            .as_deref()
            .ok_or_else(|| EnvError::Usage(BIN_NAME.into()))?
            .parse()
    }
}

/// Available commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Create the target file from the example.
    Init,
    /// Check that required keys are set.
    Validate,
    /// Print masked values.
    Show,
}

impl Command {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Validate => "validate",
            Self::Show => "show",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = EnvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        match lowered.as_str() {
            "init" => Ok(Self::Init),
            "validate" => Ok(Self::Validate),
            "show" => Ok(Self::Show),
            _ => Err(EnvError::UnknownCommand(lowered.into_boxed_str())),
        }
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
pub fn try_parse_from<I, T>(iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(iter)
}
