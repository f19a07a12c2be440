// env-manage: project .env helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations and dispatch.
//!
//! ```text
//! Cli --resolve_command()--> Command
//!   |                           |
//!   +--Project::load()          v
//!      root + Settings --> run_init | run_validate | run_show
//!                               |
//!                               v
//!                         exit_status()
//!   Ok             --> 0
//!   Err(EnvError)  --> line on stdout, EnvError::exit_code()
//!   Err(other)     --> "Error: ..." on stderr, 1
//! ```

pub mod init;
pub mod show;
pub mod validate;


use std::io::Write;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::cli::global::GlobalOptions;
use crate::cli::{Cli, Command};
use crate::config::Settings;
use crate::config::workspace::Workspace;
use crate::error::{EnvError, Result};

use init::run_init;
use show::run_show;
use validate::run_validate;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// A project root together with its effective settings.
#[derive(Debug, Clone)]
pub struct Project {
    settings: Settings,
    workspace: Workspace,
}

impl Project {
    #[must_use]
    pub fn new(root: &Path, settings: Settings) -> Self {
        let workspace = settings.workspace(root);
        Self {
            settings,
            workspace,
        }
    }

    /// Resolves the root and loads settings for it.
    ///
    /// A relative `--root` is made absolute against the current directory,
    /// so reported paths are always absolute.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined or the
    /// settings cannot be loaded.
    pub fn load(global: &GlobalOptions) -> Result<Self> {
        let root = match &global.root {
            Some(root) => std::path::absolute(root)
                .with_context(|| format!("failed to resolve root {}", root.display()))?,
            None => std::env::current_dir().context("failed to determine current directory")?,
        };

        let mut loader = Settings::loader_for_root(&root);
        if let Some(path) = &global.config {
            loader = loader.add_toml_file(path);
        }
        for (key, value) in global.to_config_overrides() {
            loader = loader.set(key, value)?;
        }
        let settings = loader.build()?;
        debug!(root = %root.display(), "project loaded");

        Ok(Self::new(&root, settings))
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub const fn workspace(&self) -> &Workspace {
        &self.workspace
    }
}

/// Runs one command against `project`, writing its report lines to `out`.
///
/// # Errors
///
/// Returns the command's `EnvError`, or an I/O error.
pub fn run_command(command: Command, project: &Project, out: &mut dyn Write) -> Result<()> {
    let workspace = project.workspace();
    let keys = &project.settings().keys;

    match command {
        Command::Init => {
            let outcome = run_init(workspace)?;
            writeln!(out, "{outcome}")?;
        }
        Command::Validate => {
            let outcome = run_validate(workspace, &keys.required)?;
            writeln!(out, "{outcome}")?;
        }
        Command::Show => {
            for entry in run_show(workspace, &keys.display)? {
                writeln!(out, "{entry}")?;
            }
        }
    }
    Ok(())
}

/// Resolves the command, loads the project and runs it.
///
/// Returns the process exit status. Command reports go to `out`.
pub fn run(cli: &Cli, out: &mut dyn Write) -> u8 {
    let result = cli
        .resolve_command()
        .map_err(anyhow::Error::from)
        .and_then(|command| {
            if !cli.ignored.is_empty() {
                debug!(ignored = ?cli.ignored, "ignoring extra arguments");
            }
            let project = Project::load(&cli.global)?;
            debug!(%command, root = %project.workspace().root().display(), "dispatching");
            run_command(command, &project, out)
        });
    exit_status(result, out)
}

/// Maps a command result to an exit status, reporting any error.
pub fn exit_status(result: Result<()>, out: &mut dyn Write) -> u8 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => match err.downcast_ref::<EnvError>() {
            Some(report) => {
                if let Err(e) = writeln!(out, "{report}") {
                    debug!("failed to write report: {e}");
                }
                report.exit_code()
            }
            None => {
                eprintln!("Error: {err:#}");
                EXIT_FAILURE
            }
        },
    }
}
