// env-manage: project .env helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `init`: create the target file from the example.

use std::fmt;
use std::path::PathBuf;

use anyhow::Context;
use tracing::{debug, info};

use crate::config::workspace::Workspace;
use crate::error::{EnvError, Result};

/// What `init` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// The example was copied to the target.
    Created { example: PathBuf, target: PathBuf },
    /// The target was already there and was left untouched.
    AlreadyExists { target: PathBuf },
}

impl fmt::Display for InitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created { example, target } => write!(
                f,
                "Created {} from {}. Please edit it and fill secrets.",
                target.display(),
                example.display()
            ),
            Self::AlreadyExists { target } => write!(
                f,
                "{} already exists. Aborting to avoid overwrite.",
                target.display()
            ),
        }
    }
}

/// Copies the example file to the target unless the target exists.
///
/// The copy is byte-for-byte. The existence check and the write are not
/// atomic.
///
/// # Errors
///
/// Returns `EnvError::MissingExampleFile` if there is no example, or an I/O
/// error if reading or writing fails.
pub fn run_init(workspace: &Workspace) -> Result<InitOutcome> {
    let example = workspace.example();
    let target = workspace.target();
    debug!(example = %example.display(), target = %target.display(), "init");

    if !example.exists() {
        return Err(EnvError::missing_example(example).into());
    }

    if target.exists() {
        return Ok(InitOutcome::AlreadyExists {
            target: target.to_path_buf(),
        });
    }

    let content =
        std::fs::read(example).with_context(|| format!("failed to read {}", example.display()))?;
    std::fs::write(target, &content)
        .with_context(|| format!("failed to write {}", target.display()))?;
    info!(target = %target.display(), bytes = content.len(), "created env file");

    Ok(InitOutcome::Created {
        example: example.to_path_buf(),
        target: target.to_path_buf(),
    })
}
