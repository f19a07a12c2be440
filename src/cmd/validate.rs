// env-manage: project .env helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `validate`: check that required keys are set.

use std::fmt;

use tracing::debug;

use crate::config::workspace::Workspace;
use crate::dotenv::{self, EnvMap};
use crate::error::{EnvError, Result};

/// All required keys were set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeysPresent {
    pub checked: usize,
}

impl fmt::Display for KeysPresent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("All required keys present.")
    }
}

/// Required keys that are absent or empty, in the order given.
#[must_use]
pub fn missing_keys<'k>(env: &EnvMap, required: &'k [String]) -> Vec<&'k str> {
    required
        .iter()
        .map(String::as_str)
        .filter(|key| env.value_if_set(key).is_none())
        .collect()
}

/// Loads the target file and checks `required` against it.
///
/// # Errors
///
/// Returns `EnvError::MissingTargetFile` if the target does not exist,
/// `EnvError::MissingRequiredKeys` if any key is unset, or an I/O error if
/// the file cannot be read.
pub fn run_validate(workspace: &Workspace, required: &[String]) -> Result<KeysPresent> {
    let target = workspace.target();
    if !target.exists() {
        return Err(EnvError::missing_target_with_hint(workspace.target_name()).into());
    }

    let env = dotenv::load_file(target)?;
    let missing = missing_keys(&env, required);
    debug!(required = required.len(), missing = missing.len(), "validated keys");

    if missing.is_empty() {
        Ok(KeysPresent {
            checked: required.len(),
        })
    } else {
        Err(EnvError::MissingRequiredKeys {
            keys: missing.into_iter().map(str::to_owned).collect(),
        }
        .into())
    }
}
