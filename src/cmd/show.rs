// env-manage: project .env helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `show`: masked values of the display keys.

use crate::config::workspace::Workspace;
use crate::dotenv;
use crate::error::{EnvError, Result};
use crate::mask::MaskedEntry;

/// Loads the target file and masks each of `keys`, in order.
///
/// # Errors
///
/// Returns `EnvError::MissingTargetFile` if the target does not exist, or an
/// I/O error if it cannot be read.
pub fn run_show(workspace: &Workspace, keys: &[String]) -> Result<Vec<MaskedEntry>> {
    let target = workspace.target();
    if !target.exists() {
        return Err(EnvError::missing_target(workspace.target_name()).into());
    }

    let env = dotenv::load_file(target)?;
    Ok(keys
        .iter()
        .map(|key| MaskedEntry::new(key.as_str(), env.value_if_set(key)))
        .collect())
}
