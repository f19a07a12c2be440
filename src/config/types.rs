// env-manage: project .env helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings sections.
//!
//! ```text
//! [files]  example, target        (relative to the project root)
//! [keys]   required, display      (ordered key lists)
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_EXAMPLE_FILE: &str = ".env.example";
pub const DEFAULT_TARGET_FILE: &str = ".env";
pub const DEFAULT_REQUIRED_KEYS: &[&str] = &["OPENAI_API_KEY"];
pub const DEFAULT_DISPLAY_KEYS: &[&str] = &["OPENAI_API_KEY", "SECRET_KEY"];

/// Example and target file names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilesConfig {
    /// Template copied by `init`. Never modified.
    pub example: PathBuf,
    /// The env file created by `init` and read by `validate` / `show`.
    pub target: PathBuf,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            example: PathBuf::from(DEFAULT_EXAMPLE_FILE),
            target: PathBuf::from(DEFAULT_TARGET_FILE),
        }
    }
}

impl FilesConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for (key, path) in [("example", &self.example), ("target", &self.target)] {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue {
                    section: "files".to_string(),
                    key: key.to_string(),
                    message: "file name must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Key lists used by `validate` and `show`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeysConfig {
    /// Keys that must be present and non-empty.
    pub required: Vec<String>,
    /// Keys printed, masked, by `show`.
    pub display: Vec<String>,
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            required: to_owned_keys(DEFAULT_REQUIRED_KEYS),
            display: to_owned_keys(DEFAULT_DISPLAY_KEYS),
        }
    }
}

impl KeysConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for (key, list) in [("required", &self.required), ("display", &self.display)] {
            if list.iter().any(|name| name.trim().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    section: "keys".to_string(),
                    key: key.to_string(),
                    message: "key names must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

fn to_owned_keys(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|&k| k.to_owned()).collect()
}

/// Checks every section.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for the first invalid entry.
pub(crate) fn validate_sections(
    files: &FilesConfig,
    keys: &KeysConfig,
) -> Result<(), ConfigError> {
    files.validate()?;
    keys.validate()
}
