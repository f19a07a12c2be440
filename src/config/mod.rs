// env-manage: project .env helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings management for env-manage.
//!
//! # Settings Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. <root>/env-manage.toml
//! 3. --config FILE
//! 4. ENV_MANAGE_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENV_MANAGE_FILES__TARGET=.env.local   → files.target = ".env.local"
//! ENV_MANAGE_KEYS__REQUIRED=A,B         → keys.required = ["A", "B"]
//! ```

pub mod loader;
pub mod types;
pub mod workspace;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{FilesConfig, KeysConfig};
use workspace::Workspace;

/// Settings file looked up in the project root.
pub const SETTINGS_FILE: &str = "env-manage.toml";

/// Prefix for settings taken from environment variables.
pub const ENV_PREFIX: &str = "ENV_MANAGE";

/// Complete application settings.
///
/// Unknown top-level keys are ignored: `ENV_MANAGE_ROOT` and
/// `ENV_MANAGE_LOG_LEVEL` belong to the CLI but share the env prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Example and target file names.
    pub files: FilesConfig,
    /// Required and displayed keys.
    pub keys: KeysConfig,
}

impl Settings {
    /// Create a new settings builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use env_manage::config::Settings;
    ///
    /// let settings = Settings::builder()
    ///     .add_toml_file_optional("env-manage.toml")
    ///     .with_env_prefix("ENV_MANAGE")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Standard loader for a project root: the root's settings file, then
    /// the `ENV_MANAGE_*` variables.
    #[must_use]
    pub fn loader_for_root(root: &Path) -> ConfigLoader {
        Self::builder()
            .add_toml_file_optional(root.join(SETTINGS_FILE))
            .with_env_prefix(ENV_PREFIX)
    }

    /// Load settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML, does not match the
    /// `Settings` structure, or fails validation.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Checks file names and key lists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for the first invalid entry.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        types::validate_sections(&self.files, &self.keys)
    }

    /// Resolves the configured files against `root`.
    #[must_use]
    pub fn workspace(&self, root: &Path) -> Workspace {
        Workspace::resolve(root, &self.files)
    }
}
