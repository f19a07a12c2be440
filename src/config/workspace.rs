// env-manage: project .env helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resolved file locations.
//!
//! ```text
//! root/
//!   .env.example   (files.example)
//!   .env           (files.target)
//!   env-manage.toml
//! ```
//!
//! Absolute names are used as-is; relative ones are joined onto the root.

use std::path::{Path, PathBuf};

use super::types::FilesConfig;

/// Example and target paths for one project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
    example: PathBuf,
    target: PathBuf,
    target_name: String,
}

impl Workspace {
    /// Resolves `files` against `root`.
    #[must_use]
    pub fn resolve(root: &Path, files: &FilesConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            example: root.join(&files.example),
            target: root.join(&files.target),
            target_name: files.target.display().to_string(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn example(&self) -> &Path {
        &self.example
    }

    #[must_use]
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// The target as configured, used in `validate` / `show` messages.
    #[must_use]
    pub fn target_name(&self) -> &str {
        &self.target_name
    }
}
