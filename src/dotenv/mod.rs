// env-manage: project .env helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `.env` loading on top of `dotenvy`.
//!
//! # Pipeline
//!
//! ```text
//! bytes --decode()--> text --dotenvy::from_read_iter()--> (key, value) items
//!                                                              |
//!                                                   EnvMap::from_entries
//!                                            last wins, bad lines warned
//!                                            and skipped
//! ```
//!
//! The process environment is only read, never written. `${VAR}` references
//! resolve against the process environment first, then against keys defined
//! earlier in the file. Single-quoted values are taken literally.


use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use tracing::{debug, warn};

use crate::error::Result;

/// Key/value pairs loaded from one `.env` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvMap {
    vars: BTreeMap<String, String>,
}

impl EnvMap {
    /// Collects parsed entries. Later keys replace earlier ones; entries that
    /// failed to parse are logged and skipped.
    ///
    /// Values never appear in the log.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = std::result::Result<(String, String), dotenvy::Error>>,
    {
        let mut vars = BTreeMap::new();
        let mut previous: Option<String> = None;

        for entry in entries {
            let after = previous.as_deref().unwrap_or("<start of file>");
            match entry {
                Ok((key, value)) => {
                    previous = Some(key.clone());
                    vars.insert(key, value);
                }
                Err(dotenvy::Error::LineParse(_, column)) => {
                    warn!(after, column, "skipping a line that could not be parsed");
                }
                Err(err) => {
                    warn!(after, "skipping a line that could not be read: {err}");
                }
            }
        }

        Self { vars }
    }

    /// Raw value for `key`, empty strings included.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Value for `key` unless it is absent or empty.
    #[must_use]
    pub fn value_if_set(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Parses `.env` text into an [`EnvMap`].
///
/// # Example
///
/// ```
/// use env_manage::dotenv::parse_env;
///
/// let env = parse_env("# comment\nexport TOKEN='abc'\nEMPTY=\n");
/// assert_eq!(env.get("TOKEN"), Some("abc"));
/// assert_eq!(env.value_if_set("EMPTY"), None);
/// ```
#[must_use]
pub fn parse_env(text: &str) -> EnvMap {
    let text = text.replace("\r\n", "\n");
    EnvMap::from_entries(dotenvy::from_read_iter(text.as_bytes()))
}

/// Reads and parses the `.env` file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_file(path: &Path) -> Result<EnvMap> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let text = decode(&bytes, path);
    let map = parse_env(&text);
    debug!(path = %path.display(), keys = map.len(), "loaded env file");
    Ok(map)
}

/// Decodes UTF-8 with any leading BOM removed. Invalid sequences become
/// U+FFFD and are reported once.
pub fn decode<'a>(bytes: &'a [u8], path: &Path) -> Cow<'a, str> {
    let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(bytes);
    if had_errors {
        warn!(path = %path.display(), "file is not valid UTF-8, invalid bytes were replaced");
    }
    text
}
