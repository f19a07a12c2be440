// env-manage: project .env helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Partial redaction of secret values for display.
//!
//! ```text
//! None | ""          --> <not set>
//! len 1..=8          --> ***
//! len > 8            --> abcd...wxyz
//! ```
//!
//! Length is counted in characters, never bytes.

use std::fmt;

/// Shown for keys that are absent or empty.
pub const NOT_SET: &str = "<not set>";

/// Shown for values too short to reveal anything.
pub const HIDDEN: &str = "***";

/// Characters revealed at each end of a long value.
pub const REVEAL_CHARS: usize = 4;

/// Values up to this many characters are fully hidden.
pub const MAX_HIDDEN_LEN: usize = 2 * REVEAL_CHARS;

/// Masks `value` for display.
///
/// # Example
///
/// ```
/// use env_manage::mask::mask;
///
/// assert_eq!(mask(Some("sk-1234567890")), "sk-1...7890");
/// assert_eq!(mask(Some("short")), "***");
/// assert_eq!(mask(None), "<not set>");
/// ```
#[must_use]
pub fn mask(value: Option<&str>) -> String {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return NOT_SET.to_string();
    };

    let len = value.chars().count();
    if len <= MAX_HIDDEN_LEN {
        return HIDDEN.to_string();
    }

    let head: String = value.chars().take(REVEAL_CHARS).collect();
    let tail: String = value.chars().skip(len - REVEAL_CHARS).collect();
    format!("{head}...{tail}")
}

/// A key paired with its masked value, rendered as `KEY=masked`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedEntry {
    pub key: String,
    pub masked: String,
}

impl MaskedEntry {
    #[must_use]
    pub fn new(key: impl Into<String>, value: Option<&str>) -> Self {
        Self {
            key: key.into(),
            masked: mask(value),
        }
    }
}

impl fmt::Display for MaskedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.masked)
    }
}

#[cfg(test)]
mod tests;
