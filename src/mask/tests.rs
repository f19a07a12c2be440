// env-manage: project .env helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{HIDDEN, MaskedEntry, NOT_SET, mask};

#[test]
fn test_long_value_reveals_ends() {
    assert_eq!(mask(Some("sk-1234567890")), "sk-1...7890");
}

#[test]
fn test_nine_chars_is_the_first_partial_reveal() {
    assert_eq!(mask(Some("123456789")), "1234...6789");
}

#[test]
fn test_short_values_fully_hidden() {
    for value in ["a", "short", "12345678"] {
        assert_eq!(mask(Some(value)), HIDDEN, "value {value:?} leaked");
    }
}

#[test]
fn test_absent_and_empty_are_not_set() {
    assert_eq!(mask(None), NOT_SET);
    assert_eq!(mask(Some("")), NOT_SET);
}

#[test]
fn test_length_counts_characters() {
    // 8 chars, 16 bytes
    assert_eq!(mask(Some("ÄÖÜäöüßé")), HIDDEN);
    // 9 chars
    assert_eq!(mask(Some("ÄÖÜäöüßéx")), "ÄÖÜä...üßéx");
}

#[test]
fn test_masked_entry_display() {
    let entries = [
        MaskedEntry::new("OPENAI_API_KEY", Some("sk-1234567890")),
        MaskedEntry::new("SECRET_KEY", Some("short")),
        MaskedEntry::new("MISSING", None),
    ];
    let rendered: Vec<String> = entries.iter().map(ToString::to_string).collect();
    insta::assert_snapshot!(rendered.join("\n"), @r"
    OPENAI_API_KEY=sk-1...7890
    SECRET_KEY=***
    MISSING=<not set>
    ");
}
