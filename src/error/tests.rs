// env-manage: project .env helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, EnvError};
use std::path::Path;

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "files".to_string(),
        key: "target".to_string(),
        message: "must not be empty".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'target' in section '[files]': must not be empty"
    );
}

#[test]
fn test_missing_keys_are_comma_joined() {
    let err = EnvError::MissingRequiredKeys {
        keys: vec!["OPENAI_API_KEY".to_string(), "SECRET_KEY".to_string()].into(),
    };
    insta::assert_snapshot!(err.to_string(), @"Missing required keys: OPENAI_API_KEY, SECRET_KEY");
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_missing_target_messages() {
    let plain = EnvError::missing_target(".env");
    let hinted = EnvError::missing_target_with_hint(".env");

    insta::assert_snapshot!(plain.to_string(), @".env not found.");
    insta::assert_snapshot!(
        hinted.to_string(),
        @".env not found. Run `init` or create it manually."
    );
    assert_eq!(plain.exit_code(), 2);
    assert_eq!(hinted.exit_code(), 2);
}

#[test]
fn test_missing_example_message() {
    let err = EnvError::missing_example(Path::new("project/.env.example"));
    insta::assert_snapshot!(err.to_string(), @"Example file project/.env.example not found.");
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_usage_errors_exit_with_two() {
    let usage = EnvError::Usage("env-manage".into());
    let unknown = EnvError::UnknownCommand("deploy".into());

    insta::assert_snapshot!(usage.to_string(), @"Usage: env-manage [init|validate|show]");
    insta::assert_snapshot!(unknown.to_string(), @"Unknown command: deploy");
    assert_eq!(usage.exit_code(), 2);
    assert_eq!(unknown.exit_code(), 2);
}

#[test]
fn test_config_not_found_display() {
    let err = ConfigError::NotFound("extra.toml".to_string());
    insta::assert_snapshot!(err.to_string(), @"config file not found: extra.toml");
}
