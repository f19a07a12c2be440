// env-manage: project .env helper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigLoader, SETTINGS_FILE, Settings};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

fn env_vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|&(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.files.example, PathBuf::from(".env.example"));
    assert_eq!(settings.files.target, PathBuf::from(".env"));
    assert_eq!(settings.keys.required, ["OPENAI_API_KEY"]);
    assert_eq!(settings.keys.display, ["OPENAI_API_KEY", "SECRET_KEY"]);
}

#[test]
fn test_empty_sources_yield_defaults() {
    let settings = ConfigLoader::new().build().unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_settings_parse() {
    let toml = r#"
[files]
target = ".env.local"

[keys]
required = ["DATABASE_URL", "SECRET_KEY"]
"#;
    let settings = Settings::parse(toml).unwrap();
    assert_eq!(settings.files.example, PathBuf::from(".env.example"));
    assert_eq!(settings.files.target, PathBuf::from(".env.local"));
    assert_eq!(settings.keys.required, ["DATABASE_URL", "SECRET_KEY"]);
    assert_eq!(settings.keys.display, ["OPENAI_API_KEY", "SECRET_KEY"]);
}

#[test]
fn test_unknown_section_key_rejected() {
    let toml = r#"
[files]
targte = ".env"
"#;
    assert!(Settings::parse(toml).is_err());
}

#[test]
fn test_empty_target_rejected() {
    let toml = r#"
[files]
target = ""
"#;
    let err = Settings::parse(toml).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'target' in section '[files]': file name must not be empty"
    );
}

#[test]
fn test_blank_key_name_rejected() {
    let toml = r#"
[keys]
display = ["OPENAI_API_KEY", "  "]
"#;
    let err = Settings::parse(toml).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'display' in section '[keys]': key names must not be empty"
    );
}

#[test]
fn test_env_vars_override_file() {
    let settings = Settings::builder()
        .add_toml_str("[files]\ntarget = \".env.file\"\n")
        .with_env_prefix("ENV_MANAGE")
        .with_env_vars(env_vars(&[
            ("ENV_MANAGE_FILES__TARGET", ".env.from-env"),
            ("ENV_MANAGE_KEYS__REQUIRED", "A,B"),
        ]))
        .build()
        .unwrap();
    assert_eq!(settings.files.target, PathBuf::from(".env.from-env"));
    assert_eq!(settings.keys.required, ["A", "B"]);
}

#[test]
fn test_cli_scoped_env_vars_are_ignored() {
    let settings = Settings::builder()
        .with_env_prefix("ENV_MANAGE")
        .with_env_vars(env_vars(&[
            ("ENV_MANAGE_ROOT", "/srv/app"),
            ("ENV_MANAGE_LOG_LEVEL", "4"),
        ]))
        .build()
        .unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_overrides_beat_env_vars() {
    let settings = Settings::builder()
        .with_env_prefix("ENV_MANAGE")
        .with_env_vars(env_vars(&[("ENV_MANAGE_FILES__TARGET", ".env.from-env")]))
        .set("files.target", ".env.cli")
        .unwrap()
        .set("keys.display", vec!["ONLY".to_string()])
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(settings.files.target, PathBuf::from(".env.cli"));
    assert_eq!(settings.keys.display, ["ONLY"]);
}

#[test]
fn test_required_file_missing() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let missing = temp.path().join("nope.toml");
    let err = Settings::builder().add_toml_file(&missing).build().unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("config file not found: {}", missing.display())
    );
}

#[test]
fn test_loader_for_root_reads_settings_file() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    std::fs::write(
        temp.path().join(SETTINGS_FILE),
        "[files]\nexample = \"template.env\"\n",
    )
    .unwrap();

    let settings = Settings::loader_for_root(temp.path())
        .with_env_vars(HashMap::new())
        .build()
        .unwrap();
    assert_eq!(settings.files.example, PathBuf::from("template.env"));
}

#[test]
fn test_workspace_resolution() {
    let settings = Settings::default();
    let workspace = settings.workspace(Path::new("/project"));
    assert_eq!(workspace.root(), Path::new("/project"));
    assert_eq!(workspace.example(), Path::new("/project/.env.example"));
    assert_eq!(workspace.target(), Path::new("/project/.env"));
    assert_eq!(workspace.target_name(), ".env");
}

#[cfg(unix)]
#[test]
fn test_workspace_keeps_absolute_names() {
    let mut settings = Settings::default();
    settings.files.target = PathBuf::from("/etc/app/.env");
    let workspace = settings.workspace(Path::new("/project"));
    assert_eq!(workspace.target(), Path::new("/etc/app/.env"));
    assert_eq!(workspace.target_name(), "/etc/app/.env");
}
