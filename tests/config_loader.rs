//! Config loading tests.

use std::fs;

use rollfive::config::{self, Config, ConfigError};
use tempfile::TempDir;

#[test]
fn defaults_are_sensible() {
    let config = Config::default();
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert!(config.ui.roll_on_entry);
    assert_eq!(config.share.prefix, "I rolled the dice: ");
}

#[test]
fn explicit_file_overrides_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[ui]
tick_rate_ms = 100
roll_on_entry = false

[share]
prefix = "Dice say: "
"#,
    )
    .expect("write config");

    let config = config::load(Some(path.as_path())).expect("load config");
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert!(!config.ui.roll_on_entry);
    assert_eq!(config.share.prefix, "Dice say: ");
}

#[test]
fn partial_file_keeps_remaining_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui]\ntick_rate_ms = 50\n").expect("write config");

    let config = config::load(Some(path.as_path())).expect("load config");
    assert_eq!(config.ui.tick_rate_ms, 50);
    assert!(config.ui.roll_on_entry);
    assert_eq!(config.share.prefix, "I rolled the dice: ");
}

#[test]
fn missing_explicit_file_is_a_read_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("nope.toml");
    let err = config::load(Some(path.as_path())).expect_err("should fail");
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui\ntick_rate_ms = oops").expect("write config");

    let err = config::load(Some(path.as_path())).expect_err("should fail");
    assert!(matches!(err, ConfigError::Parse { .. }));
}
