//! Tests for bootstrap configuration and root folder resolution
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate FYYUR_ROOT_FOLDER are marked with #[serial].

use fyyur_common::config::{
    default_root_folder, resolve_root_folder, TomlConfig, DEFAULT_PORT, ROOT_FOLDER_ENV,
};
use fyyur_common::Error;
use serial_test::serial;
use std::env;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
#[serial]
fn test_resolver_with_no_overrides_uses_default() {
    env::remove_var(ROOT_FOLDER_ENV);

    let root_folder = resolve_root_folder(None, &TomlConfig::default());

    assert!(!root_folder.as_os_str().is_empty());
    assert_eq!(root_folder, default_root_folder());
}

#[test]
#[serial]
fn test_resolver_env_var_beats_toml() {
    env::set_var(ROOT_FOLDER_ENV, "/tmp/fyyur-test-env-folder");

    let toml = TomlConfig {
        root_folder: Some(PathBuf::from("/tmp/fyyur-test-toml-folder")),
        ..TomlConfig::default()
    };
    let root_folder = resolve_root_folder(None, &toml);

    env::remove_var(ROOT_FOLDER_ENV);
    assert_eq!(root_folder, PathBuf::from("/tmp/fyyur-test-env-folder"));
}

#[test]
#[serial]
fn test_resolver_cli_beats_env() {
    env::set_var(ROOT_FOLDER_ENV, "/tmp/fyyur-test-env-folder");

    let root_folder = resolve_root_folder(
        Some(Path::new("/tmp/fyyur-test-cli-folder")),
        &TomlConfig::default(),
    );

    env::remove_var(ROOT_FOLDER_ENV);
    assert_eq!(root_folder, PathBuf::from("/tmp/fyyur-test-cli-folder"));
}

#[test]
#[serial]
fn test_resolver_uses_toml_when_no_cli_or_env() {
    env::remove_var(ROOT_FOLDER_ENV);

    let toml = TomlConfig {
        root_folder: Some(PathBuf::from("/tmp/fyyur-test-toml-folder")),
        ..TomlConfig::default()
    };

    assert_eq!(
        resolve_root_folder(None, &toml),
        PathBuf::from("/tmp/fyyur-test-toml-folder")
    );
}

#[test]
fn test_load_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
root_folder = "/srv/fyyur"
host = "0.0.0.0"
port = 8080

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = TomlConfig::load(Some(&path)).unwrap();

    assert_eq!(config.root_folder, Some(PathBuf::from("/srv/fyyur")));
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 8080);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_partial_toml_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "host = \"0.0.0.0\"\n").unwrap();

    let config = TomlConfig::load(Some(&path)).unwrap();

    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");

    let result = TomlConfig::load(Some(&path));

    assert!(matches!(result, Err(Error::Config(_))));
}
