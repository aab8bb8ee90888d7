//! Unit tests for configuration and graceful degradation
//!
//! Covers:
//! - Root folder priority: CLI > environment > TOML > compiled default
//! - Missing or malformed TOML files never abort startup
//! - Root folder creation and database path layout
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate RECIPEBOX_ROOT_FOLDER are marked with #[serial].

use recipebox_common::config::{
    CompiledDefaults, RootFolderInitializer, RootFolderResolver, TomlConfig, DEFAULT_PORT,
    ROOT_FOLDER_ENV,
};
use serial_test::serial;
use std::env;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_compiled_defaults_for_current_platform() {
    let defaults = CompiledDefaults::for_current_platform();

    assert!(!defaults.root_folder.as_os_str().is_empty());
    assert!(defaults.root_folder.to_string_lossy().contains("recipebox"));
    assert_eq!(defaults.port, DEFAULT_PORT);
    assert_eq!(defaults.bind, "127.0.0.1");
    assert_eq!(defaults.log_level, "info");
}

#[test]
#[serial]
fn test_resolver_with_no_overrides_uses_default() {
    env::remove_var(ROOT_FOLDER_ENV);

    let root_folder = RootFolderResolver::new("test-module").resolve();

    assert_eq!(root_folder, CompiledDefaults::for_current_platform().root_folder);
}

#[test]
#[serial]
fn test_resolver_env_var() {
    env::set_var(ROOT_FOLDER_ENV, "/tmp/recipebox-test-env-folder");

    let root_folder = RootFolderResolver::new("test-module").resolve();
    assert_eq!(root_folder, PathBuf::from("/tmp/recipebox-test-env-folder"));

    env::remove_var(ROOT_FOLDER_ENV);
}

#[test]
#[serial]
fn test_resolver_cli_beats_env_and_toml() {
    env::set_var(ROOT_FOLDER_ENV, "/tmp/recipebox-priority-env");
    let toml = TomlConfig {
        root_folder: Some(PathBuf::from("/tmp/recipebox-priority-toml")),
        ..TomlConfig::default()
    };

    let resolver = RootFolderResolver::new("test-module")
        .with_cli_arg(Some(PathBuf::from("/tmp/recipebox-priority-cli")))
        .with_toml_config(toml);

    assert_eq!(resolver.resolve(), PathBuf::from("/tmp/recipebox-priority-cli"));

    env::remove_var(ROOT_FOLDER_ENV);
}

#[test]
#[serial]
fn test_resolver_env_beats_toml() {
    env::set_var(ROOT_FOLDER_ENV, "/tmp/recipebox-priority-env");
    let toml = TomlConfig {
        root_folder: Some(PathBuf::from("/tmp/recipebox-priority-toml")),
        ..TomlConfig::default()
    };

    let resolver = RootFolderResolver::new("test-module").with_toml_config(toml);
    assert_eq!(resolver.resolve(), PathBuf::from("/tmp/recipebox-priority-env"));

    env::remove_var(ROOT_FOLDER_ENV);
}

#[test]
#[serial]
fn test_resolver_toml_used_without_env() {
    env::remove_var(ROOT_FOLDER_ENV);
    let toml = TomlConfig {
        root_folder: Some(PathBuf::from("/tmp/recipebox-priority-toml")),
        ..TomlConfig::default()
    };

    let resolver = RootFolderResolver::new("test-module").with_toml_config(toml);
    assert_eq!(resolver.resolve(), PathBuf::from("/tmp/recipebox-priority-toml"));
}

#[test]
fn test_toml_config_parses_all_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
root_folder = "/srv/recipes"
port = 6000
bind = "0.0.0.0"

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = TomlConfig::load(&path).unwrap();
    assert_eq!(config.root_folder, Some(PathBuf::from("/srv/recipes")));
    assert_eq!(config.port, Some(6000));
    assert_eq!(config.bind.as_deref(), Some("0.0.0.0"));
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_missing_config_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = TomlConfig::load_or_default(Some(&dir.path().join("absent.toml")));

    assert!(config.root_folder.is_none());
    assert!(config.port.is_none());
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_malformed_config_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "port = \"not a number\"\n[[[").unwrap();

    assert!(TomlConfig::load(&path).is_err());

    let config = TomlConfig::load_or_default(Some(&path));
    assert!(config.port.is_none());
}

#[test]
fn test_initializer_database_path() {
    let root = PathBuf::from("/tmp/recipebox-test-root");
    let initializer = RootFolderInitializer::new(root.clone());

    assert_eq!(initializer.database_path(), root.join("recipebox.db"));
}

#[test]
fn test_initializer_creates_directory_idempotently() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("nested").join("recipebox");

    let initializer = RootFolderInitializer::new(root.clone());
    assert!(initializer.ensure_directory_exists().is_ok());
    assert!(root.is_dir(), "Directory was not created");

    // Second call - should succeed (idempotent)
    assert!(initializer.ensure_directory_exists().is_ok());
}
