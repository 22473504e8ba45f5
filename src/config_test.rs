use crate::config::Config;
use crate::error::AdbxError;
use std::{fs, path::PathBuf};
use tempfile::TempDir;

fn create_test_config(dir: &TempDir, contents: &str) -> PathBuf {
    let config_path = dir.path().join(".adbxconfig");
    fs::write(&config_path, contents).unwrap();
    config_path
}

#[test]
fn test_empty_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(&temp_dir, "");

    let config = Config::load_from_path(&config_path).unwrap();
    assert_eq!(config.bridge.program, "adb");
    assert_eq!(config.bridge.wait_timeout, 10);
    assert!(config.bridge.kill_tree);
    assert!(!config.bridge.parallel);
    assert!(config.templates.is_empty());
}

#[test]
fn test_missing_config_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("does-not-exist");

    let config = Config::load_from_path(&config_path).unwrap();
    assert_eq!(config.bridge.program, "adb");
}

#[test]
fn test_config_loading() {
    let temp_dir = TempDir::new().unwrap();
    let config_contents = r#"
[bridge]
program = "/opt/platform-tools/adb"
wait_timeout = -1
kill_tree = false
parallel = true

[templates]
ls = "shell ls {}"
battery = "shell dumpsys battery"
"#;
    let config_path = create_test_config(&temp_dir, config_contents);

    let config = Config::load_from_path(&config_path).unwrap();

    assert_eq!(config.bridge.program, "/opt/platform-tools/adb");
    assert_eq!(config.bridge.wait_timeout, -1);
    assert!(!config.bridge.kill_tree);
    assert!(config.bridge.parallel);
    assert_eq!(config.templates.get("ls"), Some(&"shell ls {}".to_string()));
    assert_eq!(
        config.templates.get("battery"),
        Some(&"shell dumpsys battery".to_string())
    );
}

#[test]
fn test_partial_bridge_section() {
    let config = Config::parse("[bridge]\nparallel = true\n").unwrap();
    assert!(config.bridge.parallel);
    assert_eq!(config.bridge.program, "adb");
    assert_eq!(config.bridge.wait_timeout, 10);
}

#[test]
fn test_malformed_config_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = create_test_config(&temp_dir, "[bridge\nprogram = ");

    let result = Config::load_from_path(&config_path);
    assert!(matches!(result, Err(AdbxError::Config(_))));
}

#[test]
fn test_program_override_expands_tilde() {
    let config = Config::default().with_program("~/sdk/adb");
    assert!(!config.bridge.program.starts_with('~'));
    assert!(config.bridge.program.ends_with("sdk/adb"));
}
