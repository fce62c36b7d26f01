//! End-to-end tests for `keylayout-editor config` commands.

use std::path::Path;
use std::process::{Command, Output};
use std::sync::Mutex;
use tempfile::TempDir;

// Mutex to ensure config tests that modify state don't run in parallel
static CONFIG_TEST_LOCK: Mutex<()> = Mutex::new(());

/// Path to the keylayout-editor binary
fn editor_bin() -> &'static str {
    env!("CARGO_BIN_EXE_keylayout-editor")
}

/// Creates a Command with isolated config directory for testing.
/// Pass in a config directory path to share between multiple commands in the same test.
fn isolated_config_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(editor_bin());
    cmd.env("KEYLAYOUT_EDITOR_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

fn run(args: &[&str], config_dir: &Path) -> Output {
    isolated_config_command(args, config_dir)
        .output()
        .expect("Failed to execute command")
}

fn show_json(config_dir: &Path) -> serde_json::Value {
    let output = run(&["config", "show", "--json"], config_dir);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_default() {
    let temp = TempDir::new().unwrap();
    let output = run(&["config", "show"], temp.path());

    assert_eq!(
        output.status.code(),
        Some(0),
        "Show config should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration:"));
    assert!(stdout.contains("Data directory:"));
    assert!(stdout.contains("Undo limit:"));
    assert!(stdout.contains("100"));
}

#[test]
fn test_config_show_json_schema() {
    let temp = TempDir::new().unwrap();
    let result = show_json(temp.path());

    assert!(result["paths"].is_object(), "Should have paths object");
    assert!(result["history"].is_object(), "Should have history object");
    assert_eq!(result["history"]["undo_limit"], 100);

    let data_dir = result["paths"]["data_dir"].as_str().unwrap();
    assert_eq!(Path::new(data_dir), temp.path().join("data"));
}

#[test]
fn test_config_show_does_not_create_file() {
    let temp = TempDir::new().unwrap();
    show_json(temp.path());
    assert!(!temp.path().join("config.toml").exists());
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_undo_limit() {
    let _lock = CONFIG_TEST_LOCK.lock().unwrap();
    let temp = TempDir::new().unwrap();

    let output = run(&["config", "set", "--undo-limit", "250"], temp.path());
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("Configuration updated successfully"));

    assert!(temp.path().join("config.toml").exists());
    assert_eq!(show_json(temp.path())["history"]["undo_limit"], 250);
}

#[test]
fn test_config_set_unlimited_undo() {
    let _lock = CONFIG_TEST_LOCK.lock().unwrap();
    let temp = TempDir::new().unwrap();

    let output = run(&["config", "set", "--undo-limit", "0"], temp.path());
    assert_eq!(output.status.code(), Some(0));

    let output = run(&["config", "show"], temp.path());
    assert!(String::from_utf8_lossy(&output.stdout).contains("unlimited"));
}

#[test]
fn test_config_set_data_dir_creates_directory() {
    let _lock = CONFIG_TEST_LOCK.lock().unwrap();
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("courses");
    let data_arg = data_dir.to_str().unwrap();

    let output = run(&["config", "set", "--data-dir", data_arg], temp.path());
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert!(data_dir.is_dir());
    let result = show_json(temp.path());
    assert_eq!(result["paths"]["data_dir"], data_arg);
}

#[test]
fn test_config_set_keeps_other_values() {
    let _lock = CONFIG_TEST_LOCK.lock().unwrap();
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("data-elsewhere");
    let data_arg = data_dir.to_str().unwrap();

    run(&["config", "set", "--undo-limit", "42"], temp.path());
    run(&["config", "set", "--data-dir", data_arg], temp.path());

    let result = show_json(temp.path());
    assert_eq!(result["history"]["undo_limit"], 42);
    assert_eq!(result["paths"]["data_dir"], data_arg);
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn test_config_set_requires_an_option() {
    let temp = TempDir::new().unwrap();
    let output = run(&["config", "set"], temp.path());

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("At least one configuration option"));
}

#[test]
fn test_config_set_undo_limit_too_large() {
    let temp = TempDir::new().unwrap();
    let output = run(&["config", "set", "--undo-limit", "20000"], temp.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("exceeds maximum"));
    assert!(!temp.path().join("config.toml").exists());
}

#[test]
fn test_config_set_data_dir_pointing_to_file() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("not-a-dir.txt");
    std::fs::write(&file, "x").unwrap();

    let output = run(
        &["config", "set", "--data-dir", file.to_str().unwrap()],
        temp.path(),
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("points to a file"));
}

#[test]
fn test_config_show_rejects_corrupt_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.toml"), "history = [not toml").unwrap();

    let output = run(&["config", "show"], temp.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load configuration"));
}

#[test]
fn test_config_set_keeps_invalid_file_untouched() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.toml");
    let keep_dir = temp.path().join("keep");
    let original = format!(
        "[paths]\ndata_dir = {:?}\n\n[history]\nundo_limit = 20000\n",
        keep_dir.to_str().unwrap()
    );
    std::fs::write(&config_path, &original).unwrap();

    let output = run(&["config", "set", "--undo-limit", "50"], temp.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load configuration"));
    assert_eq!(std::fs::read_to_string(&config_path).unwrap(), original);
}

#[test]
fn test_config_set_rejects_corrupt_file() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.toml");
    std::fs::write(&config_path, "history = [not toml").unwrap();

    let output = run(&["config", "set", "--undo-limit", "50"], temp.path());

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        std::fs::read_to_string(&config_path).unwrap(),
        "history = [not toml"
    );
}
