//! CLI integration tests

use std::process::Command;

fn canvas_interact_bin() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_canvas-interact"));
    command.env("NO_COLOR", "1");
    command
}

#[test]
fn help_output() {
    let output = canvas_interact_bin()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("script"));
    assert!(stdout.contains("--no-system-clipboard"));
    assert!(stdout.contains("--escape-modifier"));
    assert!(stdout.contains("--long-press-ms"));
    assert!(stdout.contains("--verbose"));
}

#[test]
fn version_output() {
    let output = canvas_interact_bin()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("canvas-interact"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_command() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = canvas_interact_bin()
        .args(["config", "path"])
        .env("XDG_CONFIG_HOME", dir.path())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("canvas-interact"));
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_help() {
    let output = canvas_interact_bin()
        .args(["config", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("init"));
    assert!(stdout.contains("set"));
    assert!(stdout.contains("get"));
    assert!(stdout.contains("list"));
    assert!(stdout.contains("path"));
}

#[cfg(target_os = "linux")]
#[test]
fn config_set_then_get() {
    let dir = tempfile::tempdir().expect("tempdir");

    let set = canvas_interact_bin()
        .args(["config", "set", "menu.z_index", "25"])
        .env("XDG_CONFIG_HOME", dir.path())
        .output()
        .expect("Failed to execute command");
    assert!(set.status.success());
    assert!(dir.path().join("canvas-interact").join("config.toml").exists());

    let get = canvas_interact_bin()
        .args(["config", "get", "menu.z_index"])
        .env("XDG_CONFIG_HOME", dir.path())
        .output()
        .expect("Failed to execute command");
    assert!(get.status.success());
    assert_eq!(String::from_utf8_lossy(&get.stdout).trim(), "25");
}

#[cfg(target_os = "linux")]
#[test]
fn config_init_twice_fails() {
    let dir = tempfile::tempdir().expect("tempdir");

    let first = canvas_interact_bin()
        .args(["config", "init"])
        .env("XDG_CONFIG_HOME", dir.path())
        .output()
        .expect("Failed to execute command");
    assert!(first.status.success());

    let second = canvas_interact_bin()
        .args(["config", "init"])
        .env("XDG_CONFIG_HOME", dir.path())
        .output()
        .expect("Failed to execute command");
    assert!(!second.status.success());
    let stderr = String::from_utf8_lossy(&second.stderr);
    assert!(stderr.contains("already exists"), "got: {}", stderr);
}
