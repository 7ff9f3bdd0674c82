//! Integration tests for the vppcli binary: exit codes and output streams.

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Binary command with isolated config directories, ambient `VPPCLI_*`
/// overrides cleared and logging silenced.
fn isolated(temp: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_vppcli"));
    cmd.env("XDG_CONFIG_HOME", temp.path().join("config"))
        .env("XDG_DATA_HOME", temp.path().join("data"))
        .env("HOME", temp.path().join("home"))
        .env_remove("VPPCLI_LOG")
        .env_remove("VPPCLI_LOG_FORMAT")
        .env_remove("VPPCLI_LOG_OUTPUT")
        .env_remove("VPPCLI_FDIO__ENDPOINT")
        .env_remove("VPPCLI_FDIO__TIMEOUT_MS")
        .arg("--quiet");
    cmd
}

fn run(temp: &TempDir, args: &[&str]) -> Output {
    isolated(temp).args(args).output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_successful_command_exits_0() {
    let temp = TempDir::new().unwrap();
    let output = run(&temp, &["util", "version"]);
    assert_eq!(output.status.code(), Some(0), "stderr={}", stderr(&output));
    assert!(stdout(&output).starts_with("vppcli "));
}

#[test]
fn test_unknown_command_exits_2() {
    let temp = TempDir::new().unwrap();
    let output = run(&temp, &["fdio", "missing"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("unknown command \"fdio missing\""));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_group_without_subcommand_exits_2() {
    let temp = TempDir::new().unwrap();
    let output = run(&temp, &["fdio"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("interface"));
}

#[test]
fn test_help_flag_exits_0() {
    let temp = TempDir::new().unwrap();
    let output = run(&temp, &["fdio", "interface", "--help"]);
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("create-loopback"));
    assert!(out.contains("set-address"));
}

#[test]
fn test_leaf_help_after_flags_exits_0() {
    let temp = TempDir::new().unwrap();
    let output = run(
        &temp,
        &["fdio", "interface", "set-state", "--sw-if-index", "1", "--help"],
    );
    assert_eq!(output.status.code(), Some(0), "stderr={}", stderr(&output));
    assert!(stderr(&output).is_empty());
    let out = stdout(&output);
    assert!(out.contains("Usage: vppcli fdio interface set-state"));
    assert!(out.contains("--sw-if-index"));
    assert!(out.contains("--down"));
}

#[test]
fn test_util_config_prints_effective_config() {
    let temp = TempDir::new().unwrap();
    let output = isolated(&temp)
        .env("VPPCLI_FDIO__TIMEOUT_MS", "750")
        .args(["util", "config"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0), "stderr={}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("[fdio]"));
    assert!(out.contains("timeout_ms = 750"));
}

#[test]
fn test_malformed_invocation_exits_2() {
    let temp = TempDir::new().unwrap();
    let output = run(&temp, &["fdio", "interface", "set-state", "--sw-if-index", "one"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_tree_lists_all_modules() {
    let temp = TempDir::new().unwrap();
    let output = run(&temp, &["util", "tree"]);
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    let fdio_at = out.find("  fdio").unwrap();
    let route_at = out.find("    route").unwrap();
    let util_at = out.find("  util").unwrap();
    assert!(fdio_at < route_at && route_at < util_at, "tree follows registration order");
}

#[test]
fn test_config_file_endpoint_reaches_handlers() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("vppcli.toml");
    fs::write(&config_path, "[fdio]\nendpoint = \"192.0.2.10:7000\"\n").unwrap();

    let output = run(
        &temp,
        &[
            "--config",
            config_path.to_str().unwrap(),
            "fdio",
            "interface",
            "list",
        ],
    );
    assert_eq!(output.status.code(), Some(0), "stderr={}", stderr(&output));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["endpoint"], "192.0.2.10:7000");
}

#[test]
fn test_environment_overrides_config_file() {
    let temp = TempDir::new().unwrap();
    let output = isolated(&temp)
        .env("VPPCLI_FDIO__ENDPOINT", "198.51.100.1:9")
        .args(["fdio", "interface", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0), "stderr={}", stderr(&output));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["endpoint"], "198.51.100.1:9");
}

#[test]
fn test_invalid_config_fails_startup_with_1() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("vppcli.toml");
    fs::write(&config_path, "[fdio]\ntimeout_ms = 0\n").unwrap();

    let output = run(
        &temp,
        &["--config", config_path.to_str().unwrap(), "util", "version"],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("timeout_ms"));
}
