//! Integration tests for configuration loading feeding the command tree

use std::fs;
use tempfile::TempDir;
use vppcli::cli::{exit_code, Dispatcher};
use vppcli::config::ConfigLoader;
use vppcli::modules::build_command_tree;

#[test]
fn test_loaded_config_flows_into_generated_modules() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        r#"
[fdio]
endpoint = "unix:/run/vpp/grpc.sock"
timeout_ms = 250
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&path).unwrap();
    let registry = build_command_tree(&config).unwrap();
    let dispatcher = Dispatcher::new(std::sync::Arc::new(registry)).unwrap();

    let outcome = dispatcher.dispatch(&[
        "fdio",
        "interface",
        "create-loopback",
        "--mac",
        "02:00:00:00:00:01",
    ]);
    assert_eq!(outcome.code, exit_code::SUCCESS, "stderr: {}", outcome.stderr);

    let json: serde_json::Value = serde_json::from_str(&outcome.stdout).unwrap();
    assert_eq!(json["endpoint"], "unix:/run/vpp/grpc.sock");
    assert_eq!(json["timeout_ms"], 250);
    assert_eq!(json["method"], "CreateLoopback");
}

#[test]
fn test_unknown_keys_are_ignored() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[fdio]\nretries = 3\n").unwrap();

    let config = ConfigLoader::load_from_file(&path).unwrap();
    assert_eq!(config.fdio.endpoint, "localhost:50052");
}
