// ABOUTME: Integration tests for the slipway CLI commands.
// ABOUTME: Validates --help output, init behavior, and argument checking.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn slipway_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("slipway"))
}

const MINIMAL_CONFIG: &str = "app: myapp\nresource_group: my-rg\nslot: staging\n";

#[test]
fn help_shows_commands() {
    slipway_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("deploy"))
        .stdout(predicate::str::contains("verify"));
}

#[test]
fn init_creates_config_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("slipway.yml");

    slipway_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .success();

    assert!(config_path.exists(), "slipway.yml should be created");
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("app:"), "Config should have app field");
    assert!(
        content.contains("resource_group:"),
        "Config should have resource_group field"
    );
}

#[test]
fn init_refuses_to_overwrite_existing_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("slipway.yml");

    fs::write(&config_path, "existing: config").unwrap();

    slipway_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    let content = fs::read_to_string(&config_path).unwrap();
    assert_eq!(content, "existing: config", "Config should be untouched");
}

#[test]
fn init_force_overwrites_existing_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("slipway.yml");

    fs::write(&config_path, "existing: config").unwrap();

    slipway_cmd()
        .current_dir(temp_dir.path())
        .args(["init", "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("app:"), "Config should be regenerated");
}

#[test]
fn deploy_without_config_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    slipway_cmd()
        .current_dir(temp_dir.path())
        .args(["deploy", "--image", "myregistry.io/app:1.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration file not found"));
}

#[test]
fn deploy_without_artifact_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("slipway.yml"), MINIMAL_CONFIG).unwrap();

    slipway_cmd()
        .current_dir(temp_dir.path())
        .arg("deploy")
        .assert()
        .failure()
        .stderr(predicate::str::contains("package"));
}

#[test]
fn deploy_rejects_package_and_image_together() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("slipway.yml"), MINIMAL_CONFIG).unwrap();

    slipway_cmd()
        .current_dir(temp_dir.path())
        .args([
            "deploy",
            "--package",
            "app.zip",
            "--image",
            "myregistry.io/app:1.0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn non_prod_deploy_warns_when_swap_target_is_ignored() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("slipway.yml"), MINIMAL_CONFIG).unwrap();

    slipway_cmd()
        .current_dir(temp_dir.path())
        .args(["deploy", "--swap-target", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--swap-target has no effect"));
}

#[test]
fn deploy_with_missing_package_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("slipway.yml"), MINIMAL_CONFIG).unwrap();

    slipway_cmd()
        .current_dir(temp_dir.path())
        .args(["deploy", "--package", "no-such-file.zip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}
