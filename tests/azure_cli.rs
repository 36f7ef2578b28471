// ABOUTME: Integration tests for the az CLI wrapper using stub scripts.
// ABOUTME: Verifies argument construction and failure handling without a real az install.

#![cfg(unix)]

use slipway::azure::{AzureCli, AzureError, SlotApi};
use slipway::types::SlotName;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Write an executable stub that logs its arguments and prints a fixed stdout.
fn write_stub(dir: &Path, stdout: &str, exit_code: i32) -> PathBuf {
    let log = dir.join("args.log");
    let script = dir.join("az-stub.sh");
    fs::write(
        &script,
        format!(
            "#!/bin/sh\necho \"$@\" >> {}\nprintf '%s' '{stdout}'\nexit {exit_code}\n",
            log.display()
        ),
    )
    .unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script
}

fn logged_args(dir: &Path) -> String {
    fs::read_to_string(dir.join("args.log")).unwrap_or_default()
}

#[tokio::test]
async fn resolve_slot_url_queries_hostname() {
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(dir.path(), "myapp-staging.azurewebsites.net\n", 0);

    let cli = AzureCli::with_program(stub.display().to_string());
    let slot = SlotName::new("staging").unwrap();

    let url = cli.resolve_slot_url("my-rg", "myapp", &slot).await.unwrap();
    assert_eq!(url, "https://myapp-staging.azurewebsites.net");

    let args = logged_args(dir.path());
    assert!(args.contains("webapp show"));
    assert!(args.contains("--slot staging"));
    assert!(args.contains("--query defaultHostName"));
}

#[tokio::test]
async fn production_slot_has_no_slot_qualifier() {
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(dir.path(), "myapp.azurewebsites.net", 0);

    let cli = AzureCli::with_program(stub.display().to_string());

    let url = cli
        .resolve_slot_url("my-rg", "myapp", &SlotName::production())
        .await
        .unwrap();
    assert_eq!(url, "https://myapp.azurewebsites.net");

    let args = logged_args(dir.path());
    assert!(!args.contains("--slot"));
}

#[tokio::test]
async fn empty_hostname_is_a_resolution_error() {
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(dir.path(), "", 0);

    let cli = AzureCli::with_program(stub.display().to_string());
    let slot = SlotName::new("staging").unwrap();

    let err = cli
        .resolve_slot_url("my-rg", "myapp", &slot)
        .await
        .unwrap_err();
    assert!(matches!(err, AzureError::Resolution { .. }));
}

#[tokio::test]
async fn nonzero_exit_surfaces_command_failure() {
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(dir.path(), "", 1);

    let cli = AzureCli::with_program(stub.display().to_string());
    let slot = SlotName::new("staging").unwrap();

    let err = cli
        .swap_slots("my-rg", "myapp", &slot, &SlotName::production())
        .await
        .unwrap_err();
    assert!(matches!(err, AzureError::CommandFailed { .. }));
}

#[tokio::test]
async fn swap_names_source_and_target_slots() {
    let dir = tempfile::tempdir().unwrap();
    let stub = write_stub(dir.path(), "", 0);

    let cli = AzureCli::with_program(stub.display().to_string());
    let slot = SlotName::new("staging").unwrap();

    cli.swap_slots("my-rg", "myapp", &slot, &SlotName::production())
        .await
        .unwrap();

    let args = logged_args(dir.path());
    assert!(args.contains("deployment slot swap"));
    assert!(args.contains("--slot staging"));
    assert!(args.contains("--target-slot production"));
}
