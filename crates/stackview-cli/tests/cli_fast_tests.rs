//! Fast CLI tests using assert_cmd.
//! Snapshots are written to a temp data dir; nothing outside it is read.

#![allow(deprecated)] // assert_cmd::Command::cargo_bin is deprecated but works fine

use assert_cmd::Command;
use predicates::prelude::*;
use stackview_core::test_support::full_stack;
use std::path::Path;
use tempfile::TempDir;

/// Temp dir holding `acme/production/shop.json`
fn data_dir() -> TempDir {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("acme").join("production");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("shop.json"),
        serde_json::to_string_pretty(&full_stack()).unwrap(),
    )
    .unwrap();
    tmp
}

/// `stackview` pointed at `data` with a config file that does not exist
fn stackview(data: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stackview").unwrap();
    cmd.arg("--config")
        .arg(data.join("no-config.toml"))
        .arg("--data-dir")
        .arg(data);
    cmd
}

#[test]
fn test_help_flag() {
    Command::cargo_bin("stackview")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Compose Stack Service Viewer"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("stackview")
        .unwrap()
        .arg("--version")
        .assert()
        .success();
}

#[test]
fn test_subcommand_help() {
    for subcmd in &["show", "env", "aliases", "tui", "config"] {
        Command::cargo_bin("stackview")
            .unwrap()
            .args([subcmd, "--help"])
            .assert()
            .success()
            .stdout(predicate::str::is_empty().not());
    }
}

#[test]
fn test_show_service_masks_values() {
    let tmp = data_dir();
    stackview(tmp.path())
        .args(["show", "acme", "production", "shop", "api"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shop_k3f9_api"))
        .stdout(predicate::str::contains("ghcr.io/shop/api:2.1@sha256:9f86d081"))
        .stdout(predicate::str::contains("DATABASE_URL  *********"))
        .stdout(predicate::str::contains("postgres://").not());
}

#[test]
fn test_show_reveal() {
    let tmp = data_dir();
    stackview(tmp.path())
        .args(["show", "acme", "production", "shop", "api", "--reveal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("postgres://shop@db/shop"))
        .stdout(predicate::str::contains("<empty>"));
}

#[test]
fn test_show_unknown_service_prints_overview() {
    let tmp = data_dir();
    stackview(tmp.path())
        .args(["show", "acme", "production", "shop", "ghost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("acme/production/shop"))
        .stdout(predicate::str::contains("3 services"))
        .stdout(predicate::str::contains("shop_k3f9_worker"));
}

#[test]
fn test_show_without_service_prints_overview() {
    let tmp = data_dir();
    stackview(tmp.path())
        .args(["show", "acme", "production", "shop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 services"));
}

#[test]
fn test_env_prints_dotenv() {
    let tmp = data_dir();
    stackview(tmp.path())
        .args(["env", "acme", "production", "shop", "api"])
        .assert()
        .success()
        .stdout("DATABASE_URL=\"postgres://shop@db/shop\"\nDEBUG=\"\"\nWORKERS=\"4\"\n");
}

#[test]
fn test_env_unknown_service_fails() {
    let tmp = data_dir();
    stackview(tmp.path())
        .args(["env", "acme", "production", "shop", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Service 'x' not found in stack 'shop'",
        ));
}

#[test]
fn test_aliases() {
    let tmp = data_dir();
    stackview(tmp.path())
        .args(["aliases", "acme", "production", "shop", "db"])
        .assert()
        .success()
        .stdout("Environment alias  shop-net-db\nGlobal alias       k3f9_db\n");

    stackview(tmp.path())
        .args(["aliases", "acme", "production", "shop", "db", "--full"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shop-net-db.zaneops.internal"))
        .stdout(predicate::str::contains("k3f9_db.zaneops.internal"));
}

#[test]
fn test_missing_stack_fails() {
    let tmp = data_dir();
    stackview(tmp.path())
        .args(["show", "acme", "production", "nope", "api"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Stack not found: acme/production/nope"));
}

#[test]
fn test_corrupt_snapshot_fails() {
    let tmp = data_dir();
    std::fs::write(tmp.path().join("acme/production/broken.json"), "{ not json").unwrap();
    stackview(tmp.path())
        .args(["show", "acme", "production", "broken", "api"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid stack snapshot"));
}

#[test]
fn test_demo_show() {
    let tmp = tempfile::tempdir().unwrap();
    stackview(tmp.path())
        .args(["--demo", "show", "demo", "production", "ghost", "ghost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ghost_a1b2c3_ghost"));
}

#[test]
fn test_config_shows_effective_values() {
    let tmp = tempfile::tempdir().unwrap();
    stackview(tmp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("not created yet"))
        .stdout(predicate::str::contains("internal_domain = \"zaneops.internal\""));
}

#[test]
fn test_invalid_config_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let config = tmp.path().join("config.toml");
    std::fs::write(&config, "[tui]\ntick_rate_ms = 0\n").unwrap();

    Command::cargo_bin("stackview")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .args(["show", "acme", "production", "shop"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tick_rate_ms"));
}
