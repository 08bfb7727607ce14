//! Config subcommand integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn timed_print(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("timed-print").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path());
    cmd
}

#[cfg(target_os = "linux")]
#[test]
fn config_path_uses_xdg_dir() {
    let dir = TempDir::new().unwrap();
    timed_print(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(dir.path().to_string_lossy().to_string())
                .and(predicate::str::contains("timed-print"))
                .and(predicate::str::contains("config.toml")),
        );
}

#[test]
fn config_help() {
    let dir = TempDir::new().unwrap();
    timed_print(&dir)
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("init")
                .and(predicate::str::contains("set"))
                .and(predicate::str::contains("get"))
                .and(predicate::str::contains("list"))
                .and(predicate::str::contains("path")),
        );
}

#[test]
fn config_get_unset_value() {
    let dir = TempDir::new().unwrap();
    timed_print(&dir)
        .args(["config", "get", "message"])
        .assert()
        .success()
        .stdout("(not set)\n");
}

#[test]
fn config_set_then_get() {
    let dir = TempDir::new().unwrap();
    timed_print(&dir)
        .args(["config", "set", "tick_interval", "400ms"])
        .assert()
        .success();
    timed_print(&dir)
        .args(["config", "get", "tick_interval"])
        .assert()
        .success()
        .stdout("400ms\n");
}

#[test]
fn config_init_twice_fails() {
    let dir = TempDir::new().unwrap();
    timed_print(&dir).args(["config", "init"]).assert().success();
    timed_print(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn config_get_unknown_key() {
    let dir = TempDir::new().unwrap();
    timed_print(&dir)
        .args(["config", "get", "unknown_key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Valid keys"));
}

#[test]
fn config_set_invalid_duration() {
    let dir = TempDir::new().unwrap();
    timed_print(&dir)
        .args(["config", "set", "initial_wait", "later"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("initial_wait"));
}
