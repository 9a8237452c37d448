use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn run_help_mentions_options() {
    let mut cmd = cargo_bin_cmd!("vitrinectl");
    let output = cmd
        .arg("run")
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    for flag in ["--duration", "--width", "--hover", "--resize-at"] {
        assert!(text.contains(flag), "run help missing {flag}");
    }
}

#[test]
fn config_subcommands_present() {
    let mut cmd = cargo_bin_cmd!("vitrinectl");
    let out = cmd
        .arg("config")
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&out);
    assert!(text.contains("show"), "config help missing show");
    assert!(text.contains("check"), "config help missing check");
}

#[test]
fn catalog_prints_json() {
    let mut cmd = cargo_bin_cmd!("vitrinectl");
    cmd.arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stdout(predicate::str::contains("\"hero_slides\""));
}

#[test]
fn config_check_reports_warnings_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vitrine.toml");
    fs::write(&path, "[deals]\nautoplay_interval_ms = 0\n").unwrap();

    let mut cmd = cargo_bin_cmd!("vitrinectl");
    cmd.current_dir(dir.path())
        .arg("config")
        .arg("check")
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("deals autoplay is disabled"))
        .stdout(predicate::str::contains("1 warning(s)"));
}

#[test]
fn config_show_renders_toml() {
    let dir = TempDir::new().unwrap();
    let mut cmd = cargo_bin_cmd!("vitrinectl");
    cmd.current_dir(dir.path())
        .env_remove("VITRINE_CONFIG_PATH")
        .env_remove("VITRINE_CONFIG_JSON")
        .arg("config")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("# source: built-in defaults"))
        .stdout(predicate::str::contains("[testimonials]"))
        .stdout(predicate::str::contains("autoplay_interval_ms = 6000"));
}

#[test]
fn invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("vitrine.json");
    fs::write(&path, r#"{"hero": {"group_size": 0}}"#).unwrap();

    let mut cmd = cargo_bin_cmd!("vitrinectl");
    cmd.current_dir(dir.path())
        .arg("config")
        .arg("check")
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load storefront configuration"));
}

#[test]
fn short_run_prints_a_summary() {
    let dir = TempDir::new().unwrap();
    let mut cmd = cargo_bin_cmd!("vitrinectl");
    cmd.current_dir(dir.path())
        .env_remove("VITRINE_CONFIG_PATH")
        .env_remove("VITRINE_CONFIG_JSON")
        .arg("run")
        .arg("--duration")
        .arg("100ms")
        .arg("--width")
        .arg("600")
        .assert()
        .success()
        .stdout(predicate::str::contains("hero"))
        .stdout(predicate::str::contains("testimonials"));
}
