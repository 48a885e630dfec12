use assert_cmd::Command;
use predicates::prelude::*;

fn notepass(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("notepass").unwrap();
    cmd.env("NOTEPASS_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn test_config_show_defaults() {
    let temp_dir = tempfile::tempdir().unwrap();

    notepass(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("mask-passwords = true"))
        .stdout(predicate::str::contains("show-listing-after-change = true"));
}

#[test]
fn test_config_set_and_get() {
    let temp_dir = tempfile::tempdir().unwrap();

    notepass(temp_dir.path())
        .args(["config", "mask-passwords", "off"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mask-passwords set to false"));

    notepass(temp_dir.path())
        .args(["config", "mask-passwords"])
        .assert()
        .success()
        .stdout("false\n");

    assert!(temp_dir.path().join("config.json").exists());
}

#[test]
fn test_config_unknown_key() {
    let temp_dir = tempfile::tempdir().unwrap();

    notepass(temp_dir.path())
        .args(["config", "colour", "red"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown config key: colour"));
}

#[test]
fn test_listing_after_change_disabled() {
    let temp_dir = tempfile::tempdir().unwrap();

    notepass(temp_dir.path())
        .args(["config", "show-listing-after-change", "false"])
        .assert()
        .success();

    notepass(temp_dir.path())
        .write_stdin("an quiet note\n")
        .assert()
        .success()
        .stdout("Note added successfully!\n");
}
