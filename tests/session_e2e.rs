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
fn test_notes_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();

    notepass(temp_dir.path())
        .write_stdin("add-note buy milk\nadd-note call mom\nlist-notes\ndn 1\ndn 1\ndn abc\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Note added successfully!\n\nID: 1 | Note: buy milk",
        ))
        .stdout(predicate::str::contains(
            "ID: 1 | Note: buy milk\nID: 2 | Note: call mom",
        ))
        .stdout(predicate::str::contains(
            "Note deleted successfully.\n\nID: 2 | Note: call mom",
        ))
        .stdout(predicate::str::contains("Note with ID 1 not found."))
        .stdout(predicate::str::contains("Invalid ID. Please enter a number."));
}

#[test]
fn test_ids_not_reused_after_delete() {
    let temp_dir = tempfile::tempdir().unwrap();

    notepass(temp_dir.path())
        .write_stdin("an first\ndn 1\nan second\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: 2 | Note: second"));
}

#[test]
fn test_empty_listing() {
    let temp_dir = tempfile::tempdir().unwrap();

    notepass(temp_dir.path())
        .write_stdin("list-notes\n")
        .assert()
        .success()
        .stdout("No notes found.\n");
}

#[test]
fn test_prompted_note_text() {
    let temp_dir = tempfile::tempdir().unwrap();

    notepass(temp_dir.path())
        .write_stdin("add-note\n  indented text\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: 1 | Note:   indented text"));
}

#[test]
fn test_passwords_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();

    notepass(temp_dir.path())
        .write_stdin(
            "ap Example.com \nsecret\ngp example.com\ndp EXAMPLE.COM\ngp example.com\ndp example.com\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Password for 'Example.com' added successfully.",
        ))
        .stdout(predicate::str::contains(
            "--- Password for 'example.com' ---\nsecret",
        ))
        .stdout(predicate::str::contains(
            "Password for 'EXAMPLE.COM' deleted successfully.",
        ))
        .stdout(predicate::str::contains(
            "Password for 'example.com' not found.",
        ));
}

#[test]
fn test_password_overwrite() {
    let temp_dir = tempfile::tempdir().unwrap();

    notepass(temp_dir.path())
        .write_stdin("ap mail\nold-pass\nap MAIL\nnew-pass\ngp mail\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Password for 'mail' ---\nnew-pass"))
        .stdout(predicate::str::contains("old-pass").not());
}

#[test]
fn test_blank_password_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();

    notepass(temp_dir.path())
        .write_stdin("ap mail\n\nservices\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Service and Password cannot be empty.",
        ))
        .stdout(predicate::str::contains("No passwords stored."));
}

#[test]
fn test_unknown_command_keeps_session_alive() {
    let temp_dir = tempfile::tempdir().unwrap();

    notepass(temp_dir.path())
        .write_stdin("bogus\nan still works\nquit\nan after quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Unknown command 'bogus'. Type 'help' for a list.",
        ))
        .stdout(predicate::str::contains("ID: 1 | Note: still works"))
        .stdout(predicate::str::contains("after quit").not());
}

#[test]
fn test_verbose_logging_hides_secrets() {
    let temp_dir = tempfile::tempdir().unwrap();

    notepass(temp_dir.path())
        .arg("-v")
        .write_stdin("an private thought\nap bank\nhunter2\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("note added"))
        .stderr(predicate::str::contains("password stored"))
        .stderr(predicate::str::contains("hunter2").not())
        .stderr(predicate::str::contains("private thought").not());
}
