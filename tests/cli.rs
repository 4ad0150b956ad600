use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const DATA: &str = r#"{
    "John Smith": {"name": "John Smith", "phones": ["1234567890"], "birthday": "1990-05-17"},
    "Jane Doe": {"name": "Jane Doe", "phones": ["5550001111"], "birthday": null}
}"#;

fn rolodex(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rolodex").unwrap();
    cmd.current_dir(dir.path()).env("NO_COLOR", "1");
    cmd
}

fn with_data() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("data.json"), DATA).unwrap();
    dir
}

#[test]
fn prompts_for_a_query_when_run_bare() {
    let dir = with_data();
    rolodex(&dir)
        .write_stdin("john\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter search query"))
        .stdout(predicate::str::contains("Contact name: John Smith"))
        .stdout(predicate::str::contains("Jane Doe").not());
}

#[test]
fn prompt_reports_no_results() {
    let dir = with_data();
    rolodex(&dir)
        .write_stdin("zzz\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found."));
}

#[test]
fn missing_data_file_is_reported_not_fatal() {
    let dir = TempDir::new().unwrap();
    rolodex(&dir)
        .write_stdin("anyone\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No address book at"))
        .stdout(predicate::str::contains("No contacts found."));
    assert!(!dir.path().join("data.json").exists());
}

#[test]
fn search_matches_phone_digits() {
    let dir = with_data();
    rolodex(&dir)
        .args(["search", "555"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe"))
        .stdout(predicate::str::contains("John Smith").not());
}

#[test]
fn add_edit_and_delete_round_trip_through_the_file() {
    let dir = TempDir::new().unwrap();

    rolodex(&dir)
        .args(["add", "Ann", "-p", "1234567890", "-b", "1985-11-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added: Ann"));

    rolodex(&dir)
        .args(["phone", "edit", "Ann", "1234567890", "5555555555"])
        .assert()
        .success();

    let saved = fs::read_to_string(dir.path().join("data.json")).unwrap();
    assert!(saved.contains("5555555555"));
    assert!(saved.contains("1985-11-02"));

    rolodex(&dir)
        .args(["delete", "Ann"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact deleted: Ann"));

    let saved = fs::read_to_string(dir.path().join("data.json")).unwrap();
    assert!(!saved.contains("Ann"));
}

#[test]
fn validation_errors_exit_non_zero() {
    let dir = TempDir::new().unwrap();
    rolodex(&dir)
        .args(["add", "Ann", "-p", "555-1234"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid phone number"));
    assert!(!dir.path().join("data.json").exists());
}

#[test]
fn editing_unknown_phone_is_an_error() {
    let dir = with_data();
    rolodex(&dir)
        .args(["phone", "edit", "Jane Doe", "0000000000", "1112223333"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Phone number not found"));
}

#[test]
fn list_uses_configured_page_size() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("rolodex.json"), r#"{"page_size": 1}"#).unwrap();
    fs::write(dir.path().join("data.json"), DATA).unwrap();

    rolodex(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Page 2 ---"))
        .stdout(predicate::str::contains("Record 2: Name: Jane Doe"));
}

#[test]
fn list_reports_dropped_partial_page() {
    let dir = with_data();
    rolodex(&dir)
        .args(["list", "--page-size", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 contact(s) not shown"));
}
