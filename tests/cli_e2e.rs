use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn agenda(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("agenda").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--dir")
        .arg(dir);
    cmd
}

fn add(dir: &Path, name: &str, date: &str, hour: &str, minute: &str, period: &str) {
    agenda(dir)
        .args(["add", name, date, hour, minute, period])
        .assert()
        .success()
        .stdout(predicate::str::contains("Appointment added"));
}

fn snapshot(dir: &Path) -> serde_json::Value {
    let content = fs::read_to_string(dir.join("appointments.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn empty_book_lists_nothing() {
    let temp = TempDir::new().unwrap();
    agenda(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No appointments scheduled."));
    assert!(!temp.path().join("appointments.json").exists());
}

#[test]
fn add_sort_and_list() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "Alice", "2025-01-10", "2", "30", "pm");
    add(temp.path(), "Bob", "2025-01-05", "9", "0", "am");

    let json = snapshot(temp.path());
    assert_eq!(json[0]["name"], "Alice");
    assert_eq!(json[0]["when"], "2025-01-10T14:30:00");

    agenda(temp.path())
        .args(["sort", "date"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sorted by date"));

    let json = snapshot(temp.path());
    assert_eq!(json[0]["name"], "Bob");
    assert_eq!(json[1]["name"], "Alice");

    agenda(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)1\. Bob.*2025-01-05 09:00 AM.*2\. Alice").unwrap());
}

#[test]
fn empty_name_is_rejected() {
    let temp = TempDir::new().unwrap();
    agenda(temp.path())
        .args(["add", "  ", "2025-01-10", "2", "30", "pm"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Client name cannot be empty"));
    assert!(!temp.path().join("appointments.json").exists());
}

#[test]
fn delete_out_of_range_keeps_store() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "A", "2025-01-01", "9", "0", "am");
    add(temp.path(), "B", "2025-01-02", "9", "0", "am");
    add(temp.path(), "C", "2025-01-03", "9", "0", "am");
    let before = snapshot(temp.path());

    agenda(temp.path())
        .args(["delete", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
    assert_eq!(snapshot(temp.path()), before);

    agenda(temp.path())
        .args(["rm", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Appointment deleted (2): B"));
    assert_eq!(snapshot(temp.path()).as_array().unwrap().len(), 2);
}

#[test]
fn update_only_changes_given_fields() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "Alice", "2025-01-10", "2", "30", "pm");
    let id = snapshot(temp.path())[0]["id"].clone();

    agenda(temp.path())
        .args(["update", "1", "--name", "Alicia", "--period", "am"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Appointment updated (1): Alicia"));

    let json = snapshot(temp.path());
    assert_eq!(json[0]["id"], id);
    assert_eq!(json[0]["name"], "Alicia");
    assert_eq!(json[0]["when"], "2025-01-10T02:30:00");
}

#[test]
fn search_sorts_by_name_and_is_name_only() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "Dana", "2025-01-04", "9", "0", "am");
    add(temp.path(), "Carol", "2025-01-03", "9", "0", "am");
    add(temp.path(), "bob", "2025-01-02", "9", "0", "am");

    agenda(temp.path())
        .args(["search", "CAROL"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2. Carol"));

    let json = snapshot(temp.path());
    assert_eq!(json[0]["name"], "bob");
    assert_eq!(json[2]["name"], "Dana");

    agenda(temp.path())
        .args(["search", "2025-01-03"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching appointments found"));
}

#[test]
fn corrupt_snapshot_is_reported() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("appointments.json"), "not json").unwrap();

    agenda(temp.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Corrupt storage"));
}

#[test]
fn config_switches_clock() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "Alice", "2025-01-10", "2", "30", "pm");

    agenda(temp.path())
        .args(["config", "clock", "24h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clock set to 24h"));

    agenda(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-01-10 14:30"));
}

#[test]
fn agenda_home_env_selects_data_dir() {
    let temp = TempDir::new().unwrap();
    Command::cargo_bin("agenda")
        .unwrap()
        .env("AGENDA_HOME", temp.path())
        .env("NO_COLOR", "1")
        .args(["add", "Eve", "2025-06-01", "12", "0", "am"])
        .assert()
        .success();

    assert_eq!(snapshot(temp.path())[0]["when"], "2025-06-01T00:00:00");
}
