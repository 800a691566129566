use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

#[test]
fn scripted_session_registers_refills_and_saves() {
    let home = TempDir::new().unwrap();
    let db_path = home.path().join("users.json");
    let input = "2\nbob\nhunter2\nhunter2\n\
                 1\nbob\nhunter2\n\
                 1\n2\n1\n100\n1\n5\n3\n3\n3\n";

    let mut cmd = Command::cargo_bin("cashbook_cli").unwrap();
    cmd.env("CASHBOOK_HOME", home.path())
        .env("CASHBOOK_DB", &db_path)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("User registered."))
        .stdout(contains("Refilled Deposit by 100.00 USD."))
        .stdout(contains("Application closed."));

    let json = std::fs::read_to_string(&db_path).unwrap();
    assert!(json.contains("\"bob\""));
    assert!(json.contains("\"Deposit\": \"100.00\""));
}

#[test]
fn missing_database_is_created_on_startup() {
    let home = TempDir::new().unwrap();
    let db_path = home.path().join("users.json");

    let mut cmd = Command::cargo_bin("cashbook_cli").unwrap();
    cmd.env("CASHBOOK_HOME", home.path())
        .env("CASHBOOK_DB", &db_path)
        .write_stdin("3\n")
        .assert()
        .success()
        .stdout(contains("Application closed."));

    let json = std::fs::read_to_string(&db_path).unwrap();
    assert_eq!(json, "{}");
}
