use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn librarian(data_file: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("librarian").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--data-file")
        .arg(data_file);
    cmd
}

#[test]
fn test_session_persists_between_runs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("library.json");

    librarian(&data_file)
        .write_stdin("1\nB1\nDune\nFrank Herbert\n3\n4\nB1\n4\nB1\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Book added: Dune (3 copies)"))
        .stdout(predicate::str::contains("Exiting."));

    assert!(data_file.exists());

    librarian(&data_file)
        .write_stdin("6\n7\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ID | Title | Author"))
        .stdout(predicate::str::contains("B1 | Dune  | Frank Herbert | 3     | 2      | 1"))
        .stdout(predicate::str::contains("Issued copies : 2"))
        .stdout(predicate::str::contains("- Dune (issued: 2)"));
}

#[test]
fn test_search_is_case_insensitive() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("library.json");

    librarian(&data_file)
        .write_stdin("1\nB1\nDune\nFrank Herbert\n1\n3\nherb\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("B1 | Dune "));
}

#[test]
fn test_corrupted_file_warns_and_continues() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("library.json");
    fs::write(&data_file, "][").unwrap();

    librarian(&data_file)
        .write_stdin("6\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting empty library."))
        .stdout(predicate::str::contains("Library is empty."));
}

#[test]
fn test_non_utf8_input_does_not_end_the_session() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("library.json");

    librarian(&data_file)
        .write_stdin(b"1\nB1\nSolaris\nStanis\xb3aw Lem\n2\n6\n8\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains("Book added: Solaris (2 copies)"))
        .stdout(predicate::str::contains("Exiting."));
}

#[test]
fn test_closed_stdin_exits_cleanly() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("library.json");

    librarian(&data_file)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Choose (1-8): "));
    assert!(!data_file.exists());
}

#[test]
fn test_issue_unknown_book_reports_error() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("library.json");

    librarian(&data_file)
        .write_stdin("4\nB404\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Book ID 'B404' not found."));
}
