// tests/list_formats.rs

mod common;

use assert_cmd::prelude::*;
use common::docpage_cmd;
use predicates::prelude::*;

#[test]
fn test_list_formats_needs_no_input() {
    docpage_cmd()
        .arg("--list-formats")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Supported File Formats\n"))
        .stdout(predicate::str::contains("\nCode:\n"))
        .stdout(predicate::str::contains("\nStructured:\n"))
        .stdout(predicate::str::contains(".json"))
        .stdout(predicate::str::contains(".py"))
        .stdout(predicate::str::contains("Total: "));
}

#[test]
fn test_list_formats_ignores_inputs() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempfile::tempdir()?;
    std::fs::write(temp.path().join("a.json"), "{}")?;

    docpage_cmd()
        .args(["a.json", "--list-formats"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Supported File Formats"));
    assert!(!temp.path().join("a.json.md").exists());

    temp.close()?;
    Ok(())
}
