//! CLI surface tests that run the binary without touching the network.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_no_args_shows_usage() {
    let mut cmd = Command::cargo_bin("cap-harvester").expect("binary");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("cap-harvester").expect("binary");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("acts"))
        .stdout(predicate::str::contains("offences"))
        .stdout(predicate::str::contains("timeline"));
}

#[test]
fn test_timeline_missing_input_fails_cleanly() {
    let temp = tempfile::tempdir().expect("tempdir");
    let mut cmd = Command::cargo_bin("cap-harvester").expect("binary");
    cmd.arg("timeline")
        .arg("--input")
        .arg(temp.path().join("absent.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Acts file not found"));
}

#[test]
fn test_timeline_builds_from_acts_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    let acts_path = temp.path().join("acts.json");
    std::fs::write(
        &acts_path,
        r#"[{"name":"Criminal Code","uri":"C-46/index.html","category":"R.S.C.","year":"1985","code":"c. C-46","has_regulations":true,"repealed":false}]"#,
    )
    .expect("write acts file");

    let mut cmd = Command::cargo_bin("cap-harvester").expect("binary");
    cmd.arg("timeline")
        .arg("--input")
        .arg(&acts_path)
        .arg("--output")
        .arg(temp.path())
        .assert()
        .success();

    let yaml = std::fs::read_to_string(temp.path().join("YAMLs/all_parliament_acts.yml"))
        .expect("timeline written");
    assert!(yaml.contains("1980's"));
    assert!(yaml.contains("January 1985: Criminal Code"));
}

#[test]
fn test_offences_rejects_unknown_category() {
    let mut cmd = Command::cargo_bin("cap-harvester").expect("binary");
    cmd.arg("offences")
        .arg("--category")
        .arg("capital")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category"));
}
