use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn check_prints_ok_for_a_well_formed_indented_source() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("Hello.jdt");
    fs::write(&input, "class Hello:\n    int x;\n").unwrap();

    let mut cmd = cargo_bin_cmd!("jtrans");
    cmd.arg("check").arg(&input);
    cmd.assert().success().stdout(predicate::str::diff("ok\n"));
}

#[test]
fn check_prints_ok_for_a_well_formed_braced_source() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("Hello.java");
    fs::write(&input, "class Hello {\n    int x;\n}\n").unwrap();

    let mut cmd = cargo_bin_cmd!("jtrans");
    cmd.arg("check").arg(&input);
    cmd.assert().success().stdout(predicate::str::diff("ok\n"));
}

#[test]
fn check_fails_and_prints_the_structured_error_for_malformed_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("Bad.jdt");
    fs::write(&input, "class Hello {\n    int x\n").unwrap();

    let mut cmd = cargo_bin_cmd!("jtrans");
    cmd.arg("check").arg(&input);
    cmd.assert().failure().stdout(predicate::str::contains("error").or(predicate::str::contains("expected")));
}

#[test]
fn check_reports_a_missing_file_without_panicking() {
    let mut cmd = cargo_bin_cmd!("jtrans");
    cmd.arg("check").arg("/nonexistent/Missing.jdt");
    cmd.assert().failure().stderr(predicate::str::contains("Error reading file"));
}
