use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn convert_writes_braced_java_next_to_an_indented_source() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("Hello.jdt");
    fs::write(&input, "class Hello:\n    void greet():\n        System.out.println(\"hi\")\n").unwrap();

    let mut cmd = cargo_bin_cmd!("jtrans");
    cmd.arg("convert").arg(&input);
    cmd.assert().success();

    let output = fs::read_to_string(dir.path().join("Hello.java")).unwrap();
    assert!(output.contains("class Hello {"));
    assert!(output.contains("void greet() {"));
}

#[test]
fn convert_honors_an_explicit_output_path() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("Hello.jdt");
    let output = dir.path().join("out.java");
    fs::write(&input, "class Hello {\n    int x;\n}\n").unwrap();

    let mut cmd = cargo_bin_cmd!("jtrans");
    cmd.arg("convert").arg(&input).arg("--output").arg(&output);
    cmd.assert().success();

    assert!(output.exists());
    assert!(fs::read_to_string(&output).unwrap().contains("int x;"));
}

#[test]
fn convert_reports_a_parse_error_on_malformed_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("Bad.jdt");
    fs::write(&input, "class Hello {\n    int x\n").unwrap();

    let mut cmd = cargo_bin_cmd!("jtrans");
    cmd.arg("convert").arg(&input);
    cmd.assert().failure().stderr(predicate::str::contains("Parse error"));
}

#[test]
fn convert_honors_a_custom_indent_string_from_the_config_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("Hello.jdt");
    let config = dir.path().join("jtrans.toml");
    fs::write(&input, "class Hello {\n    int x;\n}\n").unwrap();
    fs::write(&config, "[formatting]\nindent_string = \"  \"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("jtrans");
    cmd.arg("--config").arg(&config).arg("convert").arg(&input);
    cmd.assert().success();

    let output = fs::read_to_string(dir.path().join("Hello.java")).unwrap();
    assert!(output.contains("  int x;"));
}
